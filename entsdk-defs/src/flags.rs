//! Property distribution flags.

use std::fmt;

use serde::Deserialize;

/// Where a property lives and which clients receive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyFlags {
    Base,
    BaseAndClient,
    CellPrivate,
    CellPublic,
    CellPublicAndOwn,
    AllClients,
    OwnClient,
    OtherClients,
}

impl PropertyFlags {
    /// Whether the property is replicated to at least one client.
    pub fn is_client_visible(&self) -> bool {
        match self {
            PropertyFlags::Base | PropertyFlags::CellPrivate | PropertyFlags::CellPublic => false,
            PropertyFlags::BaseAndClient
            | PropertyFlags::CellPublicAndOwn
            | PropertyFlags::AllClients
            | PropertyFlags::OwnClient
            | PropertyFlags::OtherClients => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyFlags::Base => "BASE",
            PropertyFlags::BaseAndClient => "BASE_AND_CLIENT",
            PropertyFlags::CellPrivate => "CELL_PRIVATE",
            PropertyFlags::CellPublic => "CELL_PUBLIC",
            PropertyFlags::CellPublicAndOwn => "CELL_PUBLIC_AND_OWN",
            PropertyFlags::AllClients => "ALL_CLIENTS",
            PropertyFlags::OwnClient => "OWN_CLIENT",
            PropertyFlags::OtherClients => "OTHER_CLIENTS",
        }
    }
}

impl fmt::Display for PropertyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
