//! Vector encoding selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How `VECTOR2/3/4` values are represented on the client.
///
/// Resolved once at the start of a run and handed to the backend type mapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VectorEncoding {
    /// Floating point components.
    #[default]
    Floating,
    /// Integer (fixed-point) components, for clients without float support.
    FixedPoint,
}

impl VectorEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            VectorEncoding::Floating => "floating",
            VectorEncoding::FixedPoint => "fixed-point",
        }
    }
}

impl fmt::Display for VectorEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VectorEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "floating" | "float" => Ok(VectorEncoding::Floating),
            "fixed-point" | "fixed_point" | "fixed" => Ok(VectorEncoding::FixedPoint),
            _ => Err(format!(
                "unknown vector encoding '{}', expected 'floating' or 'fixed-point'",
                s
            )),
        }
    }
}
