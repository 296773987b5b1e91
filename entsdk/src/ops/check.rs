//! Check operation - summarize loaded entity definitions.

use std::path::Path;

use entsdk_core::{DataKind, DataType, SchemaProvider};
use entsdk_defs::EntityDefs;

use crate::reports::{CheckReport, ModuleSummary};

/// Execute the check operation.
///
/// Loading already validated the definitions; this only collects what the
/// generators will see.
pub fn check(defs: &EntityDefs, defs_path: &Path) -> CheckReport {
    let types = defs
        .data_types()
        .iter()
        .filter(|ty| ty.is_declared())
        .map(|ty| format!("{} = {}", ty.alias(), definition(ty)))
        .collect();

    let modules = defs
        .entity_modules()
        .iter()
        .map(|module| ModuleSummary {
            name: module.name.clone(),
            has_client: module.has_client,
            properties: module
                .client_properties()
                .map(|p| format!("{}: {}", p.name, p.data_type.describe()))
                .collect(),
            methods: module
                .client_methods()
                .map(|m| {
                    let args: Vec<_> = m.args.iter().map(|a| a.describe()).collect();
                    format!("{}({})", m.name, args.join(", "))
                })
                .collect(),
        })
        .collect();

    let errors = defs
        .server_errors()
        .iter()
        .map(|e| format!("{} {}", e.id, e.name))
        .collect();

    CheckReport {
        defs_path: defs_path.to_path_buf(),
        types,
        modules,
        errors,
    }
}

/// What a declared type stands for, one level deep.
fn definition(ty: &DataType) -> String {
    match ty.kind() {
        DataKind::Primitive(p) => p.as_str().to_string(),
        DataKind::Array(element) => format!("ARRAY<{}>", element.describe()),
        DataKind::FixedDict(dict) => {
            let members: Vec<_> = dict
                .fields()
                .map(|(name, member)| format!("{}: {}", name, member.describe()))
                .collect();
            format!("FIXED_DICT {{ {} }}", members.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_check_summary() {
        let src = r#"
[types]
ENTITY_ID = "INT32"
IDS = "ARRAY<ENTITY_ID>"

[types.POSITION]
x = "FLOAT"
y = "FLOAT"

[entities.Avatar.properties]
hp = { type = "UINT16", flags = "ALL_CLIENTS" }
dbid = { type = "UINT64", flags = "BASE" }
friends = { type = "ARRAY<ENTITY_ID>", flags = "OWN_CLIENT" }

[entities.Avatar.client_methods]
moveTo = ["POSITION", "FLOAT"]

[entities.Avatar.cell_methods]
attack = ["ENTITY_ID"]

[entities.Account]
has_client = false

[errors]
SUCCESS = { id = 0, descr = "Success." }
"#;
        let defs = EntityDefs::from_str(src).unwrap();
        let report = check(&defs, Path::new("entities.toml"));

        assert_eq!(
            report.types,
            vec![
                "ENTITY_ID = INT32",
                "IDS = ARRAY<ENTITY_ID>",
                "POSITION = FIXED_DICT { x: FLOAT, y: FLOAT }",
            ]
        );

        assert_eq!(report.modules.len(), 2);
        let avatar = &report.modules[0];
        assert!(avatar.has_client);
        assert_eq!(avatar.properties, vec!["hp: UINT16", "friends: ARRAY<ENTITY_ID>"]);
        assert_eq!(avatar.methods, vec!["moveTo(POSITION, FLOAT)"]);
        assert!(!report.modules[1].has_client);

        assert_eq!(report.errors, vec!["0 SUCCESS"]);
    }
}
