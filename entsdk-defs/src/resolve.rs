//! Name resolution and dependency ordering for declared types.

use std::sync::Arc;

use entsdk_core::{DataType, FixedDict, Primitive};
use indexmap::IndexMap;

use crate::{
    decl::TypeDecl,
    error::{Result, SourceContext},
    expr::TypeExpr,
};

/// A declaration with inline dicts already promoted to named types.
#[derive(Debug, Clone)]
enum FlatDecl {
    Expr(TypeExpr),
    Dict(Vec<(String, TypeExpr)>),
}

/// Resolves `[types]` declarations depth first.
///
/// Types land in the registry in the order their resolution finishes, so
/// every type follows everything it refers to.
pub(crate) struct TypeResolver<'a> {
    ctx: &'a SourceContext,
    decls: IndexMap<String, FlatDecl>,
    resolved: IndexMap<String, Arc<DataType>>,
    visiting: Vec<String>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(types: &IndexMap<String, TypeDecl>, ctx: &'a SourceContext) -> Result<Self> {
        let mut resolver = Self {
            ctx,
            decls: IndexMap::new(),
            resolved: IndexMap::new(),
            visiting: Vec::new(),
        };
        for (name, decl) in types {
            resolver.flatten(name, decl)?;
        }
        Ok(resolver)
    }

    /// Register an inline dict member as `<Parent>_<member>` ahead of its parent.
    fn flatten(&mut self, name: &str, decl: &TypeDecl) -> Result<()> {
        let flat = match decl {
            TypeDecl::Expr(source) => FlatDecl::Expr(self.parse(source)?),
            TypeDecl::Dict(members) => {
                let mut fields = Vec::with_capacity(members.len());
                for (member, member_decl) in members {
                    let expr = match member_decl {
                        TypeDecl::Expr(source) => self.parse(source)?,
                        TypeDecl::Dict(_) => {
                            let promoted = format!("{}_{}", name, member);
                            self.flatten(&promoted, member_decl)?;
                            TypeExpr::Named(promoted)
                        }
                    };
                    fields.push((member.clone(), expr));
                }
                FlatDecl::Dict(fields)
            }
        };

        if Primitive::from_keyword(name).is_some() || name == "ARRAY" || name == "FIXED_DICT" {
            return Err(self
                .ctx
                .duplicate_type_error(name, format!("'{}' is a builtin type name", name)));
        }
        if self.decls.contains_key(name) {
            return Err(self.ctx.duplicate_type_error(
                name,
                format!(
                    "'{}' is declared more than once; inline dict members are named <Parent>_<member>",
                    name
                ),
            ));
        }
        self.decls.insert(name.to_string(), flat);
        Ok(())
    }

    fn parse(&self, source: &str) -> Result<TypeExpr> {
        TypeExpr::parse(source).map_err(|reason| self.ctx.invalid_type_expr_error(source, reason))
    }

    /// Resolve every declaration.
    pub fn resolve_all(&mut self) -> Result<()> {
        let names: Vec<String> = self.decls.keys().cloned().collect();
        for name in names {
            self.resolve_named(&name, "[types]")?;
        }
        Ok(())
    }

    /// Parse and resolve an expression written at `used_in`.
    pub fn parse_and_resolve(&mut self, source: &str, used_in: &str) -> Result<Arc<DataType>> {
        let expr = self.parse(source)?;
        self.resolve_expr(&expr, used_in)
    }

    fn resolve_expr(&mut self, expr: &TypeExpr, used_in: &str) -> Result<Arc<DataType>> {
        match expr {
            TypeExpr::Named(name) => self.resolve_named(name, used_in),
            TypeExpr::Array(element) => {
                let element = self.resolve_expr(element, used_in)?;
                Ok(Arc::new(DataType::array(element)))
            }
        }
    }

    fn resolve_named(&mut self, name: &str, used_in: &str) -> Result<Arc<DataType>> {
        if let Some(primitive) = Primitive::from_keyword(name) {
            return Ok(primitive.into());
        }
        if let Some(ty) = self.resolved.get(name) {
            return Ok(Arc::clone(ty));
        }
        if let Some(start) = self.visiting.iter().position(|v| v == name) {
            let mut cycle = self.visiting[start..].to_vec();
            cycle.push(name.to_string());
            return Err(self.ctx.type_cycle_error(name, &cycle));
        }
        let Some(decl) = self.decls.get(name).cloned() else {
            return Err(self.ctx.unknown_type_error(name, used_in));
        };

        self.visiting.push(name.to_string());
        let ty = match decl {
            FlatDecl::Expr(expr) => {
                let target = self.resolve_expr(&expr, name)?;
                DataType::clone(&target).named(name)
            }
            FlatDecl::Dict(fields) => {
                let mut dict = FixedDict::new();
                for (member, expr) in fields {
                    let site = format!("{}.{}", name, member);
                    let member_ty = self.resolve_expr(&expr, &site)?;
                    dict.push(member, member_ty);
                }
                DataType::fixed_dict(name, dict)
            }
        };
        self.visiting.pop();

        let ty = Arc::new(ty);
        self.resolved.insert(name.to_string(), Arc::clone(&ty));
        tracing::trace!("resolved type {} as {}", name, ty.name());
        Ok(ty)
    }

    /// Declared types in dependency order.
    pub fn into_types(self) -> impl Iterator<Item = Arc<DataType>> {
        self.resolved.into_values()
    }
}

#[cfg(test)]
mod tests {
    use entsdk_core::DataKind;

    use super::*;
    use crate::Error;

    fn decls(src: &str) -> IndexMap<String, TypeDecl> {
        #[derive(serde::Deserialize)]
        struct Types {
            types: IndexMap<String, TypeDecl>,
        }
        toml::from_str::<Types>(src).unwrap().types
    }

    fn resolve(src: &str) -> Result<Vec<Arc<DataType>>> {
        let ctx = SourceContext::new(src, "entities.toml");
        let types = decls(src);
        let mut resolver = TypeResolver::new(&types, &ctx)?;
        resolver.resolve_all()?;
        Ok(resolver.into_types().collect())
    }

    fn aliases(types: &[Arc<DataType>]) -> Vec<&str> {
        types.iter().map(|t| t.alias()).collect()
    }

    #[test]
    fn test_dependencies_precede_dependents() {
        let types = resolve(
            r#"
            [types]
            IDS = "ARRAY<ENTITY_ID>"
            ENTITY_ID = "INT32"
            "#,
        )
        .unwrap();

        assert_eq!(aliases(&types), vec!["ENTITY_ID", "IDS"]);
        match types[1].kind() {
            DataKind::Array(element) => assert_eq!(element.alias(), "ENTITY_ID"),
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_inline_dict_is_promoted() {
        let types = resolve(
            r#"
            [types.AVATAR_INFO]
            dbid = "UINT64"
            [types.AVATAR_INFO.pos]
            x = "FLOAT"
            y = "FLOAT"
            "#,
        )
        .unwrap();

        assert_eq!(aliases(&types), vec!["AVATAR_INFO_pos", "AVATAR_INFO"]);
        match types[1].kind() {
            DataKind::FixedDict(dict) => {
                let members: Vec<_> = dict.fields().map(|(n, t)| (n, t.alias())).collect();
                assert_eq!(
                    members,
                    vec![("dbid", "UINT64"), ("pos", "AVATAR_INFO_pos")]
                );
            }
            other => panic!("expected dict, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type() {
        let err = resolve(
            r#"
            [types]
            IDS = "ARRAY<ENTITY_ID>"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::UnknownType { name, used_in, .. } => {
                assert_eq!(name, "ENTITY_ID");
                assert_eq!(used_in, "IDS");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cycle() {
        let err = resolve(
            r#"
            [types]
            A = "ARRAY<B>"
            [types.B]
            next = "A"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::TypeCycle { cycle, .. } => assert_eq!(cycle, "A -> B -> A"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_builtin_name_collision() {
        let err = resolve(
            r#"
            [types]
            INT32 = "UINT32"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::DuplicateType { .. }));
    }

    #[test]
    fn test_promoted_name_collision() {
        let err = resolve(
            r#"
            [types]
            INFO_pos = "INT32"
            [types.INFO.pos]
            x = "FLOAT"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::DuplicateType { name, .. } => assert_eq!(name, "INFO_pos"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
