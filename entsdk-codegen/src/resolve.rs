//! Recursive type resolution through a [`TypeMapper`].

use entsdk_core::{DataKind, DataType, PassBy};

use crate::{
    error::{CodegenError, Result},
    mapper::{ResolvedType, TypeMapper, UnresolvedPolicy},
};

/// Resolves schema types for one backend.
pub struct Resolver<'a> {
    backend: &'static str,
    mapper: &'a dyn TypeMapper,
}

impl<'a> Resolver<'a> {
    pub fn new(backend: &'static str, mapper: &'a dyn TypeMapper) -> Self {
        Self { backend, mapper }
    }

    /// Resolve `ty` to a target name and passing convention.
    ///
    /// `site` names where the type is used and only appears in diagnostics.
    pub fn resolve(&self, ty: &DataType, site: &str) -> Result<ResolvedType> {
        match ty.kind() {
            DataKind::Primitive(primitive) => match self.mapper.map_primitive(*primitive) {
                Some(name) => Ok(ResolvedType {
                    name: name.to_string(),
                    pass_by: primitive.pass_by(),
                }),
                None => self.unresolved(ty, site),
            },
            DataKind::Array(element) => self.array_reference(ty, element, site),
            DataKind::FixedDict(_) => Ok(ResolvedType::by_reference(ty.alias())),
        }
    }

    /// Reference to an array type: its alias when declared, the inline
    /// array syntax around the resolved element otherwise.
    pub fn array_reference(
        &self,
        ty: &DataType,
        element: &DataType,
        site: &str,
    ) -> Result<ResolvedType> {
        if ty.is_declared() {
            return Ok(ResolvedType::by_reference(ty.alias()));
        }
        let element = self.element_name(element, site)?;
        Ok(ResolvedType::by_reference(self.mapper.map_inline_array(&element)))
    }

    /// Target name of an array element.
    pub fn element_name(&self, element: &DataType, site: &str) -> Result<String> {
        self.resolve(element, site).map(|resolved| resolved.name)
    }

    fn unresolved(&self, ty: &DataType, site: &str) -> Result<ResolvedType> {
        match self.mapper.unresolved_policy() {
            UnresolvedPolicy::Fallback(name) => {
                tracing::warn!(
                    "{} backend has no mapping for {} at {}, using {}",
                    self.backend,
                    ty.describe(),
                    site,
                    name
                );
                Ok(ResolvedType {
                    name: name.to_string(),
                    pass_by: PassBy::Reference,
                })
            }
            UnresolvedPolicy::Fail => Err(CodegenError::UnsupportedType {
                backend: self.backend,
                type_name: ty.describe(),
                site: site.to_string(),
            }),
        }
    }
}
