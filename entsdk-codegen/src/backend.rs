//! The backend contract: type mapping plus text-producing hooks.

use std::fmt;

use entsdk_core::{DataType, EntityModule, MethodDescription, Primitive, ServerError};

use crate::{
    builder::{CodeBuilder, Indent},
    emitter::Placeholder,
    mapper::{ResolvedType, TypeMapper},
};

/// Kind of a resolved field, for backends that pick initializers by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Primitive(Primitive),
    Array,
    FixedDict,
}

/// A dict member or entity property with its resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub ty: ResolvedType,
    pub kind: FieldKind,
}

/// A finished method parameter list, `"<type> param1, <type> param2"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    params: Vec<String>,
}

impl ArgumentList {
    pub fn new(params: Vec<String>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.params.join(", "))
    }
}

/// A target client runtime.
///
/// The generator owns traversal order and type dispatch; a backend only
/// supplies file names, the type mapper, and the text for each hook.
pub trait Backend {
    /// Canonical identifier (e.g. "unity").
    fn name(&self) -> &'static str;

    fn type_mapper(&self) -> &dyn TypeMapper;

    fn indent(&self) -> Indent;

    /// File name of the type-declaration file.
    fn types_file_name(&self) -> String;

    /// File name for one entity module.
    fn module_file_name(&self, module: &EntityModule) -> String;

    /// File name of the server error table.
    fn errors_file_name(&self) -> String;

    fn types_begin(&self, out: &mut CodeBuilder);

    fn types_end(&self, out: &mut CodeBuilder);

    fn fixed_dict_begin(&self, out: &mut CodeBuilder, ty: &DataType);

    fn fixed_dict_member(&self, out: &mut CodeBuilder, field: &Field<'_>);

    fn fixed_dict_end(&self, out: &mut CodeBuilder, ty: &DataType);

    /// Begin an array declaration. The rendered text must contain `element`
    /// exactly once; it is replaced by the resolved element name.
    fn array_begin(&self, out: &mut CodeBuilder, ty: &DataType, element: &Placeholder);

    fn array_end(&self, out: &mut CodeBuilder, ty: &DataType);

    fn module_begin(&self, out: &mut CodeBuilder, module: &EntityModule);

    fn property(&self, out: &mut CodeBuilder, module: &EntityModule, field: &Field<'_>);

    /// Called once before the first client method of a module.
    fn methods_begin(&self, _out: &mut CodeBuilder, _module: &EntityModule) {}

    fn method(
        &self,
        out: &mut CodeBuilder,
        module: &EntityModule,
        method: &MethodDescription,
        args: &ArgumentList,
    );

    fn module_end(&self, out: &mut CodeBuilder, module: &EntityModule);

    /// Render the whole error table, already ordered by id.
    fn server_errors(&self, out: &mut CodeBuilder, errors: &[ServerError]);
}
