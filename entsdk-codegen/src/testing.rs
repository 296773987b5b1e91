//! Test utilities for backends and the generator.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::sync::Arc;

use entsdk_core::{
    DataType, EntityModule, FixedDict, MethodDescription, PassBy, Primitive, PropertyDescription,
    Schema, ServerError, WriteError, WriteStage, escape_string_literal,
};

use crate::{
    backend::{ArgumentList, Backend, Field},
    builder::{CodeBuilder, Indent},
    emitter::Placeholder,
    error::{CodegenError, Result},
    generator::{GenerateResult, Generator},
    mapper::{ResolvedType, TypeMapper, UnresolvedPolicy},
};

/// Mapper used by [`RecordingBackend`]: lowercase keywords, `[T]` arrays,
/// `&T` references, and no mapping for `VECTOR4`.
pub struct RecordingMapper {
    pub policy: UnresolvedPolicy,
}

impl TypeMapper for RecordingMapper {
    fn map_primitive(&self, primitive: Primitive) -> Option<&'static str> {
        match primitive {
            Primitive::Int8 => Some("i8"),
            Primitive::Int16 => Some("i16"),
            Primitive::Int32 => Some("i32"),
            Primitive::Int64 => Some("i64"),
            Primitive::UInt8 => Some("u8"),
            Primitive::UInt16 => Some("u16"),
            Primitive::UInt32 => Some("u32"),
            Primitive::UInt64 => Some("u64"),
            Primitive::Float => Some("f32"),
            Primitive::Double => Some("f64"),
            Primitive::String | Primitive::Unicode => Some("str"),
            Primitive::Blob
            | Primitive::Python
            | Primitive::PyDict
            | Primitive::PyTuple
            | Primitive::PyList => Some("bytes"),
            Primitive::Vector2 => Some("vec2"),
            Primitive::Vector3 => Some("vec3"),
            Primitive::Vector4 => None,
            Primitive::EntityCall => Some("call"),
        }
    }

    fn map_inline_array(&self, element: &str) -> String {
        format!("[{}]", element)
    }

    fn qualify(&self, ty: &ResolvedType) -> String {
        match ty.pass_by {
            PassBy::Value => ty.name.clone(),
            PassBy::Reference => format!("&{}", ty.name),
        }
    }

    fn unresolved_policy(&self) -> UnresolvedPolicy {
        self.policy
    }
}

/// A minimal backend that renders one plain line per hook.
pub struct RecordingBackend {
    mapper: RecordingMapper,
    omit_placeholder: bool,
}

impl RecordingBackend {
    pub fn new(policy: UnresolvedPolicy) -> Self {
        Self {
            mapper: RecordingMapper { policy },
            omit_placeholder: false,
        }
    }

    /// A backend whose array declarations drop the element placeholder.
    pub fn broken() -> Self {
        Self {
            omit_placeholder: true,
            ..Self::new(UnresolvedPolicy::Fail)
        }
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new(UnresolvedPolicy::Fallback("any"))
    }
}

impl Backend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.mapper
    }

    fn indent(&self) -> Indent {
        Indent::Spaces(2)
    }

    fn types_file_name(&self) -> String {
        "types.txt".to_string()
    }

    fn module_file_name(&self, module: &EntityModule) -> String {
        format!("{}.txt", module.name)
    }

    fn errors_file_name(&self) -> String {
        "errors.txt".to_string()
    }

    fn types_begin(&self, out: &mut CodeBuilder) {
        out.push_line("types {").push_indent();
    }

    fn types_end(&self, out: &mut CodeBuilder) {
        out.push_dedent().push_line("}");
    }

    fn fixed_dict_begin(&self, out: &mut CodeBuilder, ty: &DataType) {
        out.push_line(&format!("dict {} {{", ty.alias())).push_indent();
    }

    fn fixed_dict_member(&self, out: &mut CodeBuilder, field: &Field<'_>) {
        out.push_line(&format!("{}: {}", field.name, field.ty.name));
    }

    fn fixed_dict_end(&self, out: &mut CodeBuilder, _ty: &DataType) {
        out.push_dedent().push_line("}");
    }

    fn array_begin(&self, out: &mut CodeBuilder, ty: &DataType, element: &Placeholder) {
        if self.omit_placeholder {
            out.push_line(&format!("array {} = [?]", ty.alias()));
        } else {
            out.push_line(&format!("array {} = [{}]", ty.alias(), element));
        }
    }

    fn array_end(&self, _out: &mut CodeBuilder, _ty: &DataType) {}

    fn module_begin(&self, out: &mut CodeBuilder, module: &EntityModule) {
        out.push_line(&format!("module {} {{", module.name)).push_indent();
    }

    fn property(&self, out: &mut CodeBuilder, _module: &EntityModule, field: &Field<'_>) {
        out.push_line(&format!("prop {}: {}", field.name, field.ty.name));
    }

    fn methods_begin(&self, out: &mut CodeBuilder, _module: &EntityModule) {
        out.push_blank();
    }

    fn method(
        &self,
        out: &mut CodeBuilder,
        _module: &EntityModule,
        method: &MethodDescription,
        args: &ArgumentList,
    ) {
        out.push_line(&format!("fn {}({})", method.name, args));
    }

    fn module_end(&self, out: &mut CodeBuilder, _module: &EntityModule) {
        out.push_dedent().push_line("}");
    }

    fn server_errors(&self, out: &mut CodeBuilder, errors: &[ServerError]) {
        for error in errors {
            out.push_line(&format!(
                "error {} {} \"{}\"",
                error.id,
                error.name,
                escape_string_literal(&error.description)
            ));
        }
    }
}

/// The canonical test schema: an `Avatar` with a client part and an
/// `Account` without one.
///
/// `LOADOUT` has declared array, declared dict and inline array members;
/// `GRID` is a declared array of inline arrays.
pub fn avatar_schema() -> Schema {
    let mut schema = Schema::new();

    let entity_id = schema.add_type(DataType::primitive(Primitive::Int32).named("ENTITY_ID"));
    let position = schema.add_type(DataType::fixed_dict(
        "POSITION",
        FixedDict::new()
            .field("x", Primitive::Float)
            .field("y", Primitive::Float),
    ));
    schema.add_type(DataType::array(Arc::clone(&position)).named("PATH"));
    let entity_ids = schema.add_type(DataType::array(Arc::clone(&entity_id)).named("ENTITY_IDS"));
    schema.add_type(DataType::fixed_dict(
        "LOADOUT",
        FixedDict::new()
            .field("items", entity_ids)
            .field("spawn", Arc::clone(&position))
            .field("tags", DataType::array(Primitive::String)),
    ));
    schema.add_type(DataType::array(DataType::array(Primitive::UInt8)).named("GRID"));
    schema.add_type(DataType::fixed_dict(
        "_INTERNAL",
        FixedDict::new().field("flag", Primitive::UInt8),
    ));

    schema.add_entity(
        EntityModule::new("Avatar")
            .property(PropertyDescription::client("hp", Primitive::UInt16))
            .property(PropertyDescription::server("dbid", Primitive::UInt64))
            .property(PropertyDescription::client("pos", Arc::clone(&position)))
            .property(PropertyDescription::client(
                "friends",
                DataType::array(Arc::clone(&entity_id)),
            ))
            .method(MethodDescription::client(
                "say",
                vec![Primitive::String.into()],
            ))
            .method(MethodDescription::client(
                "moveTo",
                vec![position, Primitive::Float.into()],
            ))
            .method(MethodDescription::server("reqLogout", vec![])),
    );
    schema.add_entity(
        EntityModule::new("Account")
            .with_client(false)
            .property(PropertyDescription::server("name", Primitive::Unicode)),
    );

    schema.add_error(ServerError::new(0, "SUCCESS", "Success."));
    schema.add_error(ServerError::new(2, "SERVER_ERR_BUSY", "Busy."));
    schema.add_error(ServerError::new(1, "SERVER_ERR_NOT_READY", "Not \"ready\"."));
    schema.add_error(ServerError::new(2, "SERVER_ERR_BUSY", "Server is busy."));
    schema
}

/// Run `generator` into a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn generate_to_temp(generator: &Generator<'_>) -> Result<(tempfile::TempDir, GenerateResult)> {
    let temp_dir = tempfile::TempDir::new().map_err(|source| {
        CodegenError::write(
            std::env::temp_dir(),
            WriteError {
                stage: WriteStage::CreateDirectory,
                source,
            },
        )
    })?;
    let result = generator.run(temp_dir.path())?;
    Ok((temp_dir, result))
}
