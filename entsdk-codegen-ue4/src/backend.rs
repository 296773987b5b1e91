//! Unreal C++ rendering hooks.

use entsdk_codegen::{
    ArgumentList, Backend, Field, FieldKind, GeneratorConfig, Placeholder, TypeMapper,
    builder::{CodeBuilder, Indent},
};
use entsdk_core::{
    DataType, EntityModule, MethodDescription, Primitive, ServerError, escape_string_literal,
    to_pascal_case,
};

use crate::type_mapper::Ue4TypeMapper;

const HEADER: &str = "// Generated by entsdk. Do not edit.";

/// UE4 client backend: header-only C++ classes.
#[derive(Debug, Clone)]
pub struct Ue4Backend {
    mapper: Ue4TypeMapper,
    namespace: String,
}

impl Ue4Backend {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            mapper: Ue4TypeMapper::new(config.vector_encoding),
            namespace: cpp_namespace(&config.namespace),
        }
    }

    fn file_begin(&self, out: &mut CodeBuilder, includes: &[&str]) {
        out.push_line(HEADER)
            .push_line("#pragma once")
            .push_blank();
        for include in includes {
            out.push_line(&format!("#include \"{}\"", include));
        }
        out.push_blank()
            .push_line(&format!("namespace {}", self.namespace))
            .push_line("{");
    }

    fn file_end(&self, out: &mut CodeBuilder) {
        out.push_blank()
            .push_line(&format!("}} // namespace {}", self.namespace));
    }

    fn class_begin(&self, out: &mut CodeBuilder, header: &str) {
        out.push_blank()
            .push_line(header)
            .push_line("{")
            .push_line("public:")
            .push_indent();
    }

    fn class_end(&self, out: &mut CodeBuilder) {
        out.push_dedent().push_line("};");
    }
}

/// Dotted namespaces (`Game.Client`) become C++17 nested namespaces.
fn cpp_namespace(namespace: &str) -> String {
    namespace
        .split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("::")
}

impl Default for Ue4Backend {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

/// Zero initializer for numeric fields; everything else default-constructs.
fn initializer(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Primitive(primitive) => match primitive {
            Primitive::Int8
            | Primitive::Int16
            | Primitive::Int32
            | Primitive::Int64
            | Primitive::UInt8
            | Primitive::UInt16
            | Primitive::UInt32
            | Primitive::UInt64 => Some("0"),
            Primitive::Float => Some("0.f"),
            Primitive::Double => Some("0.0"),
            Primitive::String
            | Primitive::Unicode
            | Primitive::Blob
            | Primitive::Python
            | Primitive::PyDict
            | Primitive::PyTuple
            | Primitive::PyList
            | Primitive::Vector2
            | Primitive::Vector3
            | Primitive::Vector4
            | Primitive::EntityCall => None,
        },
        FieldKind::Array | FieldKind::FixedDict => None,
    }
}

fn field_line(field: &Field<'_>) -> String {
    match initializer(field.kind) {
        Some(init) => format!("{} {} = {};", field.ty.name, field.name, init),
        None => format!("{} {};", field.ty.name, field.name),
    }
}

impl Backend for Ue4Backend {
    fn name(&self) -> &'static str {
        crate::BACKEND_ID
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.mapper
    }

    fn indent(&self) -> Indent {
        Indent::CPP
    }

    fn types_file_name(&self) -> String {
        "EntityTypes.h".to_string()
    }

    fn module_file_name(&self, module: &EntityModule) -> String {
        format!("{}.h", module.name)
    }

    fn errors_file_name(&self) -> String {
        "ServerErrors.h".to_string()
    }

    fn types_begin(&self, out: &mut CodeBuilder) {
        self.file_begin(out, &["CoreMinimal.h"]);
    }

    fn types_end(&self, out: &mut CodeBuilder) {
        self.file_end(out);
    }

    fn fixed_dict_begin(&self, out: &mut CodeBuilder, ty: &DataType) {
        self.class_begin(out, &format!("class {}", ty.alias()));
    }

    fn fixed_dict_member(&self, out: &mut CodeBuilder, field: &Field<'_>) {
        out.push_line(&field_line(field));
    }

    fn fixed_dict_end(&self, out: &mut CodeBuilder, _ty: &DataType) {
        self.class_end(out);
    }

    fn array_begin(&self, out: &mut CodeBuilder, ty: &DataType, element: &Placeholder) {
        self.class_begin(out, &format!("class {}", ty.alias()));
        out.push_line(&format!("TArray<{}> values;", element));
    }

    fn array_end(&self, out: &mut CodeBuilder, _ty: &DataType) {
        self.class_end(out);
    }

    fn module_begin(&self, out: &mut CodeBuilder, module: &EntityModule) {
        self.file_begin(out, &["CoreMinimal.h", "Entity.h", "EntityTypes.h"]);
        self.class_begin(out, &format!("class {} : public Entity", module.name));
    }

    fn property(&self, out: &mut CodeBuilder, _module: &EntityModule, field: &Field<'_>) {
        if !out.as_str().ends_with("public:\n") {
            out.push_blank();
        }
        out.push_line(&field_line(field)).push_line(&format!(
            "virtual void on{}Changed({} oldValue) {{}}",
            to_pascal_case(field.name),
            self.mapper.qualify(&field.ty)
        ));
    }

    fn methods_begin(&self, out: &mut CodeBuilder, _module: &EntityModule) {
        if !out.as_str().ends_with("public:\n") {
            out.push_blank();
        }
    }

    fn method(
        &self,
        out: &mut CodeBuilder,
        _module: &EntityModule,
        method: &MethodDescription,
        args: &ArgumentList,
    ) {
        out.push_line(&format!("virtual void {}({}) = 0;", method.name, args));
    }

    fn module_end(&self, out: &mut CodeBuilder, _module: &EntityModule) {
        self.class_end(out);
        self.file_end(out);
    }

    fn server_errors(&self, out: &mut CodeBuilder, errors: &[ServerError]) {
        self.file_begin(out, &["CoreMinimal.h"]);

        out.push_blank()
            .push_line("enum class EServerError : uint16")
            .push_line("{")
            .push_indent();
        for error in errors {
            out.push_line(&format!("{} = {},", error.name, error.id));
        }
        out.push_dedent().push_line("};");

        out.push_blank()
            .push_line("inline const TCHAR* ServerErrorDescription(EServerError Error)")
            .push_line("{")
            .push_indent()
            .push_line("switch (Error)")
            .push_line("{");
        for error in errors {
            out.push_line(&format!(
                "case EServerError::{}: return TEXT(\"{}\");",
                error.name,
                escape_string_literal(&error.description)
            ));
        }
        out.push_line("default: return TEXT(\"\");")
            .push_line("}")
            .push_dedent()
            .push_line("}");

        self.file_end(out);
    }
}
