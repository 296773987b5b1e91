//! C# rendering hooks.

use entsdk_codegen::{
    ArgumentList, Backend, Field, FieldKind, GeneratorConfig, Placeholder, TypeMapper,
    builder::{CodeBuilder, Indent},
};
use entsdk_core::{
    DataType, EntityModule, MethodDescription, Primitive, ServerError, escape_string_literal,
    to_pascal_case,
};

use crate::type_mapper::UnityTypeMapper;

const HEADER: &str = "// Generated by entsdk. Do not edit.";
const TYPES_USINGS: &[&str] = &["System", "System.Collections.Generic", "UnityEngine"];
const ERRORS_USINGS: &[&str] = &["System", "System.Collections.Generic"];

/// Unity client backend: one C# class per declared type and entity module.
#[derive(Debug, Clone)]
pub struct UnityBackend {
    mapper: UnityTypeMapper,
    namespace: String,
}

impl UnityBackend {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            mapper: UnityTypeMapper::new(config.vector_encoding),
            namespace: config.namespace.clone(),
        }
    }

    fn file_begin(&self, out: &mut CodeBuilder, usings: &[&str]) {
        out.push_line(HEADER);
        for using in usings {
            out.push_line(&format!("using {};", using));
        }
        out.push_blank()
            .push_line(&format!("namespace {}", self.namespace))
            .push_line("{")
            .push_indent();
    }

    fn file_end(&self, out: &mut CodeBuilder) {
        out.push_dedent().push_line("}");
    }
}

impl Default for UnityBackend {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

/// Blank line between members, except right after an opening brace.
fn separate(out: &mut CodeBuilder) {
    if !out.as_str().ends_with("{\n") {
        out.push_blank();
    }
}

fn initializer(field: &Field<'_>) -> String {
    match field.kind {
        FieldKind::Primitive(primitive) => match primitive {
            Primitive::Int8
            | Primitive::Int16
            | Primitive::Int32
            | Primitive::Int64
            | Primitive::UInt8
            | Primitive::UInt16
            | Primitive::UInt32
            | Primitive::UInt64 => "0".to_string(),
            Primitive::Float => "0f".to_string(),
            Primitive::Double => "0.0".to_string(),
            Primitive::String | Primitive::Unicode => "\"\"".to_string(),
            Primitive::Blob
            | Primitive::Python
            | Primitive::PyDict
            | Primitive::PyTuple
            | Primitive::PyList => "new byte[0]".to_string(),
            Primitive::Vector2 | Primitive::Vector3 | Primitive::Vector4 => {
                format!("default({})", field.ty.name)
            }
            Primitive::EntityCall => "null".to_string(),
        },
        FieldKind::Array | FieldKind::FixedDict => format!("new {}()", field.ty.name),
    }
}

fn field_line(field: &Field<'_>) -> String {
    format!(
        "public {} {} = {};",
        field.ty.name,
        field.name,
        initializer(field)
    )
}

impl Backend for UnityBackend {
    fn name(&self) -> &'static str {
        crate::BACKEND_ID
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &self.mapper
    }

    fn indent(&self) -> Indent {
        Indent::CSHARP
    }

    fn types_file_name(&self) -> String {
        "EntityTypes.cs".to_string()
    }

    fn module_file_name(&self, module: &EntityModule) -> String {
        format!("{}.cs", module.name)
    }

    fn errors_file_name(&self) -> String {
        "ServerErrors.cs".to_string()
    }

    fn types_begin(&self, out: &mut CodeBuilder) {
        self.file_begin(out, TYPES_USINGS);
    }

    fn types_end(&self, out: &mut CodeBuilder) {
        self.file_end(out);
    }

    fn fixed_dict_begin(&self, out: &mut CodeBuilder, ty: &DataType) {
        separate(out);
        out.push_line(&format!("public class {}", ty.alias()))
            .push_line("{")
            .push_indent();
    }

    fn fixed_dict_member(&self, out: &mut CodeBuilder, field: &Field<'_>) {
        out.push_line(&field_line(field));
    }

    fn fixed_dict_end(&self, out: &mut CodeBuilder, _ty: &DataType) {
        out.push_dedent().push_line("}");
    }

    fn array_begin(&self, out: &mut CodeBuilder, ty: &DataType, element: &Placeholder) {
        separate(out);
        out.push_line(&format!("public class {} : List<{}>", ty.alias(), element))
            .push_line("{");
    }

    fn array_end(&self, out: &mut CodeBuilder, _ty: &DataType) {
        out.push_line("}");
    }

    fn module_begin(&self, out: &mut CodeBuilder, module: &EntityModule) {
        self.file_begin(out, TYPES_USINGS);
        out.push_line(&format!("public abstract class {} : Entity", module.name))
            .push_line("{")
            .push_indent();
    }

    fn property(&self, out: &mut CodeBuilder, _module: &EntityModule, field: &Field<'_>) {
        separate(out);
        out.push_line(&field_line(field)).push_line(&format!(
            "public virtual void on{}Changed({} oldValue) {{}}",
            to_pascal_case(field.name),
            field.ty.name
        ));
    }

    fn methods_begin(&self, out: &mut CodeBuilder, _module: &EntityModule) {
        separate(out);
    }

    fn method(
        &self,
        out: &mut CodeBuilder,
        _module: &EntityModule,
        method: &MethodDescription,
        args: &ArgumentList,
    ) {
        out.push_line(&format!("public abstract void {}({});", method.name, args));
    }

    fn module_end(&self, out: &mut CodeBuilder, _module: &EntityModule) {
        out.push_dedent().push_line("}");
        self.file_end(out);
    }

    fn server_errors(&self, out: &mut CodeBuilder, errors: &[ServerError]) {
        self.file_begin(out, ERRORS_USINGS);
        out.push_line("public static class ServerErrors")
            .push_line("{")
            .push_indent();

        for error in errors {
            out.push_line(&format!("public const UInt16 {} = {};", error.name, error.id));
        }

        out.push_blank()
            .push_line("public static readonly Dictionary<UInt16, string> Descriptions = new Dictionary<UInt16, string>")
            .push_line("{")
            .push_indent();
        for error in errors {
            out.push_line(&format!(
                "{{ {}, \"{}\" }},",
                error.name,
                escape_string_literal(&error.description)
            ));
        }
        out.push_dedent().push_line("};");

        out.push_dedent().push_line("}");
        self.file_end(out);
    }
}
