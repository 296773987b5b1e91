//! Schema traversal and per-kind dispatch.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
};

use entsdk_core::{
    DataKind, DataType, EntityModule, FixedDict, MethodDescription, SchemaProvider, ServerError,
};

use crate::{
    backend::{ArgumentList, Backend, Field, FieldKind},
    emitter::{Emitter, PreviewFile},
    error::{CodegenError, Result},
    resolve::Resolver,
};

/// Types whose alias starts with this marker are internal and never declared.
pub const RESERVED_MARKER: char = '_';

/// Result of a generation run
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, in generation order
    pub written: Vec<PathBuf>,
}

/// Drives one backend over one schema.
pub struct Generator<'a> {
    schema: &'a dyn SchemaProvider,
    backend: Box<dyn Backend>,
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a dyn SchemaProvider, backend: Box<dyn Backend>) -> Self {
        Self { schema, backend }
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    /// Generate every file into `output_dir`.
    ///
    /// Files are written one at a time as they are produced. The first
    /// failure aborts the run; files finished before it stay on disk.
    pub fn run(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        let outcome = self.each_file(|emitter| {
            result.written.push(emitter.flush(output_dir)?);
            Ok(())
        });

        match outcome {
            Ok(()) => {
                tracing::info!(
                    "{} backend wrote {} files to {}",
                    self.backend.name(),
                    result.written.len(),
                    output_dir.display()
                );
                Ok(result)
            }
            Err(err) => {
                tracing::error!("{} generation failed: {}", self.backend.name(), err);
                Err(err)
            }
        }
    }

    /// Render every file without touching the filesystem.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let mut files = Vec::new();
        self.each_file(|emitter| {
            files.push(emitter.finish()?);
            Ok(())
        })?;
        Ok(files)
    }

    /// Produce every file in layout order.
    ///
    /// File names are compared case-insensitively; a repeated name fails
    /// before the second file reaches `sink`.
    fn each_file<F>(&self, mut sink: F) -> Result<()>
    where
        F: FnMut(Emitter) -> Result<()>,
    {
        let mut seen = HashSet::new();
        let mut emit = |emitter: Emitter| -> Result<()> {
            if !seen.insert(emitter.file_name().to_lowercase()) {
                return Err(CodegenError::DuplicateOutput {
                    file: emitter.file_name().to_string(),
                });
            }
            sink(emitter)
        };

        if let Some(errors) = self.write_errors_file() {
            emit(errors)?;
        }
        emit(self.write_types_file()?)?;
        for module in self.schema.entity_modules() {
            if !module.has_client {
                tracing::debug!("skipping {}: no client part", module.name);
                continue;
            }
            emit(self.write_module_file(module)?)?;
        }
        Ok(())
    }

    /// Render the type-declaration file.
    pub fn write_types_file(&self) -> Result<Emitter> {
        let types = self.schema.data_types();
        if types.is_empty() {
            return Err(CodegenError::SchemaUnavailable);
        }

        let backend = self.backend.as_ref();
        let mut emitter = Emitter::new(backend.types_file_name(), backend.indent());
        emitter.emit(|out| backend.types_begin(out));

        for ty in types {
            if ty.alias().starts_with(RESERVED_MARKER) {
                tracing::trace!("skipping reserved type {}", ty.alias());
                continue;
            }
            if !ty.is_declared() {
                continue;
            }
            match ty.kind() {
                DataKind::Primitive(_) => {}
                DataKind::Array(element) => self.write_array(&mut emitter, ty, element)?,
                DataKind::FixedDict(dict) => self.write_fixed_dict(&mut emitter, ty, dict)?,
            }
        }

        emitter.emit(|out| backend.types_end(out));
        Ok(emitter)
    }

    fn write_fixed_dict(&self, emitter: &mut Emitter, ty: &DataType, dict: &FixedDict) -> Result<()> {
        let backend = self.backend.as_ref();
        emitter.emit(|out| backend.fixed_dict_begin(out, ty));
        for (name, member) in dict.fields() {
            let site = format!("{}.{}", ty.alias(), name);
            let field = self.field(name, member, &site)?;
            emitter.emit(|out| backend.fixed_dict_member(out, &field));
        }
        emitter.emit(|out| backend.fixed_dict_end(out, ty));
        Ok(())
    }

    fn write_array(&self, emitter: &mut Emitter, ty: &DataType, element: &DataType) -> Result<()> {
        let backend = self.backend.as_ref();
        let slot = emitter.placeholder();
        emitter.emit(|out| backend.array_begin(out, ty, &slot));

        let site = format!("{}[]", ty.alias());
        let element = self.resolver().element_name(element, &site)?;
        emitter.substitute(slot, &element)?;

        emitter.emit(|out| backend.array_end(out, ty));
        Ok(())
    }

    /// Render the file for one entity module.
    pub fn write_module_file(&self, module: &EntityModule) -> Result<Emitter> {
        let backend = self.backend.as_ref();
        let mut emitter = Emitter::new(backend.module_file_name(module), backend.indent());
        tracing::debug!("rendering module {}", module.name);

        emitter.emit(|out| backend.module_begin(out, module));

        for property in module.client_properties() {
            let site = format!("{}.{}", module.name, property.name);
            let field = self.field(&property.name, &property.data_type, &site)?;
            emitter.emit(|out| backend.property(out, module, &field));
        }

        let mut methods = module.client_methods().peekable();
        if methods.peek().is_some() {
            emitter.emit(|out| backend.methods_begin(out, module));
        }
        for method in methods {
            let args = self.argument_list(module, method)?;
            emitter.emit(|out| backend.method(out, module, method, &args));
        }

        emitter.emit(|out| backend.module_end(out, module));
        Ok(emitter)
    }

    /// Render the server error table, if the schema declares one.
    ///
    /// Entries are ordered by id; for a repeated id the last declaration wins.
    pub fn write_errors_file(&self) -> Option<Emitter> {
        let declared = self.schema.server_errors();
        if declared.is_empty() {
            return None;
        }

        let by_id: BTreeMap<u16, &ServerError> = declared.iter().map(|e| (e.id, e)).collect();
        let errors: Vec<ServerError> = by_id.into_values().cloned().collect();

        let backend = self.backend.as_ref();
        let mut emitter = Emitter::new(backend.errors_file_name(), backend.indent());
        emitter.emit(|out| backend.server_errors(out, &errors));
        Some(emitter)
    }

    fn field<'n>(&self, name: &'n str, ty: &DataType, site: &str) -> Result<Field<'n>> {
        let kind = match ty.kind() {
            DataKind::Primitive(primitive) => FieldKind::Primitive(*primitive),
            DataKind::Array(_) => FieldKind::Array,
            DataKind::FixedDict(_) => FieldKind::FixedDict,
        };
        Ok(Field {
            name,
            ty: self.resolver().resolve(ty, site)?,
            kind,
        })
    }

    /// Two-phase argument build: resolve every argument, then format.
    fn argument_list(&self, module: &EntityModule, method: &MethodDescription) -> Result<ArgumentList> {
        let resolver = self.resolver();
        let resolved = method
            .args
            .iter()
            .enumerate()
            .map(|(i, arg)| {
                let site = format!("{}.{}({})", module.name, method.name, i + 1);
                resolver.resolve(arg, &site)
            })
            .collect::<Result<Vec<_>>>()?;

        let mapper = self.backend.type_mapper();
        let params = resolved
            .iter()
            .enumerate()
            .map(|(i, ty)| format!("{} param{}", mapper.qualify(ty), i + 1))
            .collect();
        Ok(ArgumentList::new(params))
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.backend.name(), self.backend.type_mapper())
    }
}
