//! Loading entity definition files into a schema.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use entsdk_core::{
    DataType, EntityModule, MethodDescription, PropertyDescription, Schema, SchemaProvider,
    ServerError,
};
use indexmap::IndexMap;

use crate::{
    Error, Result,
    decl::{DefsFile, EntityDecl, SdkConfig},
    error::SourceContext,
    resolve::TypeResolver,
};

/// File name used when none is given.
pub const DEFAULT_FILENAME: &str = "entities.toml";

/// A loaded entity definitions file.
#[derive(Debug, Clone)]
pub struct EntityDefs {
    path: Option<PathBuf>,
    sdk: SdkConfig,
    schema: Schema,
}

impl EntityDefs {
    /// Open and load a definitions file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let mut defs = Self::from_str_with_filename(&content, &filename)?;
        defs.path = Some(path);
        Ok(defs)
    }

    /// Load definitions from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let file: DefsFile = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

        let mut resolver = TypeResolver::new(&file.types, &ctx)?;
        resolver.resolve_all()?;

        let mut modules = Vec::with_capacity(file.entities.len());
        for (name, decl) in &file.entities {
            modules.push(load_entity(&mut resolver, name, decl)?);
        }

        let mut schema = Schema::new();
        for ty in resolver.into_types() {
            schema.add_type(ty);
        }
        for module in modules {
            schema.add_entity(module);
        }
        for (name, error) in &file.errors {
            schema.add_error(ServerError::new(error.id, name, error.descr.as_str()));
        }

        tracing::debug!(
            "loaded {}: {} types, {} entity modules, {} server errors",
            filename,
            schema.data_types().len(),
            schema.entity_modules().len(),
            schema.server_errors().len()
        );

        Ok(Self {
            path: None,
            sdk: file.sdk,
            schema,
        })
    }

    /// Path the definitions were loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Generation defaults from the `[sdk]` section.
    pub fn sdk(&self) -> &SdkConfig {
        &self.sdk
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

fn load_entity(resolver: &mut TypeResolver<'_>, name: &str, decl: &EntityDecl) -> Result<EntityModule> {
    let mut module = EntityModule::new(name).with_client(decl.has_client);

    for (property, prop) in &decl.properties {
        let site = format!("{}.{}", name, property);
        let ty = resolver.parse_and_resolve(&prop.ty, &site)?;
        module = module.property(PropertyDescription::new(
            property.as_str(),
            ty,
            prop.flags.is_client_visible(),
        ));
    }

    let groups = [
        (&decl.client_methods, true),
        (&decl.base_methods, false),
        (&decl.cell_methods, false),
    ];
    for (methods, client_visible) in groups {
        for method in load_methods(resolver, name, methods, client_visible)? {
            module = module.method(method);
        }
    }

    Ok(module)
}

fn load_methods(
    resolver: &mut TypeResolver<'_>,
    entity: &str,
    methods: &IndexMap<String, Vec<String>>,
    client_visible: bool,
) -> Result<Vec<MethodDescription>> {
    let mut loaded = Vec::with_capacity(methods.len());
    for (method, args) in methods {
        let args = args
            .iter()
            .enumerate()
            .map(|(i, arg)| {
                let site = format!("{}.{}({})", entity, method, i + 1);
                resolver.parse_and_resolve(arg, &site)
            })
            .collect::<Result<Vec<Arc<DataType>>>>()?;
        loaded.push(MethodDescription::new(method.as_str(), args, client_visible));
    }
    Ok(loaded)
}

impl FromStr for EntityDefs {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl SchemaProvider for EntityDefs {
    fn data_types(&self) -> &[Arc<DataType>] {
        self.schema.data_types()
    }

    fn entity_modules(&self) -> &[EntityModule] {
        self.schema.entity_modules()
    }

    fn server_errors(&self) -> &[ServerError] {
        self.schema.server_errors()
    }
}
