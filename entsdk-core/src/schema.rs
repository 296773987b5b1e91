//! Entity modules and the schema provider seam.

use std::sync::Arc;

use crate::types::{DataType, Primitive};

/// A property declared on an entity module.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescription {
    pub name: String,
    pub data_type: Arc<DataType>,
    pub client_visible: bool,
}

impl PropertyDescription {
    pub fn new(name: impl Into<String>, data_type: impl Into<Arc<DataType>>, client_visible: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            client_visible,
        }
    }

    /// A property replicated to clients.
    pub fn client(name: impl Into<String>, data_type: impl Into<Arc<DataType>>) -> Self {
        Self::new(name, data_type, true)
    }

    /// A server-only property.
    pub fn server(name: impl Into<String>, data_type: impl Into<Arc<DataType>>) -> Self {
        Self::new(name, data_type, false)
    }
}

/// A remote-callable method declared on an entity module.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescription {
    pub name: String,
    pub args: Vec<Arc<DataType>>,
    pub client_visible: bool,
}

impl MethodDescription {
    pub fn new(name: impl Into<String>, args: Vec<Arc<DataType>>, client_visible: bool) -> Self {
        Self {
            name: name.into(),
            args,
            client_visible,
        }
    }

    /// A method invoked on the client by the server.
    pub fn client(name: impl Into<String>, args: Vec<Arc<DataType>>) -> Self {
        Self::new(name, args, true)
    }

    /// A base or cell method, never exposed in client stubs.
    pub fn server(name: impl Into<String>, args: Vec<Arc<DataType>>) -> Self {
        Self::new(name, args, false)
    }
}

/// An entity module: one generated file per module with a client part.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityModule {
    pub name: String,
    pub has_client: bool,
    pub properties: Vec<PropertyDescription>,
    pub methods: Vec<MethodDescription>,
}

impl EntityModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_client: true,
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn property(mut self, property: PropertyDescription) -> Self {
        self.properties.push(property);
        self
    }

    pub fn method(mut self, method: MethodDescription) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_client(mut self, has_client: bool) -> Self {
        self.has_client = has_client;
        self
    }

    /// Client-visible properties in declaration order.
    pub fn client_properties(&self) -> impl Iterator<Item = &PropertyDescription> {
        self.properties.iter().filter(|p| p.client_visible)
    }

    /// Client-visible methods in declaration order.
    pub fn client_methods(&self) -> impl Iterator<Item = &MethodDescription> {
        self.methods.iter().filter(|m| m.client_visible)
    }
}

/// An entry of the server error table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub id: u16,
    pub name: String,
    pub description: String,
}

impl ServerError {
    pub fn new(id: u16, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Read-only access to a loaded schema.
///
/// Implementations must yield data types in dependency order: every
/// composite's nested types precede it.
pub trait SchemaProvider {
    /// Registered data types in dependency order.
    fn data_types(&self) -> &[Arc<DataType>];

    /// Entity modules in declaration order.
    fn entity_modules(&self) -> &[EntityModule];

    /// Server error table, in declaration order.
    fn server_errors(&self) -> &[ServerError] {
        &[]
    }
}

/// In-memory schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: Vec<Arc<DataType>>,
    entities: Vec<EntityModule>,
    errors: Vec<ServerError>,
}

impl Schema {
    /// A schema with the builtin primitives registered under their
    /// canonical names.
    pub fn new() -> Self {
        let mut schema = Self::empty();
        for primitive in Primitive::ALL {
            schema.types.push(primitive.into());
        }
        schema
    }

    /// A schema with nothing registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a type after everything already registered.
    pub fn add_type(&mut self, ty: impl Into<Arc<DataType>>) -> Arc<DataType> {
        let ty = ty.into();
        self.types.push(Arc::clone(&ty));
        ty
    }

    /// Look up a registered type by alias.
    pub fn get_type(&self, alias: &str) -> Option<&Arc<DataType>> {
        self.types.iter().find(|ty| ty.alias() == alias)
    }

    pub fn add_entity(&mut self, module: EntityModule) {
        self.entities.push(module);
    }

    pub fn add_error(&mut self, error: ServerError) {
        self.errors.push(error);
    }
}

impl SchemaProvider for Schema {
    fn data_types(&self) -> &[Arc<DataType>] {
        &self.types
    }

    fn entity_modules(&self) -> &[EntityModule] {
        &self.entities
    }

    fn server_errors(&self) -> &[ServerError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FixedDict;

    #[test]
    fn test_new_registers_builtins() {
        let schema = Schema::new();
        assert_eq!(schema.data_types().len(), Primitive::ALL.len());
        assert_eq!(schema.get_type("UINT16").unwrap().name(), "UINT16");
        assert!(Schema::empty().data_types().is_empty());
    }

    #[test]
    fn test_add_type_keeps_order() {
        let mut schema = Schema::empty();
        let pos = schema.add_type(DataType::fixed_dict(
            "POSITION",
            FixedDict::new().field("x", Primitive::Float),
        ));
        schema.add_type(DataType::array(pos).named("PATH"));

        let aliases: Vec<_> = schema.data_types().iter().map(|t| t.alias()).collect();
        assert_eq!(aliases, vec!["POSITION", "PATH"]);
    }

    #[test]
    fn test_client_filters() {
        let module = EntityModule::new("Avatar")
            .property(PropertyDescription::client("hp", Primitive::UInt16))
            .property(PropertyDescription::server("dbid", Primitive::UInt64))
            .property(PropertyDescription::client("name", Primitive::Unicode))
            .method(MethodDescription::server("reqLogout", vec![]))
            .method(MethodDescription::client("say", vec![Primitive::String.into()]));

        let props: Vec<_> = module.client_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(props, vec!["hp", "name"]);

        let methods: Vec<_> = module.client_methods().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["say"]);
    }
}
