use crate::execution::ResolveInfo;
use crate::types::FieldDefinition;
use crate::types::HasFields;
use crate::types::Thunk;
use crate::value::Value;
use indexmap::IndexMap;
use inherent::inherent;
use std::fmt;
use std::sync::Arc;

pub type IsTypeOfFn = Arc<dyn Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync>;

/// A concrete composite output type.
#[derive(Clone)]
pub struct ObjectType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) interfaces_thunk: Option<Thunk<Vec<String>>>,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) fields_thunk: Option<Thunk<Vec<FieldDefinition>>>,
    pub(crate) is_type_of: Option<IsTypeOfFn>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            interfaces: vec![],
            interfaces_thunk: None,
            fields: IndexMap::new(),
            fields_thunk: None,
            is_type_of: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_interface(mut self, interface_name: impl Into<String>) -> Self {
        self.interfaces.push(interface_name.into());
        self
    }

    /// Declares interfaces lazily; they are appended to any eagerly declared
    /// ones when the schema is built.
    pub fn with_interfaces_thunk(
        mut self,
        thunk: impl Fn() -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.interfaces_thunk = Some(Arc::new(thunk));
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Declares fields lazily; evaluated once when the schema is built.
    pub fn with_fields_thunk(
        mut self,
        thunk: impl Fn() -> Vec<FieldDefinition> + Send + Sync + 'static,
    ) -> Self {
        self.fields_thunk = Some(Arc::new(thunk));
        self
    }

    pub fn with_is_type_of(
        mut self,
        is_type_of: impl Fn(&Value, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_type_of = Some(Arc::new(is_type_of));
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn implements(&self, interface_name: &str) -> bool {
        self.interfaces.iter().any(|name| name == interface_name)
    }

    pub fn is_type_of_fn(&self) -> Option<&IsTypeOfFn> {
        self.is_type_of.as_ref()
    }

    /// Evaluates pending thunks into the eager lists. Later calls are no-ops.
    pub(crate) fn force_thunks(&mut self) {
        if let Some(thunk) = self.interfaces_thunk.take() {
            for interface_name in thunk() {
                if !self.implements(&interface_name) {
                    self.interfaces.push(interface_name);
                }
            }
        }
        if let Some(thunk) = self.fields_thunk.take() {
            for field in thunk() {
                self.fields.insert(field.name.clone(), field);
            }
        }
    }
}

#[inherent]
impl HasFields for ObjectType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition>;
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("interfaces", &self.interfaces)
            .field("fields", &self.fields)
            .field("has_is_type_of", &self.is_type_of.is_some())
            .finish_non_exhaustive()
    }
}
