use crate::execution::ResolveInfo;
use crate::types::FieldDefinition;
use crate::types::HasFields;
use crate::types::ResolveTypeFn;
use crate::types::Thunk;
use crate::value::Value;
use indexmap::IndexMap;
use inherent::inherent;
use std::fmt;
use std::sync::Arc;

/// An abstract output type whose possible types are the objects that list
/// it among their interfaces.
#[derive(Clone)]
pub struct InterfaceType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, FieldDefinition>,
    pub(crate) fields_thunk: Option<Thunk<Vec<FieldDefinition>>>,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            fields_thunk: None,
            resolve_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn with_fields_thunk(
        mut self,
        thunk: impl Fn() -> Vec<FieldDefinition> + Send + Sync + 'static,
    ) -> Self {
        self.fields_thunk = Some(Arc::new(thunk));
        self
    }

    /// Picks the concrete object type (by name) for a resolved value. Takes
    /// precedence over the possible types' `is_type_of` callbacks.
    pub fn with_resolve_type(
        mut self,
        resolve_type: impl Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn resolve_type_fn(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }

    pub(crate) fn force_thunks(&mut self) {
        if let Some(thunk) = self.fields_thunk.take() {
            for field in thunk() {
                self.fields.insert(field.name.clone(), field);
            }
        }
    }
}

#[inherent]
impl HasFields for InterfaceType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition>;
}

impl fmt::Debug for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("has_resolve_type", &self.resolve_type.is_some())
            .finish_non_exhaustive()
    }
}
