use crate::types::InputValueDefinition;
use crate::types::Thunk;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct InputObjectType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputValueDefinition>,
    pub(crate) fields_thunk: Option<Thunk<Vec<InputValueDefinition>>>,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            fields_thunk: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: InputValueDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn with_fields_thunk(
        mut self,
        thunk: impl Fn() -> Vec<InputValueDefinition> + Send + Sync + 'static,
    ) -> Self {
        self.fields_thunk = Some(Arc::new(thunk));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&InputValueDefinition> {
        self.fields.get(name)
    }

    pub(crate) fn force_thunks(&mut self) {
        if let Some(thunk) = self.fields_thunk.take() {
            for field in thunk() {
                self.fields.insert(field.name.clone(), field);
            }
        }
    }
}

impl fmt::Debug for InputObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputObjectType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
