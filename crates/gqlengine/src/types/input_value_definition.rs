use crate::types::TypeRef;
use serde_json::Value as JsonValue;

/// An argument of a field or directive, or a field of an input object.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) value_type: TypeRef,
    pub(crate) default_value: Option<JsonValue>,
}

impl InputValueDefinition {
    pub fn new(name: impl Into<String>, value_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            value_type,
            default_value: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default, given in its external (variable) form. The schema
    /// builder coerces it against `value_type` and rejects it if invalid.
    pub fn with_default_value(mut self, default_value: impl Into<JsonValue>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn value_type(&self) -> &TypeRef {
        &self.value_type
    }

    pub fn default_value(&self) -> Option<&JsonValue> {
        self.default_value.as_ref()
    }
}
