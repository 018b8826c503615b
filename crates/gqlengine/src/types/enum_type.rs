use gqlengine_parser::ast;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// One value of an [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub(crate) name: String,
    pub(crate) value: JsonValue,
    pub(crate) description: Option<String>,
    pub(crate) deprecation_reason: Option<String>,
}

impl EnumValueDefinition {
    /// A value whose internal representation is its own name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: JsonValue::String(name.clone()),
            name,
            description: None,
            deprecation_reason: None,
        }
    }

    /// Sets the internal value resolvers produce and receive for this name.
    pub fn with_value(mut self, value: impl Into<JsonValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

/// A leaf type with a closed set of named values.
///
/// Externally an enum value is always its name; internally it is whatever
/// [`EnumValueDefinition::with_value`] set.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) values: IndexMap<String, EnumValueDefinition>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value(mut self, value: EnumValueDefinition) -> Self {
        self.values.insert(value.name.clone(), value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn values(&self) -> &IndexMap<String, EnumValueDefinition> {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&EnumValueDefinition> {
        self.values.get(name)
    }

    /// Maps an internal value to its name.
    pub fn serialize(&self, value: &JsonValue) -> Option<JsonValue> {
        self.values.values()
            .find(|def| &def.value == value)
            .map(|def| JsonValue::String(def.name.clone()))
    }

    /// Maps a name, given as a JSON string, to its internal value.
    pub fn parse_value(&self, value: &JsonValue) -> Option<JsonValue> {
        let name = value.as_str()?;
        self.values.get(name).map(|def| def.value.clone())
    }

    /// Maps an enum literal to its internal value. Any other literal kind
    /// (including strings and numbers) is rejected.
    pub fn parse_literal(&self, literal: &ast::Value) -> Option<JsonValue> {
        match literal {
            ast::Value::Enum(enum_value) => {
                self.values.get(&enum_value.value).map(|def| def.value.clone())
            },
            _ => None,
        }
    }
}
