use crate::coercion::literal_to_json;
use gqlengine_parser::ast;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// Turns a resolved value into its JSON output form; `None` completes the
/// field as `null`.
pub type SerializeFn = Arc<dyn Fn(&JsonValue) -> Option<JsonValue> + Send + Sync>;

/// Coerces a JSON variable value; `None` means the value is invalid.
pub type ParseValueFn = Arc<dyn Fn(&JsonValue) -> Option<JsonValue> + Send + Sync>;

/// Coerces a variable-free literal; `None` means the literal is invalid.
pub type ParseLiteralFn = Arc<dyn Fn(&ast::Value) -> Option<JsonValue> + Send + Sync>;

/// A leaf type with user-defined (or built-in) coercion functions.
///
/// A freshly constructed scalar passes JSON through unchanged in both
/// directions and accepts any variable-free literal.
#[derive(Clone)]
pub struct ScalarType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) serialize: SerializeFn,
    pub(crate) parse_value: ParseValueFn,
    pub(crate) parse_literal: ParseLiteralFn,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            serialize: Arc::new(|value| Some(value.clone())),
            parse_value: Arc::new(|value| Some(value.clone())),
            parse_literal: Arc::new(literal_to_json),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_serialize(
        mut self,
        serialize: impl Fn(&JsonValue) -> Option<JsonValue> + Send + Sync + 'static,
    ) -> Self {
        self.serialize = Arc::new(serialize);
        self
    }

    pub fn with_parse_value(
        mut self,
        parse_value: impl Fn(&JsonValue) -> Option<JsonValue> + Send + Sync + 'static,
    ) -> Self {
        self.parse_value = Arc::new(parse_value);
        self
    }

    pub fn with_parse_literal(
        mut self,
        parse_literal: impl Fn(&ast::Value) -> Option<JsonValue> + Send + Sync + 'static,
    ) -> Self {
        self.parse_literal = Arc::new(parse_literal);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn serialize(&self, value: &JsonValue) -> Option<JsonValue> {
        (self.serialize)(value)
    }

    pub fn parse_value(&self, value: &JsonValue) -> Option<JsonValue> {
        (self.parse_value)(value)
    }

    pub fn parse_literal(&self, value: &ast::Value) -> Option<JsonValue> {
        (self.parse_literal)(value)
    }
}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
