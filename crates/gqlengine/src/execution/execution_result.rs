use crate::error::GraphQLError;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// The response to one operation: `{ data, errors, extensions }`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub data: JsonValue,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,

    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extensions: serde_json::Map<String, JsonValue>,
}

impl ExecutionResult {
    /// A result with `null` data.
    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self {
            data: JsonValue::Null,
            errors,
            extensions: serde_json::Map::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}
