//! Input coercion: turning variable JSON and argument literals into the
//! internal values resolvers see.
//!
//! Every function here works against a plain type map so the schema
//! builder can coerce defaults before a [`Schema`](crate::schema::Schema)
//! exists.

mod arguments;
mod input_value;
mod literal;
mod variables;

pub use arguments::coerce_argument_values;
pub use input_value::coerce_input_value;
pub use input_value::is_valid_input_value;
pub use literal::is_valid_literal_value;
pub use literal::literal_to_json;
pub use literal::value_from_ast;
pub use variables::coerce_variable_values;

use crate::types::NamedType;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// Named types by name.
pub type TypeMap = IndexMap<String, NamedType>;

/// Coerced variable values by variable name (without the `$`).
pub type Variables = IndexMap<String, JsonValue>;

#[cfg(test)]
mod tests;
