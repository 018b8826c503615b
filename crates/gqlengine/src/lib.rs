//! A server-side GraphQL engine: build a [`Schema`] from Rust types or SDL,
//! then validate and execute requests against it.
//!
//! ```
//! use gqlengine::Params;
//! use gqlengine::SchemaBuilder;
//! use gqlengine::Value;
//! use std::sync::Arc;
//!
//! let schema = SchemaBuilder::new()
//!     .load_str("type Query { hello: String }")
//!     .and_then(|builder| {
//!         builder
//!             .resolver("Query", "hello", |_| Ok(Value::from("world")))
//!             .build()
//!     })
//!     .expect("valid schema");
//!
//! let result = gqlengine::graphql(Params::new(Arc::new(schema), "{ hello }"));
//! assert_eq!(result.data, serde_json::json!({"hello": "world"}));
//! ```

pub mod coercion;
mod context;
pub mod cost;
mod error;
pub mod execution;
pub mod extensions;
mod graphql;
mod introspection;
pub mod schema;
mod subscription;
pub mod types;
pub mod validation;
mod value;

pub use context::RequestContext;
pub use error::ErrorLocation;
pub use error::FieldError;
pub use error::FieldResult;
pub use error::GraphQLError;
pub use error::PathSegment;
pub use execution::ExecuteParams;
pub use execution::ExecutionResult;
pub use execution::ExecutionStrategy;
pub use execution::ResolveInfo;
pub use execution::ResolveParams;
pub use execution::execute;
pub use extensions::Extension;
pub use graphql::Params;
pub use graphql::REQUEST_SOURCE_NAME;
pub use graphql::graphql;
pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use subscription::subscribe;
pub use validation::validate;
pub use value::Arguments;
pub use value::LazyFn;
pub use value::Record;
pub use value::Value;

pub use gqlengine_parser as parser;

#[cfg(test)]
mod tests;
