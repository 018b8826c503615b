//! A GraphQL lexer and recursive descent parser that produces an owned,
//! location-annotated AST for executable documents (operations and
//! fragments) as well as type-system documents (SDL).
//!
//! ```
//! use gqlengine_parser::ast::Definition;
//! use gqlengine_parser::ParseOptions;
//!
//! let doc = gqlengine_parser::parse("{ hero { name } }", ParseOptions::default())
//!     .expect("valid document");
//! assert!(matches!(doc.definitions[0], Definition::Operation(_)));
//! ```

pub mod ast;
mod graphql_parser;
mod graphql_token_stream;
mod location;
mod parse_options;
mod source;
mod syntax_error;
pub mod token;
pub mod token_source;

pub use graphql_parser::GraphQLParser;
pub use graphql_token_stream::GraphQLTokenStream;
pub use location::Location;
pub use parse_options::ParseOptions;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source::Source;
pub use source::SourcePosition;
pub use syntax_error::SyntaxError;
pub use syntax_error::SyntaxErrorKind;
pub use syntax_error::SyntaxErrorNotes;

use std::sync::Arc;

/// Parses a full GraphQL document.
///
/// Fails on the first syntax error; no partial document is ever returned.
pub fn parse(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<ast::Document, SyntaxError> {
    parse_source(Arc::new(source.into()), options)
}

/// Like [`parse`], but reuses an already-shared [`Source`] so that every
/// [`Location`] in the resulting AST points at the same allocation.
pub fn parse_source(
    source: Arc<Source>,
    options: ParseOptions,
) -> Result<ast::Document, SyntaxError> {
    GraphQLParser::new(&source, options).parse_document()
}

/// Parses a single GraphQL value literal (e.g. `[1, 2, {a: $b}]`).
pub fn parse_value(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<ast::Value, SyntaxError> {
    let source = Arc::new(source.into());
    GraphQLParser::new(&source, options).parse_value_document()
}

/// Parses a single GraphQL type reference (e.g. `[String!]!`).
pub fn parse_type(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<ast::Type, SyntaxError> {
    let source = Arc::new(source.into());
    GraphQLParser::new(&source, options).parse_type_document()
}

#[cfg(test)]
mod tests;
