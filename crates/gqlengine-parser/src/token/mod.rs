//! Lexical tokens produced by a [`token_source`](crate::token_source).

mod graphql_token;
mod graphql_token_kind;
mod string_value_parsing;

pub use graphql_token::GraphQLToken;
pub use graphql_token_kind::GraphQLTokenKind;
pub use string_value_parsing::StringValueParsingError;
pub use string_value_parsing::parse_block_string;
pub use string_value_parsing::parse_single_line_string;
