use gqlengine_parser::ParseOptions;
use gqlengine_parser::ast;

/// Parses a single value literal, panicking on a syntax error.
pub(super) fn literal(source: &str) -> ast::Value {
    gqlengine_parser::parse_value(source, ParseOptions::default())
        .unwrap_or_else(|err| panic!("invalid literal `{source}`: {err}"))
}
