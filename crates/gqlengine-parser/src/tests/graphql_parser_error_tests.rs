//! Tests for syntax error messages and positions.

use crate::ParseOptions;
use crate::Source;
use crate::SyntaxErrorKind;
use crate::tests::utils::parse_err;

fn message(body: &str) -> String {
    parse_err(body).to_string()
}

#[test]
fn missing_name_at_eof() {
    let err = parse_err("{");
    assert_eq!(err.to_string(), "Syntax Error GraphQL (1:2) Expected Name, found EOF");
    assert_eq!((err.line, err.column, err.offset), (1, 2, 1));
}

#[test]
fn detailed_format_points_at_column() {
    let detailed = parse_err("{").format_detailed();
    assert_eq!(
        detailed,
        "Syntax Error GraphQL (1:2) Expected Name, found EOF\n\n1: {\n    ^\n",
    );
}

#[test]
fn expected_keyword_on() {
    assert_eq!(
        message("{ ...MissingOn }\nfragment MissingOn Type\n"),
        "Syntax Error GraphQL (2:20) Expected \"on\", found Name \"Type\"",
    );
}

#[test]
fn expected_name_found_punctuator() {
    assert_eq!(
        message("{ field: {} }"),
        "Syntax Error GraphQL (1:10) Expected Name, found {",
    );
}

#[test]
fn unknown_definition_keyword() {
    assert_eq!(
        message("notanoperation Foo { field }"),
        "Syntax Error GraphQL (1:1) Unexpected Name \"notanoperation\"",
    );
}

#[test]
fn lone_spread() {
    assert_eq!(message("..."), "Syntax Error GraphQL (1:1) Unexpected ...");
}

#[test]
fn uses_source_name() {
    let err = crate::parse(Source::with_name("query", "MyQuery.graphql"), ParseOptions::default())
        .expect_err("incomplete query");
    assert_eq!(
        err.to_string(),
        "Syntax Error MyQuery.graphql (1:6) Expected {, found EOF",
    );
}

#[test]
fn variables_not_allowed_in_constant_defaults() {
    assert_eq!(
        message("query Foo($x: Complex = { a: { b: [ $var ] } }) { field }"),
        "Syntax Error GraphQL (1:37) Unexpected $",
    );
}

#[test]
fn duplicate_object_field_reported_at_second_field() {
    let err = parse_err("{ field(arg: { a: 1, a: 2 }) }");
    assert_eq!(err.to_string(), "Syntax Error GraphQL (1:22) Duplicate input object field a.");
    assert_eq!(err.kind, SyntaxErrorKind::DuplicateObjectField { name: "a".to_string() });
}

#[test]
fn fragment_named_on_is_rejected() {
    let err = parse_err("fragment on on on { on }");
    assert_eq!(err.to_string(), "Syntax Error GraphQL (1:10) Unexpected Name \"on\"");
    assert_eq!(err.kind, SyntaxErrorKind::ReservedName { name: "on".to_string() });
}

#[test]
fn spread_of_on_needs_type() {
    assert_eq!(
        message("{ ...on }"),
        "Syntax Error GraphQL (1:9) Expected Name, found }",
    );
}

#[test]
fn empty_document_is_an_error() {
    let err = parse_err("   # only a comment\n");
    assert_eq!(err.message, "Unexpected EOF");
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEof);
}

#[test]
fn empty_selection_set_is_an_error() {
    assert_eq!(message("{ }"), "Syntax Error GraphQL (1:3) Expected Name, found }");
}

#[test]
fn lexer_errors_surface_with_help() {
    let err = parse_err("{ a(b: ..) }");
    assert_eq!(err.kind, SyntaxErrorKind::LexerError);
    assert_eq!((err.line, err.column), (1, 8));
    assert_eq!(err.notes.len(), 1);
    assert!(err.format_detailed().contains("= help: Add one more `.`"));
}

#[test]
fn enum_values_cannot_be_keywords() {
    let err = parse_err("enum E { A true }");
    assert_eq!(err.message, "Unexpected Name \"true\"");
    assert_eq!(err.kind, SyntaxErrorKind::ReservedName { name: "true".to_string() });
}

#[test]
fn unknown_directive_location() {
    assert_eq!(
        parse_err("directive @d on FIELD | NOWHERE").message,
        "Unexpected Name \"NOWHERE\"",
    );
}

#[test]
fn columns_count_characters() {
    let err = parse_err("{ \"é\" }");
    assert_eq!((err.line, err.column), (1, 3));
    let err = parse_err("{ a }\r\n{ é }");
    assert_eq!(err.line, 2);
}

#[test]
fn excessive_nesting_is_rejected() {
    let depth = 200;
    let body = format!("{{ f(a: {}1{}) }}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(parse_err(&body).kind, SyntaxErrorKind::NestingTooDeep);
}
