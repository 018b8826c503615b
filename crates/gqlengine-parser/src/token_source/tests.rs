use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

fn kinds(body: &str) -> Vec<GraphQLTokenKind<'_>> {
    StrGraphQLTokenSource::new(body).map(|token| token.kind).collect()
}

fn single_error(body: &str) -> String {
    match kinds(body).into_iter().next() {
        Some(GraphQLTokenKind::Error { message, .. }) => message,
        other => panic!("expected an error token, got {other:?}"),
    }
}

// =============================================================================
// Ignored tokens
// =============================================================================

#[test]
fn skips_whitespace_commas_comments_and_bom() {
    assert_eq!(
        kinds("\u{FEFF} ,, # a comment\n\t name # trailing"),
        vec![GraphQLTokenKind::name_borrowed("name"), GraphQLTokenKind::Eof],
    );
}

#[test]
fn empty_input_yields_only_eof() {
    assert_eq!(kinds(""), vec![GraphQLTokenKind::Eof]);
}

#[test]
fn stops_after_eof() {
    let mut lexer = StrGraphQLTokenSource::new("a");
    assert!(lexer.next().is_some());
    assert_eq!(lexer.next().map(|t| t.kind), Some(GraphQLTokenKind::Eof));
    assert!(lexer.next().is_none());
}

// =============================================================================
// Punctuators, names and keywords
// =============================================================================

#[test]
fn lexes_every_punctuator() {
    assert_eq!(
        kinds("! $ & ( ) ... : = @ [ ] { } |"),
        vec![
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::Ampersand,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn keywords_get_distinct_kinds() {
    assert_eq!(
        kinds("true false null nullable"),
        vec![
            GraphQLTokenKind::True,
            GraphQLTokenKind::False,
            GraphQLTokenKind::Null,
            GraphQLTokenKind::name_borrowed("nullable"),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn token_offsets_are_byte_ranges() {
    let tokens: Vec<_> = StrGraphQLTokenSource::new("  ab  \"é\"").collect();
    assert_eq!((tokens[0].start, tokens[0].end), (2, 4));
    assert_eq!((tokens[1].start, tokens[1].end), (6, 10));
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn lexes_ints_and_floats_preserving_text() {
    assert_eq!(
        kinds("0 -12 3.50 1e10 -1.5E-3"),
        vec![
            GraphQLTokenKind::int_value_borrowed("0"),
            GraphQLTokenKind::int_value_borrowed("-12"),
            GraphQLTokenKind::float_value_borrowed("3.50"),
            GraphQLTokenKind::float_value_borrowed("1e10"),
            GraphQLTokenKind::float_value_borrowed("-1.5E-3"),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn rejects_leading_zero() {
    assert_eq!(
        single_error("007"),
        "Invalid number, unexpected digit after 0: `007`",
    );
}

#[test]
fn rejects_missing_exponent_digits() {
    assert_eq!(
        single_error("1e"),
        "Invalid number, exponent must have at least one digit: `1e`",
    );
}

#[test]
fn rejects_name_glued_to_number() {
    assert_eq!(single_error("12abc"), "Invalid number: `12abc`");
}

#[test]
fn rejects_lone_minus() {
    assert_eq!(single_error("- 1"), "Invalid number, expected digit: `-`");
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn string_tokens_keep_raw_text() {
    assert_eq!(
        kinds(r#""a\"b" """block""""#),
        vec![
            GraphQLTokenKind::string_value_borrowed(r#""a\"b""#),
            GraphQLTokenKind::string_value_borrowed(r#""""block""""#),
            GraphQLTokenKind::Eof,
        ],
    );
}

#[test]
fn block_string_may_span_lines_and_escape_quotes() {
    let body = "\"\"\"line one\n  \\\"\"\" line two\"\"\"";
    assert_eq!(
        kinds(body),
        vec![GraphQLTokenKind::string_value_borrowed(body), GraphQLTokenKind::Eof],
    );
}

#[test]
fn unterminated_string_is_an_error() {
    assert_eq!(single_error("\"abc"), "Unterminated string");
    assert_eq!(single_error("\"abc\ndef\""), "Unterminated string");
    assert_eq!(single_error("\"\"\"abc"), "Unterminated string");
}

#[test]
fn bad_escape_is_an_error() {
    assert_eq!(
        single_error(r#""\x""#),
        "Invalid character escape sequence: \\x.",
    );
}

// =============================================================================
// Dots and invalid characters
// =============================================================================

#[test]
fn two_dots_suggest_spread() {
    match kinds("..").into_iter().next() {
        Some(GraphQLTokenKind::Error { message, help }) => {
            assert_eq!(message, "Unexpected `..` (use `...` for spread operator)");
            assert!(help.is_some());
        },
        other => panic!("expected an error token, got {other:?}"),
    }
}

#[test]
fn invalid_character_is_described() {
    assert_eq!(single_error("?"), "Unexpected character `?`");
    assert_eq!(
        single_error("\u{200B}"),
        "Unexpected character `\\u{200b}` (U+200B: ZERO WIDTH SPACE)",
    );
}
