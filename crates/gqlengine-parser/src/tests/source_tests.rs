use crate::Source;
use crate::SourcePosition;

#[test]
fn positions_are_one_based() {
    let source = Source::new("ab\ncd");
    assert_eq!(source.position(0), SourcePosition { line: 1, column: 1 });
    assert_eq!(source.position(1), SourcePosition { line: 1, column: 2 });
    assert_eq!(source.position(3), SourcePosition { line: 2, column: 1 });
}

#[test]
fn recognizes_every_line_terminator() {
    let source = Source::new("a\r\nb\rc\nd");
    assert_eq!(source.position(3).line, 2);
    assert_eq!(source.position(5).line, 3);
    assert_eq!(source.position(7).line, 4);
    assert_eq!(source.line_text(1), Some("a"));
    assert_eq!(source.line_text(2), Some("b"));
    assert_eq!(source.line_text(4), Some("d"));
    assert_eq!(source.line_text(5), None);
    assert_eq!(source.line_text(0), None);
}

#[test]
fn columns_count_chars_not_bytes() {
    let source = Source::new("éé x");
    assert_eq!(source.position(5).column, 4);
}

#[test]
fn offsets_past_the_end_clamp() {
    let source = Source::new("abc");
    assert_eq!(source.position(100), SourcePosition { line: 1, column: 4 });
}

#[test]
fn default_and_custom_names() {
    assert_eq!(Source::new("").name(), "GraphQL");
    assert_eq!(Source::with_name("", "schema.graphql").name(), "schema.graphql");
}
