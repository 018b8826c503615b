use crate::coercion::TypeMap;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use gqlengine_parser::ParseOptions;
use gqlengine_parser::ast;

pub(super) const COERCION_SDL: &str = r#"
enum Color { RED GREEN BLUE }

input Point {
  x: Int!
  y: Int = 0
  label: String
}

input Shape {
  points: [Point!]!
  color: Color = RED
}

type Query {
  draw(shape: Shape!, scale: Float = 1.5, tags: [String], count: Int!): Boolean
}
"#;

pub(super) fn test_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(COERCION_SDL)
        .and_then(SchemaBuilder::build)
        .unwrap_or_else(|err| panic!("test schema failed to build: {err}"))
}

pub(super) fn types() -> TypeMap {
    test_schema().type_map().clone()
}

pub(super) fn parse_query(source: &str) -> ast::Document {
    gqlengine_parser::parse(source, ParseOptions::default())
        .unwrap_or_else(|err| panic!("invalid query: {}", err.format_detailed()))
}

pub(super) fn literal(source: &str) -> ast::Value {
    gqlengine_parser::parse_value(source, ParseOptions::default())
        .unwrap_or_else(|err| panic!("invalid literal `{source}`: {err}"))
}

/// The variable definitions of the document's first operation.
pub(super) fn variable_definitions(document: &ast::Document) -> &[ast::VariableDefinition] {
    &document.operations()
        .next()
        .expect("document has an operation")
        .variable_definitions
}

/// The arguments of the first field selected by the document's first
/// operation.
pub(super) fn first_field_arguments(document: &ast::Document) -> &[ast::Argument] {
    let operation = document.operations().next().expect("document has an operation");
    match operation.selection_set.selections.first() {
        Some(ast::Selection::Field(field)) => &field.arguments,
        other => panic!("expected a field selection, found {other:?}"),
    }
}
