use crate::execution::ExecuteParams;
use crate::execution::ExecutionResult;
use crate::execution::execute;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::value::Value;
use gqlengine_parser::ParseOptions;
use gqlengine_parser::ast;

/// Loads `sdl`, lets `configure` attach hooks, and builds the schema.
pub(super) fn build_schema(
    sdl: &str,
    configure: impl FnOnce(SchemaBuilder) -> SchemaBuilder,
) -> Schema {
    SchemaBuilder::new()
        .load_str(sdl)
        .map(configure)
        .and_then(SchemaBuilder::build)
        .unwrap_or_else(|err| panic!("test schema failed to build: {err}"))
}

pub(super) fn parse_query(source: &str) -> ast::Document {
    gqlengine_parser::parse(source, ParseOptions::default())
        .unwrap_or_else(|err| panic!("invalid query: {}", err.format_detailed()))
}

/// Executes `query` (unvalidated) against `schema` with `root_value`.
pub(super) fn run(schema: &Schema, query: &str, root_value: impl Into<Value>) -> ExecutionResult {
    let doc = parse_query(query);
    execute(ExecuteParams::new(schema, &doc).with_root_value(root_value))
}

pub(super) fn json_map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
