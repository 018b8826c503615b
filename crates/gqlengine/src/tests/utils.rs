use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::sync::Arc;

/// Loads `sdl`, lets `configure` attach hooks, and builds a shareable
/// schema.
pub(super) fn shared_schema(
    sdl: &str,
    configure: impl FnOnce(SchemaBuilder) -> SchemaBuilder,
) -> Arc<Schema> {
    let schema = SchemaBuilder::new()
        .load_str(sdl)
        .map(configure)
        .and_then(SchemaBuilder::build)
        .unwrap_or_else(|err| panic!("test schema failed to build: {err}"));
    Arc::new(schema)
}

pub(super) fn json_map(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
