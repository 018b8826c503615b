use crate::FieldError;
use crate::Params;
use crate::PathSegment;
use crate::RequestContext;
use crate::execution::ExecutionResult;
use crate::schema::Schema;
use crate::subscribe;
use crate::tests::utils::shared_schema;
use crate::value::Value;
use futures::StreamExt;
use futures::stream;
use serde_json::json;
use std::sync::Arc;

const SDL: &str = r#"
    type Query { noop: String }
    type Tick { n: Int }
    type Subscription {
        ticks(limit: Int!): Tick
        forever: Tick
        broken: Tick
        failing: Tick
        unwired: Tick
    }
"#;

fn tick(n: i64) -> Value {
    json!({"ticks": {"n": n}, "forever": {"n": n}, "broken": {"n": n}}).into()
}

fn schema() -> Arc<Schema> {
    shared_schema(SDL, |builder| {
        builder
            .subscribe("Subscription", "ticks", |params| {
                let limit: i64 = params.args.get("limit")?;
                Ok(stream::iter((1..=limit).map(|n| Ok(tick(n)))).boxed())
            })
            .subscribe("Subscription", "forever", |_| {
                Ok(stream::iter(1..).map(|n| Ok(tick(n))).boxed())
            })
            .subscribe("Subscription", "broken", |_| {
                let events = vec![Ok(tick(1)), Err(FieldError::new("source broke")), Ok(tick(3))];
                Ok(stream::iter(events).boxed())
            })
            .subscribe("Subscription", "failing", |_| Err(FieldError::new("cannot subscribe")))
    })
}

async fn collect(params: Params) -> Vec<ExecutionResult> {
    subscribe(params).collect().await
}

#[tokio::test]
async fn yields_one_result_per_event() {
    let results = collect(Params::new(schema(), "subscription { ticks(limit: 3) { n } }")).await;
    let data: Vec<_> = results.iter().map(|result| result.data.clone()).collect();
    assert_eq!(data, [
        json!({"ticks": {"n": 1}}),
        json!({"ticks": {"n": 2}}),
        json!({"ticks": {"n": 3}}),
    ]);
    assert!(results.iter().all(|result| result.errors.is_empty()));
}

#[tokio::test]
async fn cancellation_ends_the_stream() {
    let context = RequestContext::new();
    let params = Params::new(schema(), "subscription { forever { n } }").with_context(context.clone());
    let mut results = subscribe(params);

    let first = results.next().await.expect("first event");
    assert_eq!(first.data, json!({"forever": {"n": 1}}));
    let second = results.next().await.expect("second event");
    assert_eq!(second.data, json!({"forever": {"n": 2}}));

    context.cancel();
    assert!(results.next().await.is_none());
}

#[tokio::test]
async fn source_error_is_the_last_result() {
    let results = collect(Params::new(schema(), "subscription { broken { n } }")).await;
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].data, json!({"broken": {"n": 1}}));
    assert_eq!(results[1].data, json!(null));
    assert_eq!(results[1].errors[0].message, "source broke");
}

#[tokio::test]
async fn subscribe_function_error() {
    let results = collect(Params::new(schema(), "subscription { failing { n } }")).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].data, json!(null));
    assert_eq!(results[0].errors[0].message, "cannot subscribe");
    assert_eq!(results[0].errors[0].path, Some(vec![PathSegment::from("failing")]));
}

#[tokio::test]
async fn field_without_subscribe_function() {
    let results = collect(Params::new(schema(), "subscription { unwired { n } }")).await;
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].errors[0].message,
        "the subscription function \"unwired\" is not defined",
    );
}

#[tokio::test]
async fn request_errors_are_a_single_result() {
    let results = collect(Params::new(schema(), "subscription { ticks { n } }")).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].data, json!(null));
    assert_eq!(
        results[0].errors[0].message,
        "Field \"ticks\" argument \"limit\" of type \"Int!\" is required but not provided.",
    );

    let results = collect(Params::new(schema(), "subscription {")).await;
    assert_eq!(results.len(), 1);
    assert!(results[0].errors[0].message.starts_with("Syntax Error"));
}

#[tokio::test]
async fn queries_execute_once() {
    let params = Params::new(schema(), "{ noop }").with_root_value(json!({"noop": "done"}));
    let results = collect(params).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].data, json!({"noop": "done"}));
}

#[tokio::test]
async fn subscription_variables_reach_the_subscribe_function() {
    let params = Params::new(schema(), "subscription S($limit: Int!) { ticks(limit: $limit) { n } }")
        .with_variables(crate::tests::utils::json_map(json!({"limit": 1})));
    let results = collect(params).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].data, json!({"ticks": {"n": 1}}));
}
