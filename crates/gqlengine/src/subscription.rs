//! Subscriptions: one execution per event of a source stream.

use crate::coercion::coerce_argument_values;
use crate::context::RequestContext;
use crate::error::FieldError;
use crate::error::FieldResult;
use crate::error::GraphQLError;
use crate::execution::ExecuteParams;
use crate::execution::ExecutionContext;
use crate::execution::ExecutionResult;
use crate::execution::ExecutionStrategy;
use crate::execution::ResolveInfo;
use crate::execution::ResolveParams;
use crate::execution::ResponsePath;
use crate::execution::collect_fields;
use crate::execution::execute;
use crate::extensions;
use crate::graphql::Params;
use crate::graphql::parse_and_validate;
use crate::schema::Schema;
use crate::value::Value;
use futures::StreamExt;
use futures::stream;
use futures::stream::BoxStream;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationType;
use serde_json::Value as JsonValue;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

type SourceStream = BoxStream<'static, FieldResult<Value>>;

/// Everything needed to execute the operation once per source event.
struct EventExecutor {
    schema: Arc<Schema>,
    document: Arc<ast::Document>,
    variables: serde_json::Map<String, JsonValue>,
    operation_name: Option<String>,
    context: RequestContext,
    strategy: ExecutionStrategy,
}

impl EventExecutor {
    fn execute(&self, event: Value) -> ExecutionResult {
        execute(ExecuteParams {
            schema: &self.schema,
            document: &self.document,
            root_value: event,
            variables: self.variables.clone(),
            operation_name: self.operation_name.clone(),
            context: self.context.clone(),
            strategy: self.strategy,
        })
    }
}

/// Subscribes to a request.
///
/// The returned stream yields one result per event of the subscription
/// field's source stream, each produced by executing the operation with the
/// event as its root value. The stream ends when the source ends, after the
/// first source error (reported as a result of its own), or when the
/// request context's cancellation token fires.
///
/// Any failure before the source stream exists (syntax, validation,
/// variables, a missing subscribe function) is emitted as a single result.
/// A non-subscription operation executes once.
pub fn subscribe(params: Params) -> BoxStream<'static, ExecutionResult> {
    let Params {
        schema,
        request_string,
        root_value,
        variables,
        operation_name,
        context,
        strategy,
    } = params;

    let mut hook_errors = extensions::run_hook(
        schema.extensions(),
        "init",
        |ext| ext.init(&context),
    );
    let document = match parse_and_validate(&schema, &request_string, &context, &mut hook_errors) {
        Ok(document) => Arc::new(document),
        Err(mut errors) => {
            errors.extend(hook_errors);
            return single(ExecutionResult::from_errors(errors));
        },
    };

    let executor = EventExecutor {
        schema,
        document,
        variables,
        operation_name,
        context,
        strategy,
    };

    let source = match create_source_stream(&executor, &root_value) {
        Ok(Some(source)) => source,
        Ok(None) => {
            let mut result = executor.execute(root_value);
            result.errors.extend(hook_errors);
            return single(result);
        },
        Err(mut errors) => {
            errors.extend(hook_errors);
            return single(ExecutionResult::from_errors(errors));
        },
    };

    // Errors from the request-level hooks ride along with the first result.
    let cancelled = executor.context.cancellation_token().clone().cancelled_owned();
    stream::unfold(Some((source, executor, hook_errors)), |state| async move {
        let (mut source, executor, pending_errors) = state?;
        if executor.context.is_cancelled() {
            return None;
        }
        let mut result = match source.next().await? {
            Ok(event) => executor.execute(event),
            Err(err) => {
                log::debug!("subscription source stream failed: {}", err.message);
                let mut result = ExecutionResult::from_errors(vec![GraphQLError::new(err.message)]);
                result.errors.extend(pending_errors);
                return Some((result, None));
            },
        };
        result.errors.extend(pending_errors);
        Some((result, Some((source, executor, vec![]))))
    })
    .take_until(cancelled)
    .boxed()
}

fn single(result: ExecutionResult) -> BoxStream<'static, ExecutionResult> {
    stream::once(async move { result }).boxed()
}

/// Calls the subscribe function of the operation's single root field.
/// `Ok(None)` means the operation is not a subscription.
fn create_source_stream(
    executor: &EventExecutor,
    root_value: &Value,
) -> Result<Option<SourceStream>, Vec<GraphQLError>> {
    let ec = ExecutionContext::build(
        &executor.schema,
        &executor.document,
        executor.operation_name.as_deref(),
        &executor.variables,
        root_value,
        &executor.context,
        executor.strategy,
    )?;
    if ec.operation.operation != OperationType::Subscription {
        return Ok(None);
    }

    let grouped = collect_fields(
        ec.schema,
        &ec.fragments,
        &ec.variables,
        &ec.root_type,
        [&ec.operation.selection_set],
    );
    let root_field = grouped.first()
        .and_then(|(response_key, field_asts)| Some((*response_key, *field_asts.first()?, field_asts)));
    let Some((response_key, field_ast, field_asts)) = root_field else {
        return Err(vec![GraphQLError::located(
            "Subscription operation selects no field.",
            [ec.operation.loc.as_ref()],
        )]);
    };
    let locations = || field_asts.iter().map(|field| field.loc.as_ref());
    let field_name = field_ast.name.as_str();

    let field_def = ec.schema.object_field(&ec.root_type, field_name).ok_or_else(|| {
        vec![GraphQLError::located(
            format!("the subscription field \"{field_name}\" is not defined"),
            locations(),
        )]
    })?;
    let subscribe = field_def.subscriber().ok_or_else(|| {
        vec![GraphQLError::located(
            format!("the subscription function \"{field_name}\" is not defined"),
            locations(),
        )]
    })?;

    let path = ResponsePath::Root;
    let field_path = path.key(response_key);
    let args = coerce_argument_values(
        ec.schema.type_map(),
        field_def.arguments(),
        &field_ast.arguments,
        &ec.variables,
    )
    .map_err(|err| vec![err.with_path(field_path.to_vec())])?;

    let info = ResolveInfo {
        field_name,
        field_asts,
        return_type: field_def.field_type(),
        parent_type: &ec.root_type,
        schema: ec.schema,
        fragments: &ec.fragments,
        root_value,
        operation: ec.operation,
        variables: &ec.variables,
        path: field_path,
        context: ec.context,
    };
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        subscribe(ResolveParams {
            source: root_value,
            args: &args,
            info: &info,
            context: ec.context,
        })
    }));
    let source = outcome.unwrap_or_else(|payload| Err(FieldError::from_panic(payload)));
    source.map(Some).map_err(|err| {
        vec![GraphQLError::located(err.message, locations()).with_path(field_path.to_vec())]
    })
}
