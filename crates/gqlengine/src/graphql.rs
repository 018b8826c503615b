//! The one-shot request pipeline: parse, validate, execute.

use crate::context::RequestContext;
use crate::error::GraphQLError;
use crate::execution::ExecuteParams;
use crate::execution::ExecutionResult;
use crate::execution::ExecutionStrategy;
use crate::execution::execute;
use crate::extensions;
use crate::schema::Schema;
use crate::validation::validate;
use crate::value::Value;
use gqlengine_parser::ParseOptions;
use gqlengine_parser::Source;
use gqlengine_parser::ast;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// The source name request documents are parsed under.
pub const REQUEST_SOURCE_NAME: &str = "GraphQL request";

/// A request, as accepted by [`graphql`] and
/// [`subscribe`](crate::subscription::subscribe).
#[derive(Clone, Debug)]
pub struct Params {
    pub schema: Arc<Schema>,
    pub request_string: String,
    pub root_value: Value,
    pub variables: serde_json::Map<String, JsonValue>,
    pub operation_name: Option<String>,
    pub context: RequestContext,
    pub strategy: ExecutionStrategy,
}

impl Params {
    pub fn new(schema: Arc<Schema>, request_string: impl Into<String>) -> Self {
        Self {
            schema,
            request_string: request_string.into(),
            root_value: Value::Null,
            variables: serde_json::Map::new(),
            operation_name: None,
            context: RequestContext::default(),
            strategy: ExecutionStrategy::default(),
        }
    }

    pub fn with_root_value(mut self, root_value: impl Into<Value>) -> Self {
        self.root_value = root_value.into();
        self
    }

    pub fn with_variables(mut self, variables: serde_json::Map<String, JsonValue>) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Runs a request end to end.
///
/// Syntax and validation errors come back in `errors` with `null` data and
/// nothing is executed.
pub fn graphql(params: Params) -> ExecutionResult {
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
        Ok(document) => document,
        Err(errors) => {
            let mut result = ExecutionResult::from_errors(errors);
            result.errors.extend(hook_errors);
            extensions::attach_results(schema.extensions(), &context, &mut result);
            return result;
        },
    };

    let mut result = execute(ExecuteParams {
        schema: &schema,
        document: &document,
        root_value,
        variables,
        operation_name,
        context,
        strategy,
    });
    result.errors.extend(hook_errors);
    result
}

/// Parses `request_string` and validates it against `schema`, running the
/// parse and validation hooks along the way. Hook errors are appended to
/// `hook_errors`.
pub(crate) fn parse_and_validate(
    schema: &Schema,
    request_string: &str,
    context: &RequestContext,
    hook_errors: &mut Vec<GraphQLError>,
) -> Result<ast::Document, Vec<GraphQLError>> {
    let exts = schema.extensions();
    hook_errors.extend(extensions::run_hook(
        exts,
        "parse_did_start",
        |ext| ext.parse_did_start(context, request_string),
    ));
    let parsed = gqlengine_parser::parse(
        Source::with_name(request_string, REQUEST_SOURCE_NAME),
        ParseOptions::default(),
    );
    let parse_errors: Vec<GraphQLError> = match &parsed {
        Ok(_) => vec![],
        Err(err) => vec![err.clone().into()],
    };
    hook_errors.extend(extensions::run_hook(
        exts,
        "parse_did_end",
        |ext| ext.parse_did_end(context, &parse_errors),
    ));
    let document = match parsed {
        Ok(document) => document,
        Err(err) => {
            log::debug!("request failed to parse: {err}");
            return Err(parse_errors);
        },
    };

    hook_errors.extend(extensions::run_hook(
        exts,
        "validation_did_start",
        |ext| ext.validation_did_start(context, &document),
    ));
    let validation_errors = validate(schema, &document);
    hook_errors.extend(extensions::run_hook(
        exts,
        "validation_did_end",
        |ext| ext.validation_did_end(context, &validation_errors),
    ));
    if !validation_errors.is_empty() {
        log::debug!("request failed validation with {} error(s)", validation_errors.len());
        return Err(validation_errors);
    }
    Ok(document)
}
