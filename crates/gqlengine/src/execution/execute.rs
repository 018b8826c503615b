use crate::coercion::coerce_argument_values;
use crate::context::RequestContext;
use crate::error::FieldError;
use crate::error::FieldResult;
use crate::error::GraphQLError;
use crate::execution::ExecutionContext;
use crate::execution::ExecutionResult;
use crate::execution::ResolveInfo;
use crate::execution::ResolveParams;
use crate::execution::ResponsePath;
use crate::execution::collect_fields;
use crate::execution::complete_value::CompletionResult;
use crate::execution::complete_value::PropagateNull;
use crate::execution::complete_value::complete_value;
use crate::execution::complete_value::try_nullify;
use crate::execution::default_resolve;
use crate::extensions;
use crate::schema::Schema;
use crate::types::FieldDefinition;
use crate::types::ObjectType;
use crate::value::Value;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationType;
use rayon::prelude::*;
use serde_json::Value as JsonValue;
use std::panic;
use std::panic::AssertUnwindSafe;

/// How sibling fields of a query are resolved.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExecutionStrategy {
    /// One field at a time, in selection order.
    #[default]
    Serial,

    /// Sibling fields are resolved concurrently on the rayon thread pool.
    /// The response still lists them in selection order. Mutation root
    /// fields always run serially.
    Parallel,
}

/// Inputs to [`execute`].
pub struct ExecuteParams<'a> {
    pub schema: &'a Schema,
    pub document: &'a ast::Document,
    pub root_value: Value,
    pub variables: serde_json::Map<String, JsonValue>,
    pub operation_name: Option<String>,
    pub context: RequestContext,
    pub strategy: ExecutionStrategy,
}

impl<'a> ExecuteParams<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        Self {
            schema,
            document,
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

/// Executes one operation of an already validated document.
///
/// Operation-selection and variable-coercion failures produce a result with
/// `null` data and no field is resolved.
pub fn execute(params: ExecuteParams<'_>) -> ExecutionResult {
    let ExecuteParams {
        schema,
        document,
        root_value,
        variables,
        operation_name,
        context,
        strategy,
    } = params;

    let mut hook_errors = extensions::run_hook(
        schema.extensions(),
        "execution_did_start",
        |ext| ext.execution_did_start(&context),
    );

    let mut result = match ExecutionContext::build(
        schema,
        document,
        operation_name.as_deref(),
        &variables,
        &root_value,
        &context,
        strategy,
    ) {
        Ok(ec) => execute_operation(&ec),
        Err(errors) => {
            log::debug!("execution aborted before resolving any field: {} error(s)", errors.len());
            ExecutionResult::from_errors(errors)
        },
    };

    hook_errors.extend(extensions::run_hook(
        schema.extensions(),
        "execution_did_end",
        |ext| ext.execution_did_end(&context, &result),
    ));
    result.errors.extend(hook_errors);
    extensions::attach_results(schema.extensions(), &context, &mut result);
    result
}

/// Runs the selected operation's root selection set.
pub(crate) fn execute_operation(ec: &ExecutionContext<'_>) -> ExecutionResult {
    log::debug!(
        "executing {} operation {}",
        ec.operation.operation,
        ec.operation.name_str().unwrap_or("<anonymous>"),
    );
    let serial = ec.operation.operation == OperationType::Mutation
        || ec.strategy == ExecutionStrategy::Serial;
    let data = execute_selection_set(
        ec,
        &ec.root_type,
        ec.root_value,
        &[&ec.operation.selection_set],
        &ResponsePath::Root,
        serial,
    );
    ExecutionResult {
        data: data.map(JsonValue::Object).unwrap_or(JsonValue::Null),
        errors: ec.take_errors(),
        extensions: serde_json::Map::new(),
    }
}

/// Collects and resolves the fields of `selection_sets` on `object_type`.
///
/// `serial` forces one field at a time, each fully completed before the next
/// starts; otherwise the context's strategy decides.
pub(crate) fn execute_selection_set<'a>(
    ec: &ExecutionContext<'a>,
    object_type: &ObjectType,
    source: &Value,
    selection_sets: &[&'a ast::SelectionSet],
    path: &ResponsePath<'_>,
    serial: bool,
) -> Result<serde_json::Map<String, JsonValue>, PropagateNull> {
    let grouped = collect_fields(
        ec.schema,
        &ec.fragments,
        &ec.variables,
        object_type,
        selection_sets.iter().copied(),
    );

    let resolve = |(response_key, fields): (&&'a str, &Vec<&'a ast::Field>)| {
        resolve_field(ec, object_type, source, response_key, fields, path)
            .map(|result| (*response_key, result))
    };
    let results: Vec<Option<(&str, CompletionResult)>> =
        if serial || ec.strategy == ExecutionStrategy::Serial || grouped.len() < 2 {
            grouped.iter().map(resolve).collect()
        } else {
            let entries: Vec<_> = grouped.iter().collect();
            entries.into_par_iter().map(resolve).collect()
        };

    let mut completed = serde_json::Map::with_capacity(results.len());
    let mut propagate = false;
    for (response_key, result) in results.into_iter().flatten() {
        match result {
            Ok(value) => {
                completed.insert(response_key.to_string(), value);
            },
            Err(PropagateNull) => propagate = true,
        }
    }
    if propagate {
        Err(PropagateNull)
    } else {
        Ok(completed)
    }
}

/// Resolves and completes one response key. `None` means the parent type
/// has no such field, and the key is left out of the response.
fn resolve_field<'a>(
    ec: &ExecutionContext<'a>,
    parent_type: &ObjectType,
    source: &Value,
    response_key: &'a str,
    fields: &[&'a ast::Field],
    path: &ResponsePath<'_>,
) -> Option<CompletionResult> {
    let field_ast = *fields.first()?;
    let field_name = field_ast.name.as_str();
    let field_def = ec.schema.object_field(parent_type, field_name)?;
    let return_type = field_def.field_type();
    let field_path = path.key(response_key);

    let args = match coerce_argument_values(
        ec.schema.type_map(),
        field_def.arguments(),
        &field_ast.arguments,
        &ec.variables,
    ) {
        Ok(args) => args,
        Err(err) => {
            ec.push_error(err.with_path(field_path.to_vec()));
            return Some(try_nullify(return_type, Err(PropagateNull)));
        },
    };

    let info = ResolveInfo {
        field_name,
        field_asts: fields,
        return_type,
        parent_type,
        schema: ec.schema,
        fragments: &ec.fragments,
        root_value: ec.root_value,
        operation: ec.operation,
        variables: &ec.variables,
        path: field_path,
        context: ec.context,
    };

    ec.run_hook("resolve_field_did_start", |ext| ext.resolve_field_did_start(ec.context, &info));
    let resolved = call_resolver(field_def, ResolveParams {
        source,
        args: &args,
        info: &info,
        context: ec.context,
    });
    ec.run_hook("resolve_field_did_end", |ext| ext.resolve_field_did_end(ec.context, &info, &resolved));
    log::trace!("resolved {}.{} at {:?}", parent_type.name(), field_name, info.path());

    let completed = match resolved {
        Ok(value) => complete_value(ec, return_type, &info, &field_path, value),
        Err(err) => {
            ec.push_error(
                GraphQLError::located(err.message, fields.iter().map(|field| field.loc.as_ref()))
                    .with_path(field_path.to_vec()),
            );
            Err(PropagateNull)
        },
    };
    Some(try_nullify(return_type, completed))
}

/// Invokes the field's resolver (or the default one), turning a panic into
/// a field error.
fn call_resolver(field_def: &FieldDefinition, params: ResolveParams<'_>) -> FieldResult<Value> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| match field_def.resolver() {
        Some(resolve) => resolve(params),
        None => default_resolve(params),
    }));
    outcome.unwrap_or_else(|payload| {
        let err = FieldError::from_panic(payload);
        log::warn!(
            "resolver for {}.{} panicked: {}",
            params.info.parent_type.name(),
            params.info.field_name,
            err.message,
        );
        Err(err)
    })
}
