use crate::coercion::Variables;
use crate::coercion::coerce_variable_values;
use crate::context::RequestContext;
use crate::error::GraphQLError;
use crate::execution::ExecutionStrategy;
use crate::extensions;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::value::Value;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationType;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Vec<GraphQLError>>;

/// Per-operation execution state. Everything but the error list is
/// read-only once built.
pub(crate) struct ExecutionContext<'a> {
    pub schema: &'a Schema,
    pub fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub operation: &'a ast::OperationDefinition,
    pub root_type: Arc<ObjectType>,
    pub variables: Variables,
    pub root_value: &'a Value,
    pub context: &'a RequestContext,
    pub strategy: ExecutionStrategy,
    errors: Mutex<Vec<GraphQLError>>,
}

impl<'a> ExecutionContext<'a> {
    pub fn build(
        schema: &'a Schema,
        document: &'a ast::Document,
        operation_name: Option<&str>,
        raw_variables: &serde_json::Map<String, serde_json::Value>,
        root_value: &'a Value,
        context: &'a RequestContext,
        strategy: ExecutionStrategy,
    ) -> Result<Self> {
        let operation = select_operation(document, operation_name)?;
        let root_type = schema.root_type(operation.operation)
            .cloned()
            .ok_or_else(|| {
                let message = match operation.operation {
                    OperationType::Query => "Schema is not configured for queries",
                    OperationType::Mutation => "Schema is not configured for mutations",
                    OperationType::Subscription => "Schema is not configured for subscriptions",
                };
                vec![GraphQLError::located(message, [operation.loc.as_ref()])]
            })?;

        let variables = coerce_variable_values(
            schema.type_map(),
            &operation.variable_definitions,
            raw_variables,
        )?;

        let fragments = document.fragments()
            .map(|frag| (frag.name.as_str(), frag))
            .collect();

        Ok(Self {
            schema,
            fragments,
            operation,
            root_type,
            variables,
            root_value,
            context,
            strategy,
            errors: Mutex::new(vec![]),
        })
    }

    pub fn push_error(&self, error: GraphQLError) {
        self.errors.lock().push(error);
    }

    pub fn take_errors(&self) -> Vec<GraphQLError> {
        std::mem::take(&mut *self.errors.lock())
    }

    /// Runs one extension hook on every registered extension, recording
    /// panics as errors.
    pub fn run_hook(
        &self,
        hook_name: &'static str,
        hook: impl Fn(&dyn extensions::Extension),
    ) {
        for error in extensions::run_hook(self.schema.extensions(), hook_name, hook) {
            self.push_error(error);
        }
    }
}

fn select_operation<'a>(
    document: &'a ast::Document,
    operation_name: Option<&str>,
) -> Result<&'a ast::OperationDefinition> {
    let operation_name = operation_name.filter(|name| !name.is_empty());
    let mut operations = document.operations();
    match operation_name {
        Some(name) => operations
            .find(|op| op.name_str() == Some(name))
            .ok_or_else(|| vec![GraphQLError::new(format!("Unknown operation named \"{name}\"."))]),
        None => {
            let first = operations.next()
                .ok_or_else(|| vec![GraphQLError::new("Must provide an operation.")])?;
            if operations.next().is_some() {
                return Err(vec![GraphQLError::new(
                    "Must provide operation name if query contains multiple operations.",
                )]);
            }
            Ok(first)
        },
    }
}
