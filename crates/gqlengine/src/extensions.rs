//! Request lifecycle hooks.
//!
//! Extensions are registered on the schema with
//! [`SchemaBuilder::extension`](crate::schema::SchemaBuilder::extension) and
//! observe every request run against it. A panicking hook never aborts the
//! request: the panic is reported in the result's `errors` as
//! `"<extension name>.<hook name>: <panic message>"` and the remaining hooks
//! still run.

use crate::context::RequestContext;
use crate::error::FieldResult;
use crate::error::GraphQLError;
use crate::error::panic_message;
use crate::execution::ExecutionResult;
use crate::execution::ResolveInfo;
use crate::value::Value;
use gqlengine_parser::ast;
use serde_json::Value as JsonValue;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

pub trait Extension: Send + Sync {
    /// The key this extension's result is stored under in
    /// `result.extensions`, and the prefix of its hook errors.
    fn name(&self) -> &str;

    fn init(&self, _context: &RequestContext) {}

    fn parse_did_start(&self, _context: &RequestContext, _request: &str) {}

    fn parse_did_end(&self, _context: &RequestContext, _errors: &[GraphQLError]) {}

    fn validation_did_start(&self, _context: &RequestContext, _document: &ast::Document) {}

    fn validation_did_end(&self, _context: &RequestContext, _errors: &[GraphQLError]) {}

    fn execution_did_start(&self, _context: &RequestContext) {}

    fn execution_did_end(&self, _context: &RequestContext, _result: &ExecutionResult) {}

    fn resolve_field_did_start(&self, _context: &RequestContext, _info: &ResolveInfo<'_>) {}

    fn resolve_field_did_end(
        &self,
        _context: &RequestContext,
        _info: &ResolveInfo<'_>,
        _result: &FieldResult<Value>,
    ) {
    }

    /// Whether [`get_result`](Self::get_result) has anything to contribute
    /// to this request's result.
    fn has_result(&self, _context: &RequestContext) -> bool {
        false
    }

    fn get_result(&self, _context: &RequestContext) -> JsonValue {
        JsonValue::Null
    }
}

/// Calls `hook` on every extension in order, converting panics into errors.
pub(crate) fn run_hook(
    extensions: &[Arc<dyn Extension>],
    hook_name: &'static str,
    mut hook: impl FnMut(&dyn Extension),
) -> Vec<GraphQLError> {
    let mut errors = vec![];
    for ext in extensions {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| hook(ext.as_ref()))) {
            let message = format!("{}.{hook_name}: {}", ext.name(), panic_message(payload.as_ref()));
            log::warn!("extension hook panicked: {message}");
            errors.push(GraphQLError::new(message));
        }
    }
    errors
}

/// Stores each extension's `get_result` under its name in
/// `result.extensions`.
pub(crate) fn attach_results(
    extensions: &[Arc<dyn Extension>],
    context: &RequestContext,
    result: &mut ExecutionResult,
) {
    for ext in extensions {
        let mut has_result = false;
        let hook_errors = run_hook(std::slice::from_ref(ext), "has_result", |ext| {
            has_result = ext.has_result(context);
        });
        result.errors.extend(hook_errors);
        if !has_result {
            continue;
        }

        let mut extension_result = JsonValue::Null;
        let hook_errors = run_hook(std::slice::from_ref(ext), "get_result", |ext| {
            extension_result = ext.get_result(context);
        });
        if hook_errors.is_empty() {
            result.extensions.insert(ext.name().to_string(), extension_result);
        }
        result.errors.extend(hook_errors);
    }
}
