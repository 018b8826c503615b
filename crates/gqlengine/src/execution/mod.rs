//! The executor: operation selection, field collection, resolver dispatch
//! and value completion.

mod collect_fields;
mod complete_value;
mod default_resolver;
#[allow(clippy::module_inception)]
mod execute;
mod execution_context;
mod execution_result;
mod resolve_info;
mod response_path;

pub use default_resolver::FieldNameConvention;
pub use default_resolver::default_resolve;
pub use execute::ExecuteParams;
pub use execute::ExecutionStrategy;
pub use execute::execute;
pub use execution_result::ExecutionResult;
pub use resolve_info::ResolveInfo;
pub use resolve_info::ResolveParams;
pub use response_path::ResponsePath;

pub(crate) use collect_fields::collect_fields;
pub(crate) use execution_context::ExecutionContext;

#[cfg(test)]
mod tests;
