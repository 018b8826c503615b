use crate::error::FieldResult;
use crate::execution::ResolveParams;
use crate::types::InputValueDefinition;
use crate::types::TypeRef;
use crate::value::Value;
use futures::stream::BoxStream;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

pub type ResolveFn = Arc<dyn Fn(ResolveParams<'_>) -> FieldResult<Value> + Send + Sync>;

/// Produces the source event stream of a subscription field.
pub type SubscribeFn = Arc<
    dyn Fn(ResolveParams<'_>) -> FieldResult<BoxStream<'static, FieldResult<Value>>>
        + Send
        + Sync,
>;

/// A field of an object or interface type.
#[derive(Clone)]
pub struct FieldDefinition {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) field_type: TypeRef,
    pub(crate) arguments: IndexMap<String, InputValueDefinition>,
    pub(crate) resolve: Option<ResolveFn>,
    pub(crate) subscribe: Option<SubscribeFn>,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) cost: Option<u64>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            field_type,
            arguments: IndexMap::new(),
            resolve: None,
            subscribe: None,
            deprecation_reason: None,
            cost: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.insert(argument.name.clone(), argument);
        self
    }

    pub fn with_resolver(
        mut self,
        resolve: impl Fn(ResolveParams<'_>) -> FieldResult<Value> + Send + Sync + 'static,
    ) -> Self {
        self.resolve = Some(Arc::new(resolve));
        self
    }

    pub fn with_subscribe(
        mut self,
        subscribe: impl Fn(ResolveParams<'_>) -> FieldResult<BoxStream<'static, FieldResult<Value>>>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.subscribe = Some(Arc::new(subscribe));
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// The static cost this field contributes to
    /// [`query_complexity`](crate::cost::query_complexity).
    pub fn with_cost(mut self, cost: u64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field_type(&self) -> &TypeRef {
        &self.field_type
    }

    pub fn arguments(&self) -> &IndexMap<String, InputValueDefinition> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&InputValueDefinition> {
        self.arguments.get(name)
    }

    pub fn resolver(&self) -> Option<&ResolveFn> {
        self.resolve.as_ref()
    }

    pub fn subscriber(&self) -> Option<&SubscribeFn> {
        self.subscribe.as_ref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn cost(&self) -> Option<u64> {
        self.cost
    }
}

impl fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("arguments", &self.arguments)
            .field("has_resolver", &self.resolve.is_some())
            .field("has_subscribe", &self.subscribe.is_some())
            .field("deprecation_reason", &self.deprecation_reason)
            .field("cost", &self.cost)
            .finish()
    }
}
