use crate::execution::ResolveInfo;
use crate::types::Thunk;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// Names the concrete object type of a value resolved for an abstract type.
pub type ResolveTypeFn = Arc<dyn Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync>;

/// An abstract output type whose possible types are its declared members.
#[derive(Clone)]
pub struct UnionType {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) types: Vec<String>,
    pub(crate) types_thunk: Option<Thunk<Vec<String>>>,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}

impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            types: vec![],
            types_thunk: None,
            resolve_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_member(mut self, type_name: impl Into<String>) -> Self {
        self.types.push(type_name.into());
        self
    }

    pub fn with_members_thunk(
        mut self,
        thunk: impl Fn() -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.types_thunk = Some(Arc::new(thunk));
        self
    }

    pub fn with_resolve_type(
        mut self,
        resolve_type: impl Fn(&Value, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn members(&self) -> &[String] {
        &self.types
    }

    pub fn resolve_type_fn(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }

    pub(crate) fn force_thunks(&mut self) {
        if let Some(thunk) = self.types_thunk.take() {
            for type_name in thunk() {
                if !self.types.contains(&type_name) {
                    self.types.push(type_name);
                }
            }
        }
    }
}

impl fmt::Debug for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionType")
            .field("name", &self.name)
            .field("types", &self.types)
            .field("has_resolve_type", &self.resolve_type.is_some())
            .finish_non_exhaustive()
    }
}
