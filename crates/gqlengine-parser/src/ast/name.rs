use crate::Location;
use crate::ast::ast_node::impl_ast_node;
use std::fmt;

/// A GraphQL name (`/[_A-Za-z][_0-9A-Za-z]*/`).
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub value: String,
    pub loc: Option<Location>,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            loc: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl_ast_node!(Name);
