use crate::Location;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::ast_node::impl_ast_node;
use inherent::inherent;
use std::fmt;

/// A type reference such as `String`, `[Int!]` or `ID!`.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

impl Type {
    /// The name at the core of any list/non-null wrapping.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(named) => named.name.as_str(),
            Self::List(list) => list.of_type.innermost_name(),
            Self::NonNull(non_null) => non_null.of_type.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

#[inherent]
impl AstNode for Type {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Named(t) => t.kind(),
            Self::List(t) => t.kind(),
            Self::NonNull(t) => t.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Location> {
        match self {
            Self::Named(t) => t.loc(),
            Self::List(t) => t.loc(),
            Self::NonNull(t) => t.loc(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{}", named.name),
            Self::List(list) => write!(f, "[{}]", list.of_type),
            Self::NonNull(non_null) => write!(f, "{}!", non_null.of_type),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub of_type: Box<Type>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub of_type: Box<Type>,
    pub loc: Option<Location>,
}

impl_ast_node!(NamedType, ListType, NonNullType);
