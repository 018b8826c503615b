use crate::Location;
use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::ast::TypeSystemDefinition;
use crate::ast::ast_node::impl_ast_node;
use inherent::inherent;

/// The root of a parsed GraphQL document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Option<Location>,
}

impl Document {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }

    pub fn type_system_definitions(&self) -> impl Iterator<Item = &TypeSystemDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::TypeSystem(ts) => Some(ts),
            _ => None,
        })
    }
}

impl_ast_node!(Document);

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    TypeSystem(TypeSystemDefinition),
}

#[inherent]
impl AstNode for Definition {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Operation(op) => op.kind(),
            Self::Fragment(frag) => frag.kind(),
            Self::TypeSystem(ts) => ts.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Location> {
        match self {
            Self::Operation(op) => op.loc(),
            Self::Fragment(frag) => frag.loc(),
            Self::TypeSystem(ts) => ts.loc(),
        }
    }
}
