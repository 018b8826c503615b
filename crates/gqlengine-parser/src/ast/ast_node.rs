use crate::Location;
use std::fmt;

/// Discriminator for every kind of AST node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    TypeExtensionDefinition,
    DirectiveDefinition,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Implemented by every AST node.
///
/// Concrete node structs implement this via `#[inherent] impl AstNode`, so
/// `kind()` and `loc()` are callable without importing the trait while
/// still being usable as a bound by generic helpers (error builders,
/// validation rules, etc.).
pub trait AstNode {
    fn kind(&self) -> NodeKind;

    fn loc(&self) -> Option<&Location>;
}

macro_rules! impl_ast_node {
    ($($node:ident),* $(,)?) => {
        $(
            #[inherent::inherent]
            impl $crate::ast::AstNode for $crate::ast::$node {
                pub fn kind(&self) -> $crate::ast::NodeKind {
                    $crate::ast::NodeKind::$node
                }

                pub fn loc(&self) -> Option<&$crate::Location> {
                    self.loc.as_ref()
                }
            }
        )*
    };
}
pub(crate) use impl_ast_node;
