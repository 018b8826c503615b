use gqlengine_parser::ParseOptions;
use gqlengine_parser::SyntaxError;
use gqlengine_parser::ast;
use std::fmt;

/// A reference to a type by name, possibly wrapped in list and non-null
/// modifiers.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn named_non_null(name: impl Into<String>) -> Self {
        Self::non_null(Self::named(name))
    }

    pub fn list(of_type: TypeRef) -> Self {
        Self::List(Box::new(of_type))
    }

    pub fn non_null(of_type: TypeRef) -> Self {
        Self::NonNull(Box::new(of_type))
    }

    /// Parses a type reference written in GraphQL syntax, e.g. `[Int!]!`.
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        let ast_type = gqlengine_parser::parse_type(source, ParseOptions {
            no_location: true,
            no_source: true,
        })?;
        Ok(Self::from_ast(&ast_type))
    }

    pub fn from_ast(ast_type: &ast::Type) -> Self {
        match ast_type {
            ast::Type::Named(named) => Self::Named(named.name.value.clone()),
            ast::Type::List(list) => Self::list(Self::from_ast(&list.of_type)),
            ast::Type::NonNull(non_null) => Self::non_null(Self::from_ast(&non_null.of_type)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// `true` for `[T]` and `[T]!`.
    pub fn is_list(&self) -> bool {
        matches!(self.nullable(), Self::List(_))
    }

    /// Strips one outer non-null modifier, if present.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            Self::NonNull(inner) => inner,
            other => other,
        }
    }

    /// The name of the named type at the core of this reference.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_name(),
        }
    }

    /// Returns the first `T!!` found anywhere in this reference.
    pub(crate) fn find_nested_non_null(&self) -> Option<&TypeRef> {
        match self {
            Self::Named(_) => None,
            Self::NonNull(inner) if inner.is_non_null() => Some(self),
            Self::List(inner) | Self::NonNull(inner) => inner.find_nested_non_null(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
