use crate::Location;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::ast_node::impl_ast_node;
use inherent::inherent;
use std::fmt;

/// A value literal, as written in the document.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// Calls `visit` on every variable referenced anywhere in this value.
    pub fn for_each_variable<'a>(&'a self, visit: &mut impl FnMut(&'a Variable)) {
        match self {
            Self::Variable(var) => visit(var),
            Self::List(list) => {
                for item in &list.values {
                    item.for_each_variable(visit);
                }
            },
            Self::Object(obj) => {
                for field in &obj.fields {
                    field.value.for_each_variable(visit);
                }
            },
            _ => {},
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Variable(v) => v.kind(),
            Self::Int(v) => v.kind(),
            Self::Float(v) => v.kind(),
            Self::String(v) => v.kind(),
            Self::Boolean(v) => v.kind(),
            Self::Null(v) => v.kind(),
            Self::Enum(v) => v.kind(),
            Self::List(v) => v.kind(),
            Self::Object(v) => v.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Location> {
        match self {
            Self::Variable(v) => v.loc(),
            Self::Int(v) => v.loc(),
            Self::Float(v) => v.loc(),
            Self::String(v) => v.loc(),
            Self::Boolean(v) => v.loc(),
            Self::Null(v) => v.loc(),
            Self::Enum(v) => v.loc(),
            Self::List(v) => v.loc(),
            Self::Object(v) => v.loc(),
        }
    }
}

/// Prints the value in GraphQL syntax, e.g. `{a: [1, "x", $v]}`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(var) => write!(f, "${}", var.name),
            Self::Int(IntValue { value, .. }) | Self::Float(FloatValue { value, .. }) => {
                f.write_str(value)
            },
            Self::String(StringValue { value, .. }) => write!(f, "{value:?}"),
            Self::Boolean(BooleanValue { value, .. }) => write!(f, "{value}"),
            Self::Null(_) => f.write_str("null"),
            Self::Enum(EnumValue { value, .. }) => f.write_str(value),
            Self::List(list) => {
                f.write_str("[")?;
                for (idx, item) in list.values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Object(obj) => {
                f.write_str("{")?;
                for (idx, field) in obj.fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_str("}")
            },
        }
    }
}

/// `$name`
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    /// Source text of the literal, e.g. `-42`.
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    /// Source text of the literal, e.g. `1.5e3`.
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    /// The decoded value (escapes resolved, block indentation stripped).
    pub value: String,
    pub block: bool,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Option<Location>,
}

impl ObjectValue {
    pub fn field(&self, name: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|field| field.name.value == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Location>,
}

impl_ast_node!(
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
);
