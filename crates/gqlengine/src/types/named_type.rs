use crate::types::EnumType;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::sync::Arc;

/// Implemented by the composite types that declare output fields.
pub trait HasFields {
    fn name(&self) -> &str;

    fn fields(&self) -> &IndexMap<String, FieldDefinition>;

    fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields().get(name)
    }
}

/// Any named type in a schema.
///
/// Each variant holds its type behind an `Arc`; within a built schema a
/// given name maps to exactly one allocation.
#[derive(Clone, Debug)]
pub enum NamedType {
    Scalar(Arc<ScalarType>),
    Object(Arc<ObjectType>),
    Interface(Arc<InterfaceType>),
    Union(Arc<UnionType>),
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Union(t) => t.name(),
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Union(t) => t.description(),
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
            Self::Union(_) => TypeKind::Union,
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
        }
    }

    pub fn is_input_type(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Interface(_) | Self::Union(_))
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// The output fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldDefinition>> {
        match self {
            Self::Object(t) => Some(t.fields()),
            Self::Interface(t) => Some(t.fields()),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Arc<ScalarType>> {
        match self {
            Self::Scalar(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        match self {
            Self::Object(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&Arc<InterfaceType>> {
        match self {
            Self::Interface(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&Arc<UnionType>> {
        match self {
            Self::Union(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&Arc<EnumType>> {
        match self {
            Self::Enum(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&Arc<InputObjectType>> {
        match self {
            Self::InputObject(t) => Some(t),
            _ => None,
        }
    }

    /// Identity comparison: `true` only if both refer to the same allocation.
    pub fn ptr_eq(&self, other: &NamedType) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Interface(a), Self::Interface(b)) => Arc::ptr_eq(a, b),
            (Self::Union(a), Self::Union(b)) => Arc::ptr_eq(a, b),
            (Self::Enum(a), Self::Enum(b)) => Arc::ptr_eq(a, b),
            (Self::InputObject(a), Self::InputObject(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub(crate) fn force_thunks(&mut self) {
        match self {
            Self::Object(t) => Arc::make_mut(t).force_thunks(),
            Self::Interface(t) => Arc::make_mut(t).force_thunks(),
            Self::Union(t) => Arc::make_mut(t).force_thunks(),
            Self::InputObject(t) => Arc::make_mut(t).force_thunks(),
            Self::Scalar(_) | Self::Enum(_) => {},
        }
    }

    fn has_pending_thunks(&self) -> bool {
        match self {
            Self::Object(t) => t.fields_thunk.is_some() || t.interfaces_thunk.is_some(),
            Self::Interface(t) => t.fields_thunk.is_some(),
            Self::Union(t) => t.types_thunk.is_some(),
            Self::InputObject(t) => t.fields_thunk.is_some(),
            Self::Scalar(_) | Self::Enum(_) => false,
        }
    }

    /// Forces thunks only when some are pending, so already-forced types
    /// keep their allocation.
    pub(crate) fn resolve_thunks(&mut self) {
        if self.has_pending_thunks() {
            self.force_thunks();
        }
    }
}

macro_rules! impl_from_for_named_type {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for NamedType {
                fn from(t: $ty) -> Self {
                    Self::$variant(Arc::new(t))
                }
            }

            impl From<Arc<$ty>> for NamedType {
                fn from(t: Arc<$ty>) -> Self {
                    Self::$variant(t)
                }
            }
        )*
    };
}

impl_from_for_named_type!(
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
);
