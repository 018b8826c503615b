//! The reified type system: named types, fields, arguments and directives.
//!
//! Types reference each other by name through [`TypeRef`]; the
//! [`Schema`](crate::schema::Schema) resolves those names. Object, interface
//! and input-object field lists may be supplied as [`Thunk`]s, which the
//! schema builder forces exactly once.

mod directive;
mod enum_type;
mod field_definition;
mod input_object_type;
mod input_value_definition;
mod interface_type;
mod named_type;
mod object_type;
mod scalar_type;
pub(crate) mod scalars;
mod type_kind;
mod type_ref;
mod union_type;

pub use directive::DEFAULT_DEPRECATION_REASON;
pub use directive::Directive;
pub use directive::DirectiveLocation;
pub use enum_type::EnumType;
pub use enum_type::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use field_definition::ResolveFn;
pub use field_definition::SubscribeFn;
pub use input_object_type::InputObjectType;
pub use input_value_definition::InputValueDefinition;
pub use interface_type::InterfaceType;
pub use named_type::HasFields;
pub use named_type::NamedType;
pub use object_type::IsTypeOfFn;
pub use object_type::ObjectType;
pub use scalar_type::ParseLiteralFn;
pub use scalar_type::ParseValueFn;
pub use scalar_type::ScalarType;
pub use scalar_type::SerializeFn;
pub use scalars::MAX_INT;
pub use scalars::MIN_INT;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;
pub use union_type::ResolveTypeFn;
pub use union_type::UnionType;

use std::sync::Arc;

/// A deferred builder, evaluated once when the schema is built. Lets types
/// that refer to each other declare their fields lazily.
pub type Thunk<T> = Arc<dyn Fn() -> T + Send + Sync>;

#[cfg(test)]
mod tests;
