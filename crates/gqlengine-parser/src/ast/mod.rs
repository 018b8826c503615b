//! An owned AST for GraphQL documents.
//!
//! Every node carries an optional [`Location`](crate::Location) (absent when
//! parsed with [`ParseOptions::no_location`](crate::ParseOptions)). Nodes
//! are plain data: they own their strings and can outlive the
//! [`Source`](crate::Source) text they came from.
//!
//! Numeric literals keep their source text ([`IntValue::value`],
//! [`FloatValue::value`]); converting them is the job of input coercion.

mod ast_node;
mod document;
mod executable;
mod name;
mod type_annotation;
mod type_system;
mod value;

pub use ast_node::AstNode;
pub use ast_node::NodeKind;
pub use document::Definition;
pub use document::Document;
pub use executable::Argument;
pub use executable::Directive;
pub use executable::Field;
pub use executable::FragmentDefinition;
pub use executable::FragmentSpread;
pub use executable::InlineFragment;
pub use executable::OperationDefinition;
pub use executable::OperationType;
pub use executable::Selection;
pub use executable::SelectionSet;
pub use executable::VariableDefinition;
pub use name::Name;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::Type;
pub use type_system::DirectiveDefinition;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumValueDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::ObjectTypeDefinition;
pub use type_system::OperationTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::SchemaDefinition;
pub use type_system::TypeDefinition;
pub use type_system::TypeExtensionDefinition;
pub use type_system::TypeSystemDefinition;
pub use type_system::UnionTypeDefinition;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::NullValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use value::Variable;
