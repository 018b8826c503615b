use crate::schema::ReadContentError;
use crate::types::TypeRef;
use gqlengine_parser::SyntaxError;
use gqlengine_parser::ast::OperationType;
use serde_json::Value as JsonValue;

/// Why a schema could not be built. Build errors carry no source location.
#[derive(Debug, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Directive \"@{0}\" is defined more than once.")]
    DuplicateDirective(String),

    #[error("Field \"{type_name}.{field_name}\" can only be defined once.")]
    DuplicateFieldName {
        type_name: String,
        field_name: String,
    },

    #[error("Schema must contain unique named types but contains multiple types named \"{0}\".")]
    DuplicateTypeName(String),

    #[error("{type_name} fields must be an object with field names as keys or a function which return such an object.")]
    EmptyFields {
        type_name: String,
    },

    #[error("Union type {0} must define one or more member types.")]
    EmptyUnion(String),

    #[error("Cannot extend type \"{0}\" because it is not defined.")]
    ExtensionOfUndefinedType(String),

    #[error("Cannot extend non-object type \"{0}\".")]
    InvalidExtensionType(String),

    #[error("{object_name} may only implement Interface types, it cannot implement: {type_name}.")]
    ImplementsNonInterface {
        object_name: String,
        type_name: String,
    },

    #[error(
        "{object_name}.{field_name}({argument_name}:) is of required type \"{argument_type}\" but is \
         not also provided by the interface {interface_name}.{field_name}."
    )]
    ExtraRequiredArgument {
        interface_name: String,
        object_name: String,
        field_name: String,
        argument_name: String,
        argument_type: TypeRef,
    },

    #[error(
        "{interface_name}.{field_name}({argument_name}:) expects type \"{expected}\" but \
         {object_name}.{field_name}({argument_name}:) provides type \"{found}\"."
    )]
    InterfaceArgumentTypeMismatch {
        interface_name: String,
        object_name: String,
        field_name: String,
        argument_name: String,
        expected: TypeRef,
        found: TypeRef,
    },

    #[error(
        "{interface_name}.{field_name} expects type \"{expected}\" but {object_name}.{field_name} \
         provides type \"{found}\"."
    )]
    InterfaceFieldTypeMismatch {
        interface_name: String,
        object_name: String,
        field_name: String,
        expected: TypeRef,
        found: TypeRef,
    },

    #[error(
        "{interface_name}.{field_name} expects argument \"{argument_name}\" but \
         {object_name}.{field_name} does not provide it."
    )]
    MissingInterfaceArgument {
        interface_name: String,
        object_name: String,
        field_name: String,
        argument_name: String,
    },

    #[error("\"{interface_name}\" expects field \"{field_name}\" but \"{object_name}\" does not provide it.")]
    MissingInterfaceField {
        interface_name: String,
        object_name: String,
        field_name: String,
    },

    #[error("Schema query must be Object Type but got: nil.")]
    MissingQueryRoot,

    #[error("Can only create NonNull of a Nullable GraphQLType but got: {inner}.")]
    NestedNonNull {
        owner: String,
        inner: TypeRef,
    },

    #[error("{owner} argument type must be Input Type but got: {argument_type}.")]
    NonInputArgumentType {
        owner: String,
        argument_type: TypeRef,
    },

    #[error("{type_name}.{field_name} field type must be Input Type but got: {field_type}.")]
    NonInputFieldType {
        type_name: String,
        field_name: String,
        field_type: TypeRef,
    },

    #[error("{type_name}.{field_name} field type must be Output Type but got: {field_type}.")]
    NonOutputFieldType {
        type_name: String,
        field_name: String,
        field_type: TypeRef,
    },

    #[error(transparent)]
    Parse(#[from] SyntaxError),

    #[error("Failed to load schema file: {0}")]
    ReadFile(#[from] ReadContentError),

    #[error("Name \"{0}\" must not begin with \"__\", which is reserved by GraphQL introspection.")]
    ReservedName(String),

    #[error("Schema {operation} must be Object Type but got: {type_name}.")]
    RootNotObject {
        operation: OperationType,
        type_name: String,
    },

    #[error("{owner} has invalid default value: {value}.")]
    UncoercibleDefault {
        owner: String,
        value: JsonValue,
    },

    #[error("Unknown directive location \"{location}\" on directive \"@{directive_name}\".")]
    UnknownDirectiveLocation {
        directive_name: String,
        location: String,
    },

    #[error("Cannot attach {hook} to \"{target}\": no such {expected}.")]
    UnknownResolverTarget {
        hook: &'static str,
        target: String,
        expected: &'static str,
    },

    #[error("Unknown type \"{type_name}\" referenced by {referenced_by}.")]
    UnknownType {
        type_name: String,
        referenced_by: String,
    },

    #[error("{union_name} may only contain Object types, it cannot contain: {member_name}.")]
    UnionMemberNotObject {
        union_name: String,
        member_name: String,
    },
}
