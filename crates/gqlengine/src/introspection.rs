//! The introspection types (`__Schema`, `__Type`, ...) and the `__schema`,
//! `__type` and `__typename` meta-fields.
//!
//! Introspection objects are ordinary [`ObjectType`]s whose resolvers read
//! the schema through [`ResolveInfo::schema`]. A `__Type` value is an opaque
//! [`TypeRef`]; fields, arguments, enum values and directives are opaque
//! clones of their definitions.

use crate::coercion::TypeMap;
use crate::error::FieldError;
use crate::error::FieldResult;
use crate::execution::ResolveInfo;
use crate::execution::ResolveParams;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::EnumValueDefinition;
use crate::types::FieldDefinition;
use crate::types::InputValueDefinition;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::types::scalars;
use crate::value::Value;
use serde_json::Value as JsonValue;

pub(crate) const SCHEMA_FIELD: &str = "__schema";
pub(crate) const TYPE_FIELD: &str = "__type";
pub(crate) const TYPENAME_FIELD: &str = "__typename";

const SCHEMA_TYPE: &str = "__Schema";
const TYPE_TYPE: &str = "__Type";
const FIELD_TYPE: &str = "__Field";
const INPUT_VALUE_TYPE: &str = "__InputValue";
const ENUM_VALUE_TYPE: &str = "__EnumValue";
const DIRECTIVE_TYPE: &str = "__Directive";
const TYPE_KIND_TYPE: &str = "__TypeKind";
const DIRECTIVE_LOCATION_TYPE: &str = "__DirectiveLocation";

/// The introspection types every schema's type map is seeded from.
pub(crate) const ROOT_TYPE_NAMES: [&str; 2] = [SCHEMA_TYPE, TYPE_TYPE];

/// The fields every schema answers without declaring them.
pub(crate) struct MetaFields {
    pub schema: FieldDefinition,
    pub type_: FieldDefinition,
    pub typename: FieldDefinition,
}

impl MetaFields {
    pub fn new() -> Self {
        Self {
            schema: FieldDefinition::new(SCHEMA_FIELD, TypeRef::named_non_null(SCHEMA_TYPE))
                .with_description("Access the current type schema of this server.")
                .with_resolver(|_| Ok(Value::opaque(SchemaRoot))),

            type_: FieldDefinition::new(TYPE_FIELD, TypeRef::named(TYPE_TYPE))
                .with_description("Request the type information of a single type.")
                .with_argument(InputValueDefinition::new("name", TypeRef::named_non_null(scalars::STRING)))
                .with_resolver(|params| {
                    let name: String = params.args.get("name")?;
                    Ok(match params.info.schema.type_named(&name) {
                        Some(_) => type_value(TypeRef::named(name)),
                        None => Value::Null,
                    })
                }),

            typename: FieldDefinition::new(TYPENAME_FIELD, TypeRef::named_non_null(scalars::STRING))
                .with_description("The name of the current Object type at runtime.")
                .with_resolver(|params| Ok(Value::from(params.info.parent_type.name()))),
        }
    }
}

/// Source value of `__schema`; resolvers read the schema from `info`.
struct SchemaRoot;

fn type_value(type_ref: TypeRef) -> Value {
    Value::opaque(type_ref)
}

fn source<'a, T: 'static>(params: &ResolveParams<'a>) -> FieldResult<&'a T> {
    params.source.downcast_ref::<T>().ok_or_else(|| {
        FieldError::new(format!(
            "{}.{} resolved on an unexpected {}",
            params.info.parent_type.name(),
            params.info.field_name,
            params.source.type_description(),
        ))
    })
}

fn named_type<'s>(info: &ResolveInfo<'s>, type_ref: &TypeRef) -> Option<&'s NamedType> {
    match type_ref {
        TypeRef::Named(name) => info.schema.type_named(name),
        TypeRef::List(_) | TypeRef::NonNull(_) => None,
    }
}

fn include_deprecated(params: &ResolveParams<'_>) -> FieldResult<bool> {
    Ok(params.args.get::<Option<bool>>("includeDeprecated")?.unwrap_or(false))
}

fn list_of(name: &str) -> TypeRef {
    TypeRef::list(TypeRef::named_non_null(name))
}

fn non_null_list_of(name: &str) -> TypeRef {
    TypeRef::non_null(list_of(name))
}

fn include_deprecated_arg() -> InputValueDefinition {
    InputValueDefinition::new("includeDeprecated", TypeRef::named(scalars::BOOLEAN))
        .with_default_value(false)
}

/// Every introspection type, for registration in a schema under
/// construction.
pub(crate) fn types() -> Vec<NamedType> {
    vec![
        schema_type().into(),
        type_type().into(),
        field_type().into(),
        input_value_type().into(),
        enum_value_type().into(),
        directive_type().into(),
        type_kind_enum().into(),
        directive_location_enum().into(),
    ]
}

fn schema_type() -> ObjectType {
    ObjectType::new(SCHEMA_TYPE)
        .with_description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
             available types and directives on the server, as well as the entry points for \
             query, mutation, and subscription operations.",
        )
        .with_field(
            FieldDefinition::new("types", non_null_list_of(TYPE_TYPE))
                .with_description("A list of all types supported by this server.")
                .with_resolver(|params| {
                    Ok(Value::List(
                        params.info.schema.type_map()
                            .keys()
                            .map(|name| type_value(TypeRef::named(name.as_str())))
                            .collect(),
                    ))
                }),
        )
        .with_field(
            FieldDefinition::new("queryType", TypeRef::named_non_null(TYPE_TYPE))
                .with_description("The type that query operations will be rooted at.")
                .with_resolver(|params| {
                    Ok(type_value(TypeRef::named(params.info.schema.query_type().name())))
                }),
        )
        .with_field(
            FieldDefinition::new("mutationType", TypeRef::named(TYPE_TYPE))
                .with_description(
                    "If this server supports mutation, the type that mutation operations will be \
                     rooted at.",
                )
                .with_resolver(|params| {
                    Ok(params.info.schema.mutation_type()
                        .map(|root| type_value(TypeRef::named(root.name())))
                        .unwrap_or_default())
                }),
        )
        .with_field(
            FieldDefinition::new("subscriptionType", TypeRef::named(TYPE_TYPE))
                .with_description(
                    "If this server supports subscription, the type that subscription operations \
                     will be rooted at.",
                )
                .with_resolver(|params| {
                    Ok(params.info.schema.subscription_type()
                        .map(|root| type_value(TypeRef::named(root.name())))
                        .unwrap_or_default())
                }),
        )
        .with_field(
            FieldDefinition::new("directives", non_null_list_of(DIRECTIVE_TYPE))
                .with_description("A list of all directives supported by this server.")
                .with_resolver(|params| {
                    Ok(Value::List(
                        params.info.schema.directives()
                            .values()
                            .cloned()
                            .map(Value::opaque)
                            .collect(),
                    ))
                }),
        )
}

fn type_type() -> ObjectType {
    ObjectType::new(TYPE_TYPE)
        .with_description(
            "The fundamental unit of any GraphQL Schema is the type. There are many kinds of \
             types in GraphQL as represented by the `__TypeKind` enum.",
        )
        .with_field(
            FieldDefinition::new("kind", TypeRef::named_non_null(TYPE_KIND_TYPE))
                .with_resolver(|params| {
                    let type_ref = source::<TypeRef>(&params)?;
                    let kind = match type_ref {
                        TypeRef::NonNull(_) => TypeKind::NonNull,
                        TypeRef::List(_) => TypeKind::List,
                        TypeRef::Named(name) => params.info.schema.type_named(name)
                            .map(NamedType::kind)
                            .ok_or_else(|| FieldError::new(format!("Unknown type \"{name}\".")))?,
                    };
                    Ok(Value::from(kind.as_str()))
                }),
        )
        .with_field(
            FieldDefinition::new("name", TypeRef::named(scalars::STRING))
                .with_resolver(|params| {
                    Ok(match source::<TypeRef>(&params)? {
                        TypeRef::Named(name) => Value::from(name.as_str()),
                        TypeRef::List(_) | TypeRef::NonNull(_) => Value::Null,
                    })
                }),
        )
        .with_field(
            FieldDefinition::new("description", TypeRef::named(scalars::STRING))
                .with_resolver(|params| {
                    let named = named_type(params.info, source::<TypeRef>(&params)?);
                    Ok(Value::from(named.and_then(NamedType::description)))
                }),
        )
        .with_field(
            FieldDefinition::new("fields", list_of(FIELD_TYPE))
                .with_argument(include_deprecated_arg())
                .with_resolver(|params| {
                    let include_deprecated = include_deprecated(&params)?;
                    let named = named_type(params.info, source::<TypeRef>(&params)?);
                    let fields = match named {
                        Some(NamedType::Object(object)) => object.fields(),
                        Some(NamedType::Interface(iface)) => iface.fields(),
                        _ => return Ok(Value::Null),
                    };
                    Ok(Value::List(
                        fields.values()
                            .filter(|field| include_deprecated || !field.is_deprecated())
                            .cloned()
                            .map(Value::opaque)
                            .collect(),
                    ))
                }),
        )
        .with_field(
            FieldDefinition::new("interfaces", list_of(TYPE_TYPE))
                .with_resolver(|params| {
                    Ok(match named_type(params.info, source::<TypeRef>(&params)?) {
                        Some(NamedType::Object(object)) => Value::List(
                            object.interfaces()
                                .iter()
                                .map(|name| type_value(TypeRef::named(name.as_str())))
                                .collect(),
                        ),
                        _ => Value::Null,
                    })
                }),
        )
        .with_field(
            FieldDefinition::new("possibleTypes", list_of(TYPE_TYPE))
                .with_resolver(|params| {
                    Ok(match named_type(params.info, source::<TypeRef>(&params)?) {
                        Some(named) if named.is_abstract() => Value::List(
                            params.info.schema.possible_types(named.name())
                                .iter()
                                .map(|object| type_value(TypeRef::named(object.name())))
                                .collect(),
                        ),
                        _ => Value::Null,
                    })
                }),
        )
        .with_field(
            FieldDefinition::new("enumValues", list_of(ENUM_VALUE_TYPE))
                .with_argument(include_deprecated_arg())
                .with_resolver(|params| {
                    let include_deprecated = include_deprecated(&params)?;
                    Ok(match named_type(params.info, source::<TypeRef>(&params)?) {
                        Some(NamedType::Enum(enum_type)) => Value::List(
                            enum_type.values()
                                .values()
                                .filter(|value| include_deprecated || !value.is_deprecated())
                                .cloned()
                                .map(Value::opaque)
                                .collect(),
                        ),
                        _ => Value::Null,
                    })
                }),
        )
        .with_field(
            FieldDefinition::new("inputFields", list_of(INPUT_VALUE_TYPE))
                .with_resolver(|params| {
                    Ok(match named_type(params.info, source::<TypeRef>(&params)?) {
                        Some(NamedType::InputObject(input_object)) => Value::List(
                            input_object.fields()
                                .values()
                                .cloned()
                                .map(Value::opaque)
                                .collect(),
                        ),
                        _ => Value::Null,
                    })
                }),
        )
        .with_field(
            FieldDefinition::new("ofType", TypeRef::named(TYPE_TYPE))
                .with_resolver(|params| {
                    Ok(match source::<TypeRef>(&params)? {
                        TypeRef::List(inner) | TypeRef::NonNull(inner) => type_value(inner.as_ref().clone()),
                        TypeRef::Named(_) => Value::Null,
                    })
                }),
        )
}

fn field_type() -> ObjectType {
    ObjectType::new(FIELD_TYPE)
        .with_description(
            "Object and Interface types are described by a list of Fields, each of which has a \
             name, potentially a list of arguments, and a return type.",
        )
        .with_field(
            FieldDefinition::new("name", TypeRef::named_non_null(scalars::STRING))
                .with_resolver(|params| Ok(Value::from(source::<FieldDefinition>(&params)?.name()))),
        )
        .with_field(
            FieldDefinition::new("description", TypeRef::named(scalars::STRING))
                .with_resolver(|params| {
                    Ok(Value::from(source::<FieldDefinition>(&params)?.description()))
                }),
        )
        .with_field(
            FieldDefinition::new("args", non_null_list_of(INPUT_VALUE_TYPE))
                .with_resolver(|params| {
                    Ok(Value::List(
                        source::<FieldDefinition>(&params)?.arguments()
                            .values()
                            .cloned()
                            .map(Value::opaque)
                            .collect(),
                    ))
                }),
        )
        .with_field(
            FieldDefinition::new("type", TypeRef::named_non_null(TYPE_TYPE))
                .with_resolver(|params| {
                    Ok(type_value(source::<FieldDefinition>(&params)?.field_type().clone()))
                }),
        )
        .with_field(
            FieldDefinition::new("isDeprecated", TypeRef::named_non_null(scalars::BOOLEAN))
                .with_resolver(|params| {
                    Ok(Value::from(source::<FieldDefinition>(&params)?.is_deprecated()))
                }),
        )
        .with_field(
            FieldDefinition::new("deprecationReason", TypeRef::named(scalars::STRING))
                .with_resolver(|params| {
                    Ok(Value::from(source::<FieldDefinition>(&params)?.deprecation_reason()))
                }),
        )
}

fn input_value_type() -> ObjectType {
    ObjectType::new(INPUT_VALUE_TYPE)
        .with_description(
            "Arguments provided to Fields or Directives and the input fields of an InputObject \
             are represented as Input Values which describe their type and optionally a default \
             value.",
        )
        .with_field(
            FieldDefinition::new("name", TypeRef::named_non_null(scalars::STRING))
                .with_resolver(|params| {
                    Ok(Value::from(source::<InputValueDefinition>(&params)?.name()))
                }),
        )
        .with_field(
            FieldDefinition::new("description", TypeRef::named(scalars::STRING))
                .with_resolver(|params| {
                    Ok(Value::from(source::<InputValueDefinition>(&params)?.description()))
                }),
        )
        .with_field(
            FieldDefinition::new("type", TypeRef::named_non_null(TYPE_TYPE))
                .with_resolver(|params| {
                    Ok(type_value(source::<InputValueDefinition>(&params)?.value_type().clone()))
                }),
        )
        .with_field(
            FieldDefinition::new("defaultValue", TypeRef::named(scalars::STRING))
                .with_description(
                    "A GraphQL-formatted string representing the default value for this input \
                     value.",
                )
                .with_resolver(|params| {
                    let input_value = source::<InputValueDefinition>(&params)?;
                    Ok(Value::from(input_value.default_value().map(|default| {
                        print_literal(params.info.schema.type_map(), default, input_value.value_type())
                    })))
                }),
        )
}

fn enum_value_type() -> ObjectType {
    ObjectType::new(ENUM_VALUE_TYPE)
        .with_description(
            "One possible value for a given Enum. Enum values are unique values, not a \
             placeholder for a string or numeric value.",
        )
        .with_field(
            FieldDefinition::new("name", TypeRef::named_non_null(scalars::STRING))
                .with_resolver(|params| {
                    Ok(Value::from(source::<EnumValueDefinition>(&params)?.name()))
                }),
        )
        .with_field(
            FieldDefinition::new("description", TypeRef::named(scalars::STRING))
                .with_resolver(|params| {
                    Ok(Value::from(source::<EnumValueDefinition>(&params)?.description()))
                }),
        )
        .with_field(
            FieldDefinition::new("isDeprecated", TypeRef::named_non_null(scalars::BOOLEAN))
                .with_resolver(|params| {
                    Ok(Value::from(source::<EnumValueDefinition>(&params)?.is_deprecated()))
                }),
        )
        .with_field(
            FieldDefinition::new("deprecationReason", TypeRef::named(scalars::STRING))
                .with_resolver(|params| {
                    Ok(Value::from(source::<EnumValueDefinition>(&params)?.deprecation_reason()))
                }),
        )
}

fn directive_type() -> ObjectType {
    ObjectType::new(DIRECTIVE_TYPE)
        .with_description(
            "A Directive provides a way to describe alternate runtime execution and type \
             validation behavior in a GraphQL document.",
        )
        .with_field(
            FieldDefinition::new("name", TypeRef::named_non_null(scalars::STRING))
                .with_resolver(|params| Ok(Value::from(source::<Directive>(&params)?.name()))),
        )
        .with_field(
            FieldDefinition::new("description", TypeRef::named(scalars::STRING))
                .with_resolver(|params| {
                    Ok(Value::from(source::<Directive>(&params)?.description()))
                }),
        )
        .with_field(
            FieldDefinition::new("locations", non_null_list_of(DIRECTIVE_LOCATION_TYPE))
                .with_resolver(|params| {
                    Ok(Value::List(
                        source::<Directive>(&params)?.locations()
                            .iter()
                            .map(|location| Value::from(location.as_str()))
                            .collect(),
                    ))
                }),
        )
        .with_field(
            FieldDefinition::new("args", non_null_list_of(INPUT_VALUE_TYPE))
                .with_resolver(|params| {
                    Ok(Value::List(
                        source::<Directive>(&params)?.arguments()
                            .values()
                            .cloned()
                            .map(Value::opaque)
                            .collect(),
                    ))
                }),
        )
}

fn type_kind_enum() -> EnumType {
    TypeKind::ALL.into_iter().fold(
        EnumType::new(TYPE_KIND_TYPE)
            .with_description("An enum describing what kind of type a given `__Type` is."),
        |enum_type, kind| enum_type.with_value(EnumValueDefinition::new(kind.as_str())),
    )
}

fn directive_location_enum() -> EnumType {
    DirectiveLocation::ALL.into_iter().fold(
        EnumType::new(DIRECTIVE_LOCATION_TYPE).with_description(
            "A Directive can be adjacent to many parts of the GraphQL language, a \
             __DirectiveLocation describes one such possible adjacencies.",
        ),
        |enum_type, location| enum_type.with_value(EnumValueDefinition::new(location.as_str())),
    )
}

/// Prints an external input value as a GraphQL literal, e.g. for
/// `__InputValue.defaultValue`. Enum values print bare.
pub(crate) fn print_literal(types: &TypeMap, value: &JsonValue, value_type: &TypeRef) -> String {
    match (value_type, value) {
        (_, JsonValue::Null) => "null".to_string(),
        (TypeRef::NonNull(inner), _) => print_literal(types, value, inner),
        (TypeRef::List(item_type), JsonValue::Array(items)) => {
            let items: Vec<String> = items.iter()
                .map(|item| print_literal(types, item, item_type))
                .collect();
            format!("[{}]", items.join(", "))
        },
        (TypeRef::List(item_type), single) => print_literal(types, single, item_type),
        (TypeRef::Named(name), value) => match (types.get(name), value) {
            (Some(NamedType::Enum(_)), JsonValue::String(enum_name)) => enum_name.clone(),
            (Some(NamedType::InputObject(input_object)), JsonValue::Object(obj)) => {
                let fields: Vec<String> = obj.iter()
                    .map(|(field_name, field_value)| {
                        let printed = match input_object.field(field_name) {
                            Some(field_def) => print_literal(types, field_value, field_def.value_type()),
                            None => field_value.to_string(),
                        };
                        format!("{field_name}: {printed}")
                    })
                    .collect();
                format!("{{{}}}", fields.join(", "))
            },
            (_, other) => other.to_string(),
        },
    }
}
