use crate::coercion::literal_to_json;
use crate::schema::SchemaBuildError;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::EnumValueDefinition;
use crate::types::FieldDefinition;
use crate::types::InputObjectType;
use crate::types::InputValueDefinition;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::UnionType;
use gqlengine_parser::ast;
use gqlengine_parser::ast::OperationType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// The reified content of one SDL document, before it is merged into a
/// [`SchemaBuilder`](crate::schema::SchemaBuilder).
#[derive(Default)]
pub(super) struct LoadedSdl {
    pub types: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub root_names: Vec<(OperationType, String)>,
    pub type_extensions: Vec<ast::ObjectTypeDefinition>,
}

pub(super) fn load_document(doc: &ast::Document) -> Result<LoadedSdl> {
    let mut loaded = LoadedSdl::default();
    if doc.operations().next().is_some() || doc.fragments().next().is_some() {
        log::warn!("ignoring executable definitions found in a schema document");
    }

    for def in doc.type_system_definitions() {
        match def {
            ast::TypeSystemDefinition::Schema(schema_def) => {
                for op_type in &schema_def.operation_types {
                    loaded.root_names.push((
                        op_type.operation,
                        op_type.named_type.name.value.to_string(),
                    ));
                }
            },

            ast::TypeSystemDefinition::Type(type_def) => {
                loaded.types.push(named_type(type_def));
            },

            ast::TypeSystemDefinition::TypeExtension(ext) => {
                loaded.type_extensions.push(ext.definition.clone());
            },

            ast::TypeSystemDefinition::Directive(directive_def) => {
                loaded.directives.push(directive(directive_def)?);
            },
        }
    }

    Ok(loaded)
}

fn named_type(type_def: &ast::TypeDefinition) -> NamedType {
    match type_def {
        ast::TypeDefinition::Scalar(def) => {
            let mut scalar = ScalarType::new(def.name.value.as_str());
            scalar.description = description(&def.description);
            scalar.into()
        },

        ast::TypeDefinition::Object(def) => object_type(def).into(),

        ast::TypeDefinition::Interface(def) => {
            let mut iface = InterfaceType::new(def.name.value.as_str());
            iface.description = description(&def.description);
            def.fields.iter()
                .fold(iface, |iface, field| iface.with_field(field_definition(field)))
                .into()
        },

        ast::TypeDefinition::Union(def) => {
            let mut union_type = UnionType::new(def.name.value.as_str());
            union_type.description = description(&def.description);
            def.types.iter()
                .fold(union_type, |union_type, member| {
                    union_type.with_member(member.name.value.as_str())
                })
                .into()
        },

        ast::TypeDefinition::Enum(def) => {
            let mut enum_type = EnumType::new(def.name.value.as_str());
            enum_type.description = description(&def.description);
            for value_def in &def.values {
                let mut value = EnumValueDefinition::new(value_def.name.value.as_str());
                value.description = description(&value_def.description);
                value.deprecation_reason = deprecation_reason(&value_def.directives);
                enum_type = enum_type.with_value(value);
            }
            enum_type.into()
        },

        ast::TypeDefinition::InputObject(def) => {
            let mut input_object = InputObjectType::new(def.name.value.as_str());
            input_object.description = description(&def.description);
            def.fields.iter()
                .fold(input_object, |input_object, field| {
                    input_object.with_field(input_value(field))
                })
                .into()
        },
    }
}

fn object_type(def: &ast::ObjectTypeDefinition) -> ObjectType {
    let mut object = ObjectType::new(def.name.value.as_str());
    object.description = description(&def.description);
    let object = def.interfaces.iter()
        .fold(object, |object, iface| object.with_interface(iface.name.value.as_str()));
    def.fields.iter()
        .fold(object, |object, field| object.with_field(field_definition(field)))
}

pub(super) fn field_definition(def: &ast::FieldDefinition) -> FieldDefinition {
    let mut field = FieldDefinition::new(
        def.name.value.as_str(),
        TypeRef::from_ast(&def.field_type),
    );
    field.description = description(&def.description);
    field.deprecation_reason = deprecation_reason(&def.directives);
    def.arguments.iter()
        .fold(field, |field, arg| field.with_argument(input_value(arg)))
}

fn input_value(def: &ast::InputValueDefinition) -> InputValueDefinition {
    let mut input_value = InputValueDefinition::new(
        def.name.value.as_str(),
        TypeRef::from_ast(&def.value_type),
    );
    input_value.description = description(&def.description);
    // A default containing a variable is dropped.
    input_value.default_value = def.default_value.as_ref().and_then(literal_to_json);
    input_value
}

fn directive(def: &ast::DirectiveDefinition) -> Result<Directive> {
    let mut directive = Directive::new(def.name.value.as_str());
    directive.description = description(&def.description);
    for location in &def.locations {
        let location: DirectiveLocation = location.value.parse().map_err(|_| {
            SchemaBuildError::UnknownDirectiveLocation {
                directive_name: def.name.value.to_string(),
                location: location.value.to_string(),
            }
        })?;
        directive = directive.with_location(location);
    }
    Ok(def.arguments.iter()
        .fold(directive, |directive, arg| directive.with_argument(input_value(arg))))
}

fn description(description: &Option<ast::StringValue>) -> Option<String> {
    description.as_ref().map(|desc| desc.value.to_string())
}

/// The reason given by an `@deprecated` annotation, if any.
fn deprecation_reason(directives: &[ast::Directive]) -> Option<String> {
    let deprecated = directives.iter().find(|d| d.name.value == "deprecated")?;
    let reason = deprecated.argument("reason").and_then(|arg| match &arg.value {
        ast::Value::String(reason) => Some(reason.value.to_string()),
        _ => None,
    });
    Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
}
