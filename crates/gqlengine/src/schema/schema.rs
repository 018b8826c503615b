use crate::coercion::TypeMap;
use crate::execution::FieldNameConvention;
use crate::extensions::Extension;
use crate::introspection;
use crate::types::Directive;
use crate::types::FieldDefinition;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use gqlengine_parser::ast::OperationType;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A built, immutable GraphQL schema.
///
/// Construct one with [`SchemaBuilder`](crate::schema::SchemaBuilder). A
/// `Schema` is `Send + Sync` and is meant to be shared (typically behind an
/// `Arc`) by every request for the lifetime of the process.
pub struct Schema {
    pub(crate) types: TypeMap,
    pub(crate) query_type: Arc<ObjectType>,
    pub(crate) mutation_type: Option<Arc<ObjectType>>,
    pub(crate) subscription_type: Option<Arc<ObjectType>>,
    pub(crate) directives: IndexMap<String, Directive>,
    pub(crate) possible_types: HashMap<String, Vec<Arc<ObjectType>>>,
    pub(crate) extensions: Vec<Arc<dyn Extension>>,
    pub(crate) field_name_convention: FieldNameConvention,
    pub(crate) meta_fields: introspection::MetaFields,
}

impl Schema {
    /// Looks up a named type.
    pub fn type_named(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    /// Every named type in the schema (built-ins and introspection types
    /// included), roots first.
    pub fn type_map(&self) -> &TypeMap {
        &self.types
    }

    pub fn query_type(&self) -> &Arc<ObjectType> {
        &self.query_type
    }

    pub fn mutation_type(&self) -> Option<&Arc<ObjectType>> {
        self.mutation_type.as_ref()
    }

    pub fn subscription_type(&self) -> Option<&Arc<ObjectType>> {
        self.subscription_type.as_ref()
    }

    pub fn root_type(&self, operation: OperationType) -> Option<&Arc<ObjectType>> {
        match operation {
            OperationType::Query => Some(&self.query_type),
            OperationType::Mutation => self.mutation_type.as_ref(),
            OperationType::Subscription => self.subscription_type.as_ref(),
        }
    }

    pub fn directives(&self) -> &IndexMap<String, Directive> {
        &self.directives
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    pub fn extensions(&self) -> &[Arc<dyn Extension>] {
        &self.extensions
    }

    pub fn field_name_convention(&self) -> FieldNameConvention {
        self.field_name_convention
    }

    /// The object types a value of abstract type `abstract_name` may have at
    /// runtime: union members, or the implementors of an interface.
    pub fn possible_types(&self, abstract_name: &str) -> &[Arc<ObjectType>] {
        self.possible_types.get(abstract_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_possible_type(&self, abstract_name: &str, object_name: &str) -> bool {
        self.possible_types(abstract_name)
            .iter()
            .any(|object| object.name() == object_name)
    }

    /// Looks up a field on a composite parent type, including the
    /// introspection meta-fields: `__typename` on every composite type,
    /// `__schema` and `__type` on the query root only.
    pub fn field_definition<'s>(
        &'s self,
        parent: &'s NamedType,
        field_name: &str,
    ) -> Option<&'s FieldDefinition> {
        if field_name == introspection::TYPENAME_FIELD && parent.is_composite() {
            return Some(&self.meta_fields.typename);
        }
        if let NamedType::Object(object) = parent {
            if object.name() == self.query_type.name() {
                match field_name {
                    introspection::SCHEMA_FIELD => return Some(&self.meta_fields.schema),
                    introspection::TYPE_FIELD => return Some(&self.meta_fields.type_),
                    _ => {},
                }
            }
        }
        parent.fields()?.get(field_name)
    }

    /// Like [`field_definition`](Self::field_definition), for a concrete
    /// object type.
    pub fn object_field<'s>(
        &'s self,
        object: &'s ObjectType,
        field_name: &str,
    ) -> Option<&'s FieldDefinition> {
        match field_name {
            introspection::TYPENAME_FIELD => Some(&self.meta_fields.typename),
            introspection::SCHEMA_FIELD if object.name() == self.query_type.name() => {
                Some(&self.meta_fields.schema)
            },
            introspection::TYPE_FIELD if object.name() == self.query_type.name() => {
                Some(&self.meta_fields.type_)
            },
            _ => object.field(field_name),
        }
    }

    /// `true` if the type reference names an input type (scalar, enum or
    /// input object) that exists in this schema.
    pub fn is_input_type(&self, type_ref: &TypeRef) -> bool {
        self.types.get(type_ref.innermost_name())
            .is_some_and(NamedType::is_input_type)
    }

    pub fn is_output_type(&self, type_ref: &TypeRef) -> bool {
        self.types.get(type_ref.innermost_name())
            .is_some_and(NamedType::is_output_type)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("query_type", &self.query_type.name())
            .field("mutation_type", &self.mutation_type.as_ref().map(|t| t.name()))
            .field("subscription_type", &self.subscription_type.as_ref().map(|t| t.name()))
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .field("directives", &self.directives.keys().collect::<Vec<_>>())
            .field("extensions", &self.extensions.iter().map(|ext| ext.name()).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
