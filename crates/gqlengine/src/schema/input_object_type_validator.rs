use crate::coercion::TypeMap;
use crate::coercion::coerce_input_value;
use crate::schema::SchemaBuildError;
use crate::types::InputObjectType;
use crate::types::InputValueDefinition;
use crate::types::TypeRef;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<SchemaBuildError>,
    type_: &'a InputObjectType,
    types_map: &'a TypeMap,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(type_: &'a InputObjectType, types_map: &'a TypeMap) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<SchemaBuildError> {
        let type_name = self.type_.name();
        if self.type_.fields().is_empty() {
            self.errors.push(SchemaBuildError::EmptyFields {
                type_name: type_name.to_string(),
            });
        }

        for (field_name, field) in self.type_.fields() {
            let owner = format!("{type_name}.{field_name}");
            let field_type = field.value_type();
            if let Some(err) = check_type_ref(self.types_map, &owner, field_type) {
                self.errors.push(err);
                continue;
            }

            // Input object fields can only hold input types.
            let is_input_type = self.types_map.get(field_type.innermost_name())
                .is_some_and(|named| named.is_input_type());
            if !is_input_type {
                self.errors.push(SchemaBuildError::NonInputFieldType {
                    type_name: type_name.to_string(),
                    field_name: field_name.to_string(),
                    field_type: field_type.to_owned(),
                });
                continue;
            }

            if let Some(err) = check_default_value(self.types_map, &owner, field) {
                self.errors.push(err);
            }
        }

        self.errors
    }
}

/// Verifies that a type reference names a defined type and never nests a
/// non-null directly inside another.
pub(super) fn check_type_ref(
    types_map: &TypeMap,
    owner: &str,
    type_ref: &TypeRef,
) -> Option<SchemaBuildError> {
    if let Some(TypeRef::NonNull(inner)) = type_ref.find_nested_non_null() {
        return Some(SchemaBuildError::NestedNonNull {
            owner: owner.to_string(),
            inner: inner.as_ref().to_owned(),
        });
    }
    let type_name = type_ref.innermost_name();
    if !types_map.contains_key(type_name) {
        return Some(SchemaBuildError::UnknownType {
            type_name: type_name.to_string(),
            referenced_by: owner.to_string(),
        });
    }
    None
}

/// Checks a field or directive argument: its type must be a defined input
/// type and its default, if any, must coerce to that type.
pub(super) fn check_argument(
    types_map: &TypeMap,
    owner: &str,
    argument: &InputValueDefinition,
) -> Option<SchemaBuildError> {
    let owner = format!("{owner}({}:)", argument.name());
    let arg_type = argument.value_type();
    if let Some(err) = check_type_ref(types_map, &owner, arg_type) {
        return Some(err);
    }
    let is_input_type = types_map.get(arg_type.innermost_name())
        .is_some_and(|named| named.is_input_type());
    if !is_input_type {
        return Some(SchemaBuildError::NonInputArgumentType {
            owner,
            argument_type: arg_type.to_owned(),
        });
    }
    check_default_value(types_map, &owner, argument)
}

fn check_default_value(
    types_map: &TypeMap,
    owner: &str,
    input_value: &InputValueDefinition,
) -> Option<SchemaBuildError> {
    let default = input_value.default_value()?;
    match coerce_input_value(types_map, default, input_value.value_type()) {
        Some(_) => None,
        None => Some(SchemaBuildError::UncoercibleDefault {
            owner: owner.to_string(),
            value: default.to_owned(),
        }),
    }
}
