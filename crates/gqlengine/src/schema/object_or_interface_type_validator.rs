use crate::coercion::TypeMap;
use crate::schema::SchemaBuildError;
use crate::schema::input_object_type_validator::check_argument;
use crate::schema::input_object_type_validator::check_type_ref;
use crate::types::FieldDefinition;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectType;
use indexmap::IndexMap;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<SchemaBuildError>,
    fields: &'a IndexMap<String, FieldDefinition>,
    interface_names: &'a [String],
    type_name: &'a str,
    types_map: &'a TypeMap,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn for_object(type_: &'a ObjectType, types_map: &'a TypeMap) -> Self {
        Self {
            errors: vec![],
            fields: type_.fields(),
            interface_names: type_.interfaces(),
            type_name: type_.name(),
            types_map,
        }
    }

    pub fn for_interface(type_: &'a InterfaceType, types_map: &'a TypeMap) -> Self {
        Self {
            errors: vec![],
            fields: type_.fields(),
            interface_names: &[],
            type_name: type_.name(),
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<SchemaBuildError> {
        if self.fields.is_empty() {
            self.errors.push(SchemaBuildError::EmptyFields {
                type_name: self.type_name.to_string(),
            });
        }

        for (field_name, field) in self.fields {
            let owner = format!("{}.{field_name}", self.type_name);
            let field_type = field.field_type();
            if let Some(err) = check_type_ref(self.types_map, &owner, field_type) {
                self.errors.push(err);
            } else {
                // All fields on an object or interface must have an output
                // type.
                let is_output_type = self.types_map.get(field_type.innermost_name())
                    .is_some_and(NamedType::is_output_type);
                if !is_output_type {
                    self.errors.push(SchemaBuildError::NonOutputFieldType {
                        type_name: self.type_name.to_string(),
                        field_name: field_name.to_string(),
                        field_type: field_type.to_owned(),
                    });
                }
            }

            for argument in field.arguments().values() {
                if let Some(err) = check_argument(self.types_map, &owner, argument) {
                    self.errors.push(err);
                }
            }
        }

        for iface_name in self.interface_names {
            let iface = match self.types_map.get(iface_name) {
                Some(NamedType::Interface(iface)) => iface,
                Some(other) => {
                    self.errors.push(SchemaBuildError::ImplementsNonInterface {
                        object_name: self.type_name.to_string(),
                        type_name: other.name().to_string(),
                    });
                    continue;
                },
                None => {
                    self.errors.push(SchemaBuildError::UnknownType {
                        type_name: iface_name.to_string(),
                        referenced_by: self.type_name.to_string(),
                    });
                    continue;
                },
            };
            self.validate_interface_impl(iface);
        }

        self.errors
    }

    fn validate_interface_impl(&mut self, iface: &InterfaceType) {
        let iface_name = iface.name();
        for (field_name, iface_field) in iface.fields() {
            let Some(type_field) = self.fields.get(field_name) else {
                self.errors.push(SchemaBuildError::MissingInterfaceField {
                    interface_name: iface_name.to_string(),
                    object_name: self.type_name.to_string(),
                    field_name: field_name.to_string(),
                });
                continue;
            };

            // Field types must match the interface exactly.
            if type_field.field_type() != iface_field.field_type() {
                self.errors.push(SchemaBuildError::InterfaceFieldTypeMismatch {
                    interface_name: iface_name.to_string(),
                    object_name: self.type_name.to_string(),
                    field_name: field_name.to_string(),
                    expected: iface_field.field_type().to_owned(),
                    found: type_field.field_type().to_owned(),
                });
            }

            // Every interface argument must be present with the same type.
            for (arg_name, iface_arg) in iface_field.arguments() {
                let Some(type_arg) = type_field.argument(arg_name) else {
                    self.errors.push(SchemaBuildError::MissingInterfaceArgument {
                        interface_name: iface_name.to_string(),
                        object_name: self.type_name.to_string(),
                        field_name: field_name.to_string(),
                        argument_name: arg_name.to_string(),
                    });
                    continue;
                };
                if type_arg.value_type() != iface_arg.value_type() {
                    self.errors.push(SchemaBuildError::InterfaceArgumentTypeMismatch {
                        interface_name: iface_name.to_string(),
                        object_name: self.type_name.to_string(),
                        field_name: field_name.to_string(),
                        argument_name: arg_name.to_string(),
                        expected: iface_arg.value_type().to_owned(),
                        found: type_arg.value_type().to_owned(),
                    });
                }
            }

            // Arguments the interface does not declare must be optional.
            for (arg_name, type_arg) in type_field.arguments() {
                if iface_field.argument(arg_name).is_none() && type_arg.value_type().is_non_null() {
                    self.errors.push(SchemaBuildError::ExtraRequiredArgument {
                        interface_name: iface_name.to_string(),
                        object_name: self.type_name.to_string(),
                        field_name: field_name.to_string(),
                        argument_name: arg_name.to_string(),
                        argument_type: type_arg.value_type().to_owned(),
                    });
                }
            }
        }
    }
}
