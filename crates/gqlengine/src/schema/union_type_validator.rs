use crate::coercion::TypeMap;
use crate::schema::SchemaBuildError;
use crate::types::NamedType;
use crate::types::UnionType;

pub(super) struct UnionTypeValidator<'a> {
    errors: Vec<SchemaBuildError>,
    type_: &'a UnionType,
    types_map: &'a TypeMap,
}
impl<'a> UnionTypeValidator<'a> {
    pub fn new(type_: &'a UnionType, types_map: &'a TypeMap) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<SchemaBuildError> {
        if self.type_.members().is_empty() {
            self.errors.push(SchemaBuildError::EmptyUnion(self.type_.name().to_string()));
        }

        for member_name in self.type_.members() {
            // Member types of a union can only be object types.
            match self.types_map.get(member_name) {
                Some(NamedType::Object(_)) => {},
                Some(_) => self.errors.push(SchemaBuildError::UnionMemberNotObject {
                    union_name: self.type_.name().to_string(),
                    member_name: member_name.to_string(),
                }),
                None => self.errors.push(SchemaBuildError::UnknownType {
                    type_name: member_name.to_string(),
                    referenced_by: self.type_.name().to_string(),
                }),
            }
        }

        self.errors
    }
}
