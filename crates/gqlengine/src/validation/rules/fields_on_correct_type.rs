use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Every selected field must be defined on its parent type. Unions only
/// define `__typename`.
#[derive(Default)]
pub struct FieldsOnCorrectType;

impl ValidationRule for FieldsOnCorrectType {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::Field(field) = node else {
            return;
        };
        let type_info = ctx.type_info();
        let Some(parent_type) = type_info.parent_type() else {
            return;
        };
        if type_info.field_def().is_none() {
            ctx.report_at(
                format!("Cannot query field \"{}\" on \"{}\".", field.name, parent_type.name()),
                [field.loc.as_ref()],
            );
        }
    }
}
