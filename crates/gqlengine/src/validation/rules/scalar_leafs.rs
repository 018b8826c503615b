use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Leaf fields must not have a selection set; composite fields must.
#[derive(Default)]
pub struct ScalarLeafs;

impl ValidationRule for ScalarLeafs {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::Field(field) = node else {
            return;
        };
        let type_info = ctx.type_info();
        let Some(field_type) = type_info.output_type() else {
            return;
        };
        let Some(named_type) = type_info.named_type(field_type) else {
            return;
        };
        let field_type = field_type.clone();

        match &field.selection_set {
            Some(selection_set) if named_type.is_leaf() => ctx.report_at(
                format!("Field \"{}\" of type \"{field_type}\" must not have a sub selection.", field.name),
                [selection_set.loc.as_ref()],
            ),
            None if !named_type.is_leaf() => ctx.report_at(
                format!("Field \"{}\" of type \"{field_type}\" must have a sub selection.", field.name),
                [field.loc.as_ref()],
            ),
            _ => {},
        }
    }
}
