//! Static query cost analysis.

use crate::schema::Schema;
use crate::types::NamedType;
use gqlengine_parser::ast;
use std::collections::HashMap;
use std::collections::HashSet;

/// Sums the [`cost`](crate::types::FieldDefinition::cost) of every field
/// the selected operation can reach, following inline fragments and
/// fragment spreads. Fields without a declared cost, and fields the schema
/// doesn't know, count zero. Each fragment is counted at most once per
/// spread chain, so cyclic fragments terminate.
///
/// Returns `None` if no operation matches `operation_name` (or if the
/// document holds several operations and no name is given).
pub fn query_complexity(
    schema: &Schema,
    document: &ast::Document,
    operation_name: Option<&str>,
) -> Option<u64> {
    let mut operations = document.operations();
    let operation = match operation_name {
        Some(name) => document.operations().find(|op| op.name_str() == Some(name))?,
        None => {
            let first = operations.next()?;
            if operations.next().is_some() {
                return None;
            }
            first
        },
    };
    let root_type = schema.root_type(operation.operation)?;

    let analyzer = CostAnalyzer {
        schema,
        fragments: document.fragments().map(|frag| (frag.name.as_str(), frag)).collect(),
    };
    let root_type = NamedType::Object(root_type.clone());
    Some(analyzer.selection_set_cost(&root_type, &operation.selection_set, &mut HashSet::new()))
}

struct CostAnalyzer<'a> {
    schema: &'a Schema,
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
}

impl<'a> CostAnalyzer<'a> {
    fn selection_set_cost(
        &self,
        parent_type: &NamedType,
        selection_set: &'a ast::SelectionSet,
        visiting: &mut HashSet<&'a str>,
    ) -> u64 {
        selection_set.selections
            .iter()
            .map(|selection| match selection {
                ast::Selection::Field(field) => self.field_cost(parent_type, field, visiting),

                ast::Selection::InlineFragment(inline) => {
                    let fragment_type = inline.type_condition.as_ref()
                        .and_then(|cond| self.schema.type_named(cond.name.as_str()))
                        .unwrap_or(parent_type);
                    self.selection_set_cost(fragment_type, &inline.selection_set, visiting)
                },

                ast::Selection::FragmentSpread(spread) => {
                    let name = spread.name.as_str();
                    let Some(fragment) = self.fragments.get(name) else {
                        return 0;
                    };
                    let Some(fragment_type) = self.schema.type_named(fragment.type_condition.name.as_str()) else {
                        return 0;
                    };
                    if !visiting.insert(name) {
                        return 0;
                    }
                    let cost = self.selection_set_cost(fragment_type, &fragment.selection_set, visiting);
                    visiting.remove(name);
                    cost
                },
            })
            .fold(0, u64::saturating_add)
    }

    fn field_cost(
        &self,
        parent_type: &NamedType,
        field: &'a ast::Field,
        visiting: &mut HashSet<&'a str>,
    ) -> u64 {
        let Some(field_def) = self.schema.field_definition(parent_type, field.name.as_str()) else {
            return 0;
        };
        let own_cost = field_def.cost().unwrap_or(0);
        let sub_cost = match (&field.selection_set, self.schema.type_named(field_def.field_type().innermost_name())) {
            (Some(selection_set), Some(field_type)) => {
                self.selection_set_cost(field_type, selection_set, visiting)
            },
            _ => 0,
        };
        own_cost.saturating_add(sub_cost)
    }
}
