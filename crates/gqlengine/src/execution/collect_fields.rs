use crate::coercion::Variables;
use crate::coercion::value_from_ast;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::types::scalars;
use gqlengine_parser::ast;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fields grouped by response key, in the order each key first appears.
pub(crate) type GroupedFields<'a> = IndexMap<&'a str, Vec<&'a ast::Field>>;

/// Collects the fields of `selection_sets` that apply to `runtime_type`,
/// expanding fragments and honoring `@skip`/`@include`.
///
/// Each named fragment is expanded at most once per call, so fragment
/// cycles terminate.
pub(crate) fn collect_fields<'a>(
    schema: &Schema,
    fragments: &HashMap<&'a str, &'a ast::FragmentDefinition>,
    variables: &Variables,
    runtime_type: &ObjectType,
    selection_sets: impl IntoIterator<Item = &'a ast::SelectionSet>,
) -> GroupedFields<'a> {
    let mut collector = FieldCollector {
        schema,
        fragments,
        variables,
        runtime_type,
        fields: IndexMap::new(),
        visited_fragments: HashSet::new(),
    };
    for selection_set in selection_sets {
        collector.collect(selection_set);
    }
    collector.fields
}

struct FieldCollector<'a, 'b> {
    schema: &'b Schema,
    fragments: &'b HashMap<&'a str, &'a ast::FragmentDefinition>,
    variables: &'b Variables,
    runtime_type: &'b ObjectType,
    fields: GroupedFields<'a>,
    visited_fragments: HashSet<&'a str>,
}

impl<'a> FieldCollector<'a, '_> {
    fn collect(&mut self, selection_set: &'a ast::SelectionSet) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    if !should_include_node(self.schema, self.variables, &field.directives) {
                        continue;
                    }
                    self.fields.entry(field.response_key())
                        .or_default()
                        .push(field);
                },

                ast::Selection::InlineFragment(inline) => {
                    if !should_include_node(self.schema, self.variables, &inline.directives) {
                        continue;
                    }
                    let condition = inline.type_condition.as_ref().map(|named| named.name.as_str());
                    if !does_fragment_condition_match(self.schema, condition, self.runtime_type) {
                        continue;
                    }
                    self.collect(&inline.selection_set);
                },

                ast::Selection::FragmentSpread(spread) => {
                    let name = spread.name.as_str();
                    if !self.visited_fragments.insert(name) {
                        continue;
                    }
                    if !should_include_node(self.schema, self.variables, &spread.directives) {
                        continue;
                    }
                    let Some(fragment) = self.fragments.get(name).copied() else {
                        continue;
                    };
                    let condition = Some(fragment.type_condition.name.as_str());
                    if !does_fragment_condition_match(self.schema, condition, self.runtime_type) {
                        continue;
                    }
                    self.collect(&fragment.selection_set);
                },
            }
        }
    }
}

/// Evaluates `@skip` and `@include`. `@skip(if: true)` wins over
/// `@include(if: true)`.
pub(crate) fn should_include_node(
    schema: &Schema,
    variables: &Variables,
    directives: &[ast::Directive],
) -> bool {
    let condition = |directive_name: &str| -> Option<bool> {
        let directive = directives.iter().find(|dir| dir.name.value == directive_name)?;
        let if_arg = directive.argument("if")?;
        let value = value_from_ast(
            schema.type_map(),
            &if_arg.value,
            &TypeRef::named_non_null(scalars::BOOLEAN),
            Some(variables),
        )?;
        match value {
            JsonValue::Bool(b) => Some(b),
            _ => None,
        }
    };

    if condition("skip") == Some(true) {
        return false;
    }
    condition("include") != Some(false)
}

/// `true` if a fragment with the given type condition applies to objects of
/// `runtime_type`. A missing condition always applies.
pub(crate) fn does_fragment_condition_match(
    schema: &Schema,
    condition: Option<&str>,
    runtime_type: &ObjectType,
) -> bool {
    let Some(condition) = condition else {
        return true;
    };
    if condition == runtime_type.name() {
        return true;
    }
    schema.type_named(condition)
        .is_some_and(|named| named.is_abstract() && schema.is_possible_type(condition, runtime_type.name()))
}
