use crate::types::FieldDefinition;
use crate::types::NamedType;
use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlengine_parser::ast;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt;

/// Fields sharing a response key within a selection set (fragments
/// included) must be the same field, with the same arguments and
/// directives, returning the same type, and their sub-selections must merge
/// too.
#[derive(Default)]
pub struct OverlappingFieldsCanBeMerged {
    /// Field node pairs already compared, keyed by node address. Each pair
    /// is stored in both orders.
    compared_pairs: HashSet<(usize, usize)>,
}

impl ValidationRule for OverlappingFieldsCanBeMerged {
    fn leave<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::SelectionSet(selection_set) = node else {
            return;
        };

        let conflicts = {
            let mut merger = FieldMerger {
                ctx: &*ctx,
                compared_pairs: &mut self.compared_pairs,
            };
            let mut field_map = FieldMap::new();
            merger.collect(
                ctx.type_info().parent_type(),
                selection_set,
                &mut HashSet::new(),
                &mut field_map,
            );
            merger.find_conflicts(&field_map)
        };

        for conflict in conflicts {
            ctx.report_at(
                format!(
                    "Fields \"{}\" conflict because {}.",
                    conflict.response_name,
                    conflict.reason,
                ),
                conflict.fields.iter().map(|field| field.loc.as_ref()),
            );
        }
    }
}

type FieldMap<'a> = IndexMap<&'a str, Vec<FieldAndDef<'a>>>;

#[derive(Clone, Copy)]
struct FieldAndDef<'a> {
    field: &'a ast::Field,
    def: Option<&'a FieldDefinition>,
}

struct Conflict<'a> {
    response_name: String,
    reason: ConflictReason,
    fields: Vec<&'a ast::Field>,
}

enum ConflictReason {
    Message(String),
    Subfields(Vec<(String, ConflictReason)>),
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Subfields(subfields) => {
                for (idx, (name, reason)) in subfields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(f, "subfields \"{name}\" conflict because {reason}")?;
                }
                Ok(())
            },
        }
    }
}

struct FieldMerger<'a, 'c> {
    ctx: &'c ValidationContext<'a>,
    compared_pairs: &'c mut HashSet<(usize, usize)>,
}

impl<'a> FieldMerger<'a, '_> {
    /// Groups the fields of `selection_set` by response key, descending
    /// into inline fragments and (once each) into spread fragments.
    fn collect(
        &self,
        parent_type: Option<&'a NamedType>,
        selection_set: &'a ast::SelectionSet,
        visited_fragments: &mut HashSet<&'a str>,
        field_map: &mut FieldMap<'a>,
    ) {
        let schema = self.ctx.schema();
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    let def = parent_type
                        .and_then(|parent| schema.field_definition(parent, field.name.as_str()));
                    field_map.entry(field.response_key())
                        .or_default()
                        .push(FieldAndDef { field, def });
                },

                ast::Selection::InlineFragment(inline) => {
                    let fragment_type = match &inline.type_condition {
                        Some(cond) => schema.type_named(cond.name.as_str()),
                        None => parent_type,
                    };
                    self.collect(fragment_type, &inline.selection_set, visited_fragments, field_map);
                },

                ast::Selection::FragmentSpread(spread) => {
                    let name = spread.name.as_str();
                    if !visited_fragments.insert(name) {
                        continue;
                    }
                    let Some(frag) = self.ctx.fragment(name) else {
                        continue;
                    };
                    let fragment_type = schema.type_named(frag.type_condition.name.as_str());
                    self.collect(fragment_type, &frag.selection_set, visited_fragments, field_map);
                },
            }
        }
    }

    fn find_conflicts(&mut self, field_map: &FieldMap<'a>) -> Vec<Conflict<'a>> {
        let mut response_names: Vec<&str> = field_map.keys().copied().collect();
        response_names.sort_unstable();

        let mut conflicts = vec![];
        for response_name in response_names {
            let fields = &field_map[response_name];
            for field_a in fields {
                for field_b in fields {
                    if let Some(conflict) = self.find_conflict(response_name, *field_a, *field_b) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
        conflicts
    }

    fn find_conflict(
        &mut self,
        response_name: &str,
        pair_a: FieldAndDef<'a>,
        pair_b: FieldAndDef<'a>,
    ) -> Option<Conflict<'a>> {
        let (ast_a, ast_b) = (pair_a.field, pair_b.field);
        let key_a = ast_a as *const ast::Field as usize;
        let key_b = ast_b as *const ast::Field as usize;
        if key_a == key_b || self.compared_pairs.contains(&(key_a, key_b)) {
            return None;
        }
        self.compared_pairs.insert((key_a, key_b));
        self.compared_pairs.insert((key_b, key_a));

        let conflict = |reason: String| Conflict {
            response_name: response_name.to_string(),
            reason: ConflictReason::Message(reason),
            fields: vec![ast_a, ast_b],
        };

        if ast_a.name.value != ast_b.name.value {
            return Some(conflict(format!("{} and {} are different fields", ast_a.name, ast_b.name)));
        }

        let type_a = pair_a.def.map(FieldDefinition::field_type);
        let type_b = pair_b.def.map(FieldDefinition::field_type);
        if let (Some(type_a), Some(type_b)) = (type_a, type_b) {
            if type_a != type_b {
                return Some(conflict(format!("they return differing types {type_a} and {type_b}")));
            }
        }

        if !same_arguments(&ast_a.arguments, &ast_b.arguments) {
            return Some(conflict("they have differing arguments".to_string()));
        }
        if !same_directives(&ast_a.directives, &ast_b.directives) {
            return Some(conflict("they have differing directives".to_string()));
        }

        let (Some(selection_set_a), Some(selection_set_b)) = (&ast_a.selection_set, &ast_b.selection_set) else {
            return None;
        };
        let schema = self.ctx.schema();
        let mut visited_fragments = HashSet::new();
        let mut subfield_map = FieldMap::new();
        self.collect(
            type_a.and_then(|type_ref| schema.type_named(type_ref.innermost_name())),
            selection_set_a,
            &mut visited_fragments,
            &mut subfield_map,
        );
        self.collect(
            type_b.and_then(|type_ref| schema.type_named(type_ref.innermost_name())),
            selection_set_b,
            &mut visited_fragments,
            &mut subfield_map,
        );

        let sub_conflicts = self.find_conflicts(&subfield_map);
        if sub_conflicts.is_empty() {
            return None;
        }
        let mut fields = vec![ast_a, ast_b];
        let mut reasons = vec![];
        for sub_conflict in sub_conflicts {
            fields.extend(sub_conflict.fields);
            reasons.push((sub_conflict.response_name, sub_conflict.reason));
        }
        Some(Conflict {
            response_name: response_name.to_string(),
            reason: ConflictReason::Subfields(reasons),
            fields,
        })
    }
}

fn same_arguments(args_a: &[ast::Argument], args_b: &[ast::Argument]) -> bool {
    args_a.len() == args_b.len()
        && args_a.iter().all(|arg_a| {
            args_b.iter()
                .find(|arg_b| arg_b.name.value == arg_a.name.value)
                .is_some_and(|arg_b| arg_b.value.to_string() == arg_a.value.to_string())
        })
}

fn same_directives(directives_a: &[ast::Directive], directives_b: &[ast::Directive]) -> bool {
    directives_a.len() == directives_b.len()
        && directives_a.iter().all(|directive_a| {
            directives_b.iter()
                .find(|directive_b| directive_b.name.value == directive_a.name.value)
                .is_some_and(|directive_b| same_arguments(&directive_a.arguments, &directive_b.arguments))
        })
}
