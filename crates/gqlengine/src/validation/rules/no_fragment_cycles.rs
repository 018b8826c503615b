use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use gqlengine_parser::ast;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fragments must not spread themselves, directly or through other
/// fragments. Each cycle is reported once, at every spread along it.
#[derive(Default)]
pub struct NoFragmentCycles {
    visited_fragments: HashSet<String>,
}

impl ValidationRule for NoFragmentCycles {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::FragmentDefinition(frag) = node else {
            return;
        };
        let mut detector = CycleDetector {
            visited_fragments: &mut self.visited_fragments,
            spread_path: vec![],
            spread_path_index_by_name: HashMap::new(),
        };
        detector.detect(ctx, frag);
    }
}

struct CycleDetector<'a, 'r> {
    visited_fragments: &'r mut HashSet<String>,
    spread_path: Vec<&'a ast::FragmentSpread>,
    spread_path_index_by_name: HashMap<&'a str, usize>,
}

impl<'a> CycleDetector<'a, '_> {
    fn detect(&mut self, ctx: &mut ValidationContext<'a>, frag: &'a ast::FragmentDefinition) {
        let frag_name = frag.name.as_str();
        if !self.visited_fragments.insert(frag_name.to_string()) {
            return;
        }

        let spreads = ctx.fragment_spreads(&frag.selection_set);
        if spreads.is_empty() {
            return;
        }

        self.spread_path_index_by_name.insert(frag_name, self.spread_path.len());
        for spread in spreads {
            let spread_name = spread.name.as_str();
            let cycle_index = self.spread_path_index_by_name.get(spread_name).copied();
            self.spread_path.push(spread);

            match cycle_index {
                None => {
                    if let Some(spread_frag) = ctx.fragment(spread_name) {
                        self.detect(ctx, spread_frag);
                    }
                },
                Some(index) => {
                    let cycle_path = &self.spread_path[index..];
                    let via = cycle_path[..cycle_path.len() - 1]
                        .iter()
                        .map(|spread| spread.name.as_str())
                        .collect::<Vec<_>>();
                    let message = if via.is_empty() {
                        format!("Cannot spread fragment \"{spread_name}\" within itself.")
                    } else {
                        format!(
                            "Cannot spread fragment \"{spread_name}\" within itself via {}.",
                            via.join(", "),
                        )
                    };
                    ctx.report_at(message, cycle_path.iter().map(|spread| spread.loc.as_ref()));
                },
            }

            self.spread_path.pop();
        }
        self.spread_path_index_by_name.remove(frag_name);
    }
}
