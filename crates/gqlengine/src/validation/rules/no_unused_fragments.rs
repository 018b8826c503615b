use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashSet;

/// Every fragment defined must be spread, directly or indirectly, by some
/// operation.
#[derive(Default)]
pub struct NoUnusedFragments;

impl ValidationRule for NoUnusedFragments {
    fn leave<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        let Node::Document(doc) = node else {
            return;
        };
        let used: HashSet<&str> = doc.operations()
            .flat_map(|op| ctx.recursively_referenced_fragments(op))
            .map(|frag| frag.name.as_str())
            .collect();
        for frag in doc.fragments() {
            if !used.contains(frag.name.as_str()) {
                ctx.report_at(
                    format!("Fragment \"{}\" is never used.", frag.name),
                    [frag.loc.as_ref()],
                );
            }
        }
    }
}
