use crate::validation::Node;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Every spread fragment must be defined in the document.
#[derive(Default)]
pub struct KnownFragmentNames;

impl ValidationRule for KnownFragmentNames {
    fn enter<'a>(&mut self, ctx: &mut ValidationContext<'a>, node: Node<'a>) {
        if let Node::FragmentSpread(spread) = node {
            if ctx.fragment(spread.name.as_str()).is_none() {
                ctx.report_at(
                    format!("Unknown fragment \"{}\".", spread.name),
                    [spread.name.loc.as_ref()],
                );
            }
        }
    }
}
