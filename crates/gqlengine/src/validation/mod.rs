//! Static validation of executable documents against a schema.
//!
//! [`validate`] walks the document once. Each rule observes every node as
//! it is entered and left, alongside a shared [`TypeInfo`] that knows the
//! schema types in scope. Rules never stop the walk; every problem found is
//! reported.

pub mod rules;
mod type_info;
mod validation_context;
mod visitor;

pub use type_info::TypeInfo;
pub use validation_context::ValidationContext;
pub use validation_context::VariableUsage;
pub use visitor::Node;

use crate::error::GraphQLError;
use crate::schema::Schema;
use gqlengine_parser::ast;
use visitor::Visitor;
use visitor::walk;

/// One validation rule. A fresh instance is created for every validation
/// run, so rules may keep whatever state they need across nodes.
pub trait ValidationRule {
    fn enter<'a>(&mut self, _ctx: &mut ValidationContext<'a>, _node: Node<'a>) {}

    fn leave<'a>(&mut self, _ctx: &mut ValidationContext<'a>, _node: Node<'a>) {}
}

/// Creates an instance of a rule.
pub type RuleFactory = fn() -> Box<dyn ValidationRule>;

/// The rules [`validate`] runs, in reporting order.
pub fn specified_rules() -> Vec<RuleFactory> {
    use rules::*;
    vec![
        rule::<UniqueOperationNames> as RuleFactory,
        rule::<LoneAnonymousOperation>,
        rule::<KnownTypeNames>,
        rule::<FragmentsOnCompositeTypes>,
        rule::<VariablesAreInputTypes>,
        rule::<ScalarLeafs>,
        rule::<FieldsOnCorrectType>,
        rule::<UniqueFragmentNames>,
        rule::<KnownFragmentNames>,
        rule::<NoUnusedFragments>,
        rule::<PossibleFragmentSpreads>,
        rule::<NoFragmentCycles>,
        rule::<NoUndefinedVariables>,
        rule::<NoUnusedVariables>,
        rule::<KnownDirectives>,
        rule::<KnownArgumentNames>,
        rule::<UniqueArgumentNames>,
        rule::<ArgumentsOfCorrectType>,
        rule::<ProvidedNonNullArguments>,
        rule::<DefaultValuesOfCorrectType>,
        rule::<VariablesInAllowedPosition>,
        rule::<OverlappingFieldsCanBeMerged>,
    ]
}

/// A [`RuleFactory`] for any rule with a default starting state.
pub fn rule<R: ValidationRule + Default + 'static>() -> Box<dyn ValidationRule> {
    Box::new(R::default())
}

/// Validates `document` against `schema` with [`specified_rules`]. An
/// empty result means the document is valid.
pub fn validate(schema: &Schema, document: &ast::Document) -> Vec<GraphQLError> {
    validate_with_rules(schema, document, &specified_rules())
}

/// Validates `document` with an explicit rule set.
pub fn validate_with_rules(
    schema: &Schema,
    document: &ast::Document,
    rules: &[RuleFactory],
) -> Vec<GraphQLError> {
    let mut visitor = RuleVisitor {
        ctx: ValidationContext::new(schema, document),
        rules: rules.iter().map(|make_rule| make_rule()).collect(),
    };
    walk(&mut visitor, Node::Document(document));
    visitor.ctx.errors
}

struct RuleVisitor<'a> {
    ctx: ValidationContext<'a>,
    rules: Vec<Box<dyn ValidationRule>>,
}

impl<'a> Visitor<'a> for RuleVisitor<'a> {
    fn type_info(&mut self) -> &mut TypeInfo<'a> {
        &mut self.ctx.type_info
    }

    fn enter(&mut self, node: Node<'a>) {
        for rule in &mut self.rules {
            rule.enter(&mut self.ctx, node);
        }
    }

    fn leave(&mut self, node: Node<'a>) {
        for rule in &mut self.rules {
            rule.leave(&mut self.ctx, node);
        }
    }
}

#[cfg(test)]
mod tests;
