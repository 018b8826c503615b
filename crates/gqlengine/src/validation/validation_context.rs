use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::types::TypeRef;
use crate::validation::Node;
use crate::validation::TypeInfo;
use crate::validation::visitor::Visitor;
use crate::validation::visitor::walk;
use gqlengine_parser::Location;
use gqlengine_parser::ast;
use std::collections::HashMap;
use std::collections::HashSet;

/// A variable referenced somewhere in an operation or in one of the
/// fragments it spreads.
#[derive(Clone, Debug)]
pub struct VariableUsage<'a> {
    pub variable: &'a ast::Variable,
    /// The type expected where the variable appears, if known.
    pub input_type: Option<TypeRef>,
    /// `true` if the usage sits inside a fragment definition rather than in
    /// the operation itself.
    pub in_fragment: bool,
}

/// The state shared by every rule during one validation run.
pub struct ValidationContext<'a> {
    schema: &'a Schema,
    document: &'a ast::Document,
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub(crate) type_info: TypeInfo<'a>,
    pub(crate) errors: Vec<GraphQLError>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        let mut fragments = HashMap::new();
        for frag in document.fragments() {
            fragments.entry(frag.name.as_str()).or_insert(frag);
        }
        Self {
            schema,
            document,
            fragments,
            type_info: TypeInfo::new(schema),
            errors: vec![],
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn document(&self) -> &'a ast::Document {
        self.document
    }

    pub fn type_info(&self) -> &TypeInfo<'a> {
        &self.type_info
    }

    /// The first fragment definition named `name`.
    pub fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    pub fn report(&mut self, error: GraphQLError) {
        self.errors.push(error);
    }

    /// Shorthand for reporting a message located at the given AST nodes.
    pub fn report_at<'l>(
        &mut self,
        message: impl Into<String>,
        locations: impl IntoIterator<Item = Option<&'l Location>>,
    ) {
        self.report(GraphQLError::located(message, locations));
    }

    /// Every fragment spread in `selection_set`, including those nested in
    /// fields and inline fragments, but not those inside the spread
    /// fragments themselves.
    pub fn fragment_spreads(&self, selection_set: &'a ast::SelectionSet) -> Vec<&'a ast::FragmentSpread> {
        let mut spreads = vec![];
        let mut sets_to_visit = vec![selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for selection in &set.selections {
                match selection {
                    ast::Selection::FragmentSpread(spread) => spreads.push(spread),
                    ast::Selection::Field(field) => {
                        sets_to_visit.extend(field.selection_set.as_ref());
                    },
                    ast::Selection::InlineFragment(inline) => {
                        sets_to_visit.push(&inline.selection_set);
                    },
                }
            }
        }
        spreads
    }

    /// Every fragment reachable from `operation` through spreads, each once,
    /// in discovery order. Spreads of unknown fragments are ignored.
    pub fn recursively_referenced_fragments(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<&'a ast::FragmentDefinition> {
        let mut fragments = vec![];
        let mut collected_names = HashSet::new();
        let mut sets_to_visit = vec![&operation.selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for spread in self.fragment_spreads(set) {
                let name = spread.name.as_str();
                if !collected_names.insert(name) {
                    continue;
                }
                if let Some(frag) = self.fragment(name) {
                    fragments.push(frag);
                    sets_to_visit.push(&frag.selection_set);
                }
            }
        }
        fragments
    }

    /// Every variable used by `operation` or by a fragment it reaches, with
    /// the input type expected at each usage.
    pub fn recursive_variable_usages(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<VariableUsage<'a>> {
        let mut collector = VariableUsageCollector {
            type_info: TypeInfo::new(self.schema),
            in_variable_definition: false,
            in_fragment: false,
            usages: vec![],
        };
        walk(&mut collector, Node::OperationDefinition(operation));

        collector.in_fragment = true;
        for frag in self.recursively_referenced_fragments(operation) {
            collector.type_info = TypeInfo::new(self.schema);
            walk(&mut collector, Node::FragmentDefinition(frag));
        }
        collector.usages
    }
}

struct VariableUsageCollector<'a> {
    type_info: TypeInfo<'a>,
    in_variable_definition: bool,
    in_fragment: bool,
    usages: Vec<VariableUsage<'a>>,
}

impl<'a> Visitor<'a> for VariableUsageCollector<'a> {
    fn type_info(&mut self) -> &mut TypeInfo<'a> {
        &mut self.type_info
    }

    fn enter(&mut self, node: Node<'a>) {
        match node {
            Node::VariableDefinition(_) => self.in_variable_definition = true,
            Node::Value(ast::Value::Variable(variable)) if !self.in_variable_definition => {
                self.usages.push(VariableUsage {
                    variable,
                    input_type: self.type_info.input_type().cloned(),
                    in_fragment: self.in_fragment,
                });
            },
            _ => {},
        }
    }

    fn leave(&mut self, node: Node<'a>) {
        if let Node::VariableDefinition(_) = node {
            self.in_variable_definition = false;
        }
    }
}
