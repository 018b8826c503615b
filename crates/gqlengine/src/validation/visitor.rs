use crate::validation::TypeInfo;
use gqlengine_parser::ast;

/// A node of an executable document, as seen by validation rules.
///
/// Type-system definitions are never visited.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Document(&'a ast::Document),
    OperationDefinition(&'a ast::OperationDefinition),
    VariableDefinition(&'a ast::VariableDefinition),
    SelectionSet(&'a ast::SelectionSet),
    Field(&'a ast::Field),
    Argument(&'a ast::Argument),
    FragmentSpread(&'a ast::FragmentSpread),
    InlineFragment(&'a ast::InlineFragment),
    FragmentDefinition(&'a ast::FragmentDefinition),
    Directive(&'a ast::Directive),
    Value(&'a ast::Value),
    ObjectField(&'a ast::ObjectField),
}

pub(crate) trait Visitor<'a> {
    fn type_info(&mut self) -> &mut TypeInfo<'a>;

    fn enter(&mut self, _node: Node<'a>) {}

    fn leave(&mut self, _node: Node<'a>) {}
}

/// Depth-first walk rooted at `node`. The visitor's [`TypeInfo`] enters a
/// node before the visitor does and leaves it after.
pub(crate) fn walk<'a, V: Visitor<'a>>(visitor: &mut V, node: Node<'a>) {
    visitor.type_info().enter(node);
    visitor.enter(node);

    match node {
        Node::Document(doc) => {
            for def in &doc.definitions {
                match def {
                    ast::Definition::Operation(op) => walk(visitor, Node::OperationDefinition(op)),
                    ast::Definition::Fragment(frag) => walk(visitor, Node::FragmentDefinition(frag)),
                    ast::Definition::TypeSystem(_) => {},
                }
            }
        },

        Node::OperationDefinition(op) => {
            for var_def in &op.variable_definitions {
                walk(visitor, Node::VariableDefinition(var_def));
            }
            walk_directives(visitor, &op.directives);
            walk(visitor, Node::SelectionSet(&op.selection_set));
        },

        Node::VariableDefinition(var_def) => {
            if let Some(default_value) = &var_def.default_value {
                walk(visitor, Node::Value(default_value));
            }
        },

        Node::SelectionSet(selection_set) => {
            for selection in &selection_set.selections {
                let child = match selection {
                    ast::Selection::Field(field) => Node::Field(field),
                    ast::Selection::FragmentSpread(spread) => Node::FragmentSpread(spread),
                    ast::Selection::InlineFragment(inline) => Node::InlineFragment(inline),
                };
                walk(visitor, child);
            }
        },

        Node::Field(field) => {
            walk_arguments(visitor, &field.arguments);
            walk_directives(visitor, &field.directives);
            if let Some(selection_set) = &field.selection_set {
                walk(visitor, Node::SelectionSet(selection_set));
            }
        },

        Node::Argument(arg) => walk(visitor, Node::Value(&arg.value)),

        Node::FragmentSpread(spread) => walk_directives(visitor, &spread.directives),

        Node::InlineFragment(inline) => {
            walk_directives(visitor, &inline.directives);
            walk(visitor, Node::SelectionSet(&inline.selection_set));
        },

        Node::FragmentDefinition(frag) => {
            walk_directives(visitor, &frag.directives);
            walk(visitor, Node::SelectionSet(&frag.selection_set));
        },

        Node::Directive(directive) => walk_arguments(visitor, &directive.arguments),

        Node::Value(ast::Value::List(list)) => {
            for item in &list.values {
                walk(visitor, Node::Value(item));
            }
        },

        Node::Value(ast::Value::Object(obj)) => {
            for field in &obj.fields {
                walk(visitor, Node::ObjectField(field));
            }
        },

        Node::Value(_) => {},

        Node::ObjectField(field) => walk(visitor, Node::Value(&field.value)),
    }

    visitor.leave(node);
    visitor.type_info().leave(node);
}

fn walk_arguments<'a, V: Visitor<'a>>(visitor: &mut V, arguments: &'a [ast::Argument]) {
    for arg in arguments {
        walk(visitor, Node::Argument(arg));
    }
}

fn walk_directives<'a, V: Visitor<'a>>(visitor: &mut V, directives: &'a [ast::Directive]) {
    for directive in directives {
        walk(visitor, Node::Directive(directive));
    }
}
