use crate::schema::Schema;
use crate::types::Directive;
use crate::types::FieldDefinition;
use crate::types::InputValueDefinition;
use crate::types::NamedType;
use crate::types::TypeRef;
use crate::validation::Node;
use gqlengine_parser::ast;

/// Tracks what the schema says about the node currently being walked: the
/// enclosing composite type, the field definition, the expected input type
/// of a value, and the directive and argument being visited.
///
/// Every stack gets exactly one push on enter and one pop on leave for the
/// node kinds that affect it. Lookups that fail push `None`, so rules can
/// keep walking a document that references unknown types or fields.
pub struct TypeInfo<'a> {
    schema: &'a Schema,
    type_stack: Vec<Option<TypeRef>>,
    parent_type_stack: Vec<Option<&'a NamedType>>,
    input_type_stack: Vec<Option<TypeRef>>,
    field_def_stack: Vec<Option<&'a FieldDefinition>>,
    directive: Option<&'a Directive>,
    argument: Option<&'a InputValueDefinition>,
}

impl<'a> TypeInfo<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            type_stack: vec![],
            parent_type_stack: vec![],
            input_type_stack: vec![],
            field_def_stack: vec![],
            directive: None,
            argument: None,
        }
    }

    /// The output type of the current field, operation or fragment.
    pub fn output_type(&self) -> Option<&TypeRef> {
        self.type_stack.last()?.as_ref()
    }

    /// The composite type whose selection set is being walked.
    pub fn parent_type(&self) -> Option<&'a NamedType> {
        *self.parent_type_stack.last()?
    }

    pub fn field_def(&self) -> Option<&'a FieldDefinition> {
        *self.field_def_stack.last()?
    }

    /// The type the value being walked is expected to have.
    pub fn input_type(&self) -> Option<&TypeRef> {
        self.input_type_stack.last()?.as_ref()
    }

    pub fn directive(&self) -> Option<&'a Directive> {
        self.directive
    }

    pub fn argument(&self) -> Option<&'a InputValueDefinition> {
        self.argument
    }

    /// The named type at the core of `type_ref`, if the schema has it.
    pub fn named_type(&self, type_ref: &TypeRef) -> Option<&'a NamedType> {
        self.schema.type_named(type_ref.innermost_name())
    }

    /// `Some(type_ref)` if it names an output type of the schema.
    fn output_type_ref(&self, type_ref: TypeRef) -> Option<TypeRef> {
        self.named_type(&type_ref)
            .filter(|named| named.is_output_type())
            .map(|_| type_ref)
    }

    fn input_type_ref(&self, type_ref: TypeRef) -> Option<TypeRef> {
        self.named_type(&type_ref)
            .filter(|named| named.is_input_type())
            .map(|_| type_ref)
    }

    pub(crate) fn enter(&mut self, node: Node<'a>) {
        match node {
            Node::SelectionSet(_) => {
                let parent = self.output_type()
                    .and_then(|type_ref| self.named_type(type_ref))
                    .filter(|named| named.is_composite());
                self.parent_type_stack.push(parent);
            },

            Node::Field(field) => {
                let field_def = self.parent_type()
                    .and_then(|parent| self.schema.field_definition(parent, field.name.as_str()));
                self.field_def_stack.push(field_def);
                let field_type = field_def
                    .and_then(|def| self.output_type_ref(def.field_type().clone()));
                self.type_stack.push(field_type);
            },

            Node::Directive(directive) => {
                self.directive = self.schema.directive(directive.name.as_str());
            },

            Node::OperationDefinition(op) => {
                let root_type = self.schema.root_type(op.operation)
                    .map(|root| TypeRef::named(root.name()));
                self.type_stack.push(root_type);
            },

            Node::InlineFragment(inline) => {
                let condition_type = match &inline.type_condition {
                    Some(cond) => self.output_type_ref(TypeRef::named(cond.name.as_str())),
                    None => self.output_type()
                        .map(|current| TypeRef::named(current.innermost_name())),
                };
                self.type_stack.push(condition_type);
            },

            Node::FragmentDefinition(frag) => {
                let condition_type = self.output_type_ref(
                    TypeRef::named(frag.type_condition.name.as_str()),
                );
                self.type_stack.push(condition_type);
            },

            Node::VariableDefinition(var_def) => {
                let var_type = self.input_type_ref(TypeRef::from_ast(&var_def.var_type));
                self.input_type_stack.push(var_type);
            },

            Node::Argument(arg) => {
                let arg_def = match self.directive {
                    Some(directive) => directive.argument(arg.name.as_str()),
                    None => self.field_def()
                        .and_then(|field_def| field_def.argument(arg.name.as_str())),
                };
                self.argument = arg_def;
                self.input_type_stack.push(arg_def.map(|def| def.value_type().clone()));
            },

            Node::Value(ast::Value::List(_)) => {
                let item_type = self.input_type().and_then(|list_type| {
                    let item_type = match list_type.nullable() {
                        TypeRef::List(item_type) => item_type.as_ref(),
                        other => other,
                    };
                    self.input_type_ref(item_type.clone())
                });
                self.input_type_stack.push(item_type);
            },

            Node::ObjectField(field) => {
                let field_type = self.input_type()
                    .and_then(|type_ref| self.named_type(type_ref))
                    .and_then(NamedType::as_input_object)
                    .and_then(|input_object| input_object.field(field.name.as_str()))
                    .map(|field_def| field_def.value_type().clone());
                self.input_type_stack.push(field_type);
            },

            Node::Document(_) | Node::FragmentSpread(_) | Node::Value(_) => {},
        }
    }

    pub(crate) fn leave(&mut self, node: Node<'a>) {
        match node {
            Node::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },

            Node::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },

            Node::Directive(_) => self.directive = None,

            Node::OperationDefinition(_) | Node::InlineFragment(_) | Node::FragmentDefinition(_) => {
                self.type_stack.pop();
            },

            Node::VariableDefinition(_) | Node::Value(ast::Value::List(_)) | Node::ObjectField(_) => {
                self.input_type_stack.pop();
            },

            Node::Argument(_) => {
                self.argument = None;
                self.input_type_stack.pop();
            },

            Node::Document(_) | Node::FragmentSpread(_) | Node::Value(_) => {},
        }
    }
}
