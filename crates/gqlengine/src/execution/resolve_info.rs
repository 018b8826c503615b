use crate::coercion::Variables;
use crate::context::RequestContext;
use crate::error::PathSegment;
use crate::execution::ResponsePath;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::value::Arguments;
use crate::value::Value;
use gqlengine_parser::ast;
use std::collections::HashMap;

/// Everything a resolver may want to know about the field being resolved.
#[derive(Clone, Copy)]
pub struct ResolveInfo<'a> {
    pub field_name: &'a str,
    /// Every AST node selecting this response key (several when fields were
    /// merged across fragments).
    pub field_asts: &'a [&'a ast::Field],
    pub return_type: &'a TypeRef,
    pub parent_type: &'a ObjectType,
    pub schema: &'a Schema,
    pub fragments: &'a HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub root_value: &'a Value,
    pub operation: &'a ast::OperationDefinition,
    pub variables: &'a Variables,
    pub path: ResponsePath<'a>,
    pub context: &'a RequestContext,
}

impl ResolveInfo<'_> {
    pub fn path(&self) -> Vec<PathSegment> {
        self.path.to_vec()
    }
}

/// The arguments of a resolver call.
#[derive(Clone, Copy)]
pub struct ResolveParams<'a> {
    /// The parent value: the root value for root fields, otherwise the
    /// completed parent's resolved value.
    pub source: &'a Value,
    pub args: &'a Arguments,
    pub info: &'a ResolveInfo<'a>,
    pub context: &'a RequestContext,
}
