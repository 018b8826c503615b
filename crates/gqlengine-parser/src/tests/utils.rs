use crate::ParseOptions;
use crate::SyntaxError;
use crate::ast;

pub fn parse_ok(body: &str) -> ast::Document {
    match crate::parse(body, ParseOptions::default()) {
        Ok(doc) => doc,
        Err(err) => panic!("unexpected syntax error:\n{}", err.format_detailed()),
    }
}

pub fn parse_err(body: &str) -> SyntaxError {
    match crate::parse(body, ParseOptions::default()) {
        Ok(doc) => panic!("expected a syntax error, parsed: {doc:#?}"),
        Err(err) => err,
    }
}

pub fn first_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    doc.operations().next().expect("document has an operation")
}

pub fn field_at(selection_set: &ast::SelectionSet, idx: usize) -> &ast::Field {
    match &selection_set.selections[idx] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field selection, got {other:?}"),
    }
}

/// The value of the first argument of the first root field of the first
/// operation.
pub fn first_arg_value(doc: &ast::Document) -> &ast::Value {
    let field = field_at(&first_operation(doc).selection_set, 0);
    &field.arguments[0].value
}

pub fn type_definition<'a>(doc: &'a ast::Document, name: &str) -> &'a ast::TypeDefinition {
    doc.type_system_definitions()
        .find_map(|def| match def {
            ast::TypeSystemDefinition::Type(type_def) if type_def.name().value == name => {
                Some(type_def)
            },
            _ => None,
        })
        .unwrap_or_else(|| panic!("no type definition named `{name}`"))
}

/// A document exercising every executable and type-system production.
pub const KITCHEN_SINK: &str = r#"
query queryName($foo: ComplexType, $site: Site = MOBILE) {
  whoever123is: node(id: [123, 456]) {
    id ,
    ... on User @defer {
      field2 {
        id ,
        alias: field1(first:10, after:$foo,) @include(if: $foo) {
          id,
          ...frag
        }
      }
    }
    ... @skip(unless: $foo) {
      id
    }
    ... {
      id
    }
  }
}

mutation likeStory {
  like(story: 123) @defer {
    story {
      id
    }
  }
}

subscription StoryLikeSubscription($input: StoryLikeSubscribeInput) {
  storyLikeSubscribe(input: $input) {
    story {
      likers {
        count
      }
    }
  }
}

fragment frag on Friend {
  foo(size: $size, bar: $b, obj: {key: "value", block: """
      block string uses \"""
  """})
}

{
  unnamed(truthy: true, falsey: false, nullish: null),
  query
}

schema {
  query: QueryType
  mutation: MutationType
}

"""
A described type.
"""
type Foo implements Bar & Baz {
  "field description"
  one: Type
  two(argument: InputType!): Type
  three(argument: InputType, other: String): Int
  four(argument: String = "string"): String
  five(argument: [String] = ["string", "string"]): String
  six(argument: InputType = {key: "value"}): Type
  seven(argument: Int = null): Type
}

type AnnotatedObject @onObject(arg: "value") {
  annotatedField(arg: Type = "default" @onArg): Type @onField
}

interface Bar {
  one: Type
  four(argument: String = "string"): String
}

union Feed = Story | Article | Advert

union Feed2 = | Story | Article

scalar CustomScalar @onScalar

enum Site {
  DESKTOP
  MOBILE @deprecated(reason: "no")
}

input InputType {
  key: String!
  answer: Int = 42
}

extend type Foo {
  seven(argument: [String]): Type
}

directive @skip2(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
"#;
