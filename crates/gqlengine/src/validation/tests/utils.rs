use crate::error::ErrorLocation;
use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::validation::RuleFactory;
use crate::validation::validate_with_rules;
use gqlengine_parser::ParseOptions;
use gqlengine_parser::ast;

/// A schema with a bit of everything: interfaces implemented by several
/// objects, a union, enums, an input object, and fields taking every kind
/// of argument.
pub const TEST_SCHEMA_SDL: &str = r#"
schema {
  query: QueryRoot
}

interface Being {
  name(surname: Boolean): String
}

interface Pet {
  name(surname: Boolean): String
}

enum DogCommand {
  SIT
  HEEL
  DOWN
}

type Dog implements Being & Pet {
  name(surname: Boolean): String
  nickname: String
  barkVolume: Int
  barks: Boolean
  doesKnowCommand(dogCommand: DogCommand): Boolean
  isHousetrained(atOtherHomes: Boolean = true): Boolean
  isAtLocation(x: Int, y: Int): Boolean
}

enum FurColor {
  BROWN
  BLACK
  TAN
  SPOTTED
}

type Cat implements Being & Pet {
  name(surname: Boolean): String
  nickname: String
  meows: Boolean
  meowVolume: Int
  furColor: FurColor
}

union CatOrDog = Cat | Dog

type Human implements Being {
  name(surname: Boolean): String
  pets: [Pet]
  relatives: [Human]
}

input ComplexInput {
  requiredField: Boolean!
  intField: Int
  stringField: String
  booleanField: Boolean
  stringListField: [String]
}

type ComplicatedArgs {
  intArgField(intArg: Int): String
  nonNullIntArgField(nonNullIntArg: Int!): String
  stringArgField(stringArg: String): String
  booleanArgField(booleanArg: Boolean): String
  enumArgField(enumArg: FurColor): String
  floatArgField(floatArg: Float): String
  idArgField(idArg: ID): String
  stringListArgField(stringListArg: [String]): String
  complexArgField(complexArg: ComplexInput): String
  multipleReqs(req1: Int!, req2: Int!): String
  multipleOpts(opt1: Int = 0, opt2: Int = 0): String
}

type QueryRoot {
  human(id: ID): Human
  dog: Dog
  cat: Cat
  pet: Pet
  being: Being
  catOrDog: CatOrDog
  complicatedArgs: ComplicatedArgs
}
"#;

pub fn test_schema() -> Schema {
    match SchemaBuilder::new().load_str(TEST_SCHEMA_SDL).and_then(SchemaBuilder::build) {
        Ok(schema) => schema,
        Err(err) => panic!("test schema failed to build: {err}"),
    }
}

pub fn parse_query(source: &str) -> ast::Document {
    match gqlengine_parser::parse(source, ParseOptions::default()) {
        Ok(doc) => doc,
        Err(err) => panic!("unexpected syntax error:\n{}", err.format_detailed()),
    }
}

/// Runs a single rule over `source` against the test schema.
pub fn check_rule(rule: RuleFactory, source: &str) -> Vec<GraphQLError> {
    let schema = test_schema();
    let doc = parse_query(source);
    validate_with_rules(&schema, &doc, &[rule])
}

pub fn expect_passes(rule: RuleFactory, source: &str) {
    let errors = check_rule(rule, source);
    assert!(errors.is_empty(), "expected no errors, got: {errors:#?}");
}

/// Asserts the rule reports exactly `expected`, in order, and hands back
/// the errors for further checks.
pub fn expect_fails(rule: RuleFactory, source: &str, expected: &[&str]) -> Vec<GraphQLError> {
    let errors = check_rule(rule, source);
    assert_eq!(messages(&errors), expected);
    errors
}

pub fn messages(errors: &[GraphQLError]) -> Vec<&str> {
    errors.iter().map(|err| err.message.as_str()).collect()
}

pub fn loc(line: usize, column: usize) -> ErrorLocation {
    ErrorLocation { line, column }
}
