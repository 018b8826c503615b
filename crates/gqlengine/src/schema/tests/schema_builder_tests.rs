use crate::Value;
use crate::schema::ReadContentError;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::DirectiveLocation;
use crate::types::FieldDefinition;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::types::UnionType;
use gqlengine_parser::ast::OperationType;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Loads `sdl` and expects the build to fail.
fn build_err(sdl: &str) -> SchemaBuildError {
    SchemaBuilder::new()
        .load_str(sdl)
        .and_then(SchemaBuilder::build)
        .expect_err("schema should not build")
}

mod basics {
    use super::*;

    #[test]
    fn build_without_query_root() {
        let err = SchemaBuilder::new().build().expect_err("no query root");
        assert!(matches!(err, SchemaBuildError::MissingQueryRoot));
        assert_eq!(err.to_string(), "Schema query must be Object Type but got: nil.");
    }

    #[test]
    fn load_sdl_with_default_root_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "scalar Date\n",
                "enum Episode { NEWHOPE EMPIRE JEDI }\n",
                "type Query { hero(episode: Episode): String, today: Date }\n",
                "type Mutation { rate(stars: Int!): Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(schema.mutation_type().map(|root| root.name()), Some("Mutation"));
        assert!(schema.subscription_type().is_none());
        assert_eq!(schema.type_named("Date").map(|t| t.kind()), Some(TypeKind::Scalar));
        assert_eq!(schema.type_named("Episode").map(|t| t.kind()), Some(TypeKind::Enum));
        for builtin in ["Int", "Float", "String", "Boolean", "ID", "__Schema", "__Type"] {
            assert!(schema.type_named(builtin).is_some(), "missing built-in {builtin}");
        }
        assert_eq!(
            schema.directives().keys().map(String::as_str).collect::<Vec<_>>(),
            ["skip", "include", "deprecated"],
        );
        Ok(())
    }

    #[test]
    fn schema_definition_names_the_roots() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "schema { query: Root, subscription: Events }\n",
                "type Root { ping: Boolean }\n",
                "type Events { tick: Int }\n",
                "type Query { ignored: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.query_type().name(), "Root");
        assert_eq!(schema.root_type(OperationType::Subscription).map(|root| root.name()), Some("Events"));
        assert!(schema.root_type(OperationType::Mutation).is_none());
        Ok(())
    }

    #[test]
    fn root_must_be_an_object_type() {
        let err = build_err("schema { query: Q }\nscalar Q");
        assert!(matches!(
            &err,
            SchemaBuildError::RootNotObject { operation: OperationType::Query, type_name } if type_name == "Q",
        ));
        assert_eq!(err.to_string(), "Schema query must be Object Type but got: Q.");
    }

    #[test]
    fn load_invalid_schema_syntax() {
        let result = SchemaBuilder::new().load_str("type Query {");
        assert!(matches!(result, Err(SchemaBuildError::Parse(_))));
    }

    #[test]
    fn load_missing_file() {
        let result = SchemaBuilder::new().load_file("/definitely/not/a/schema.graphql");
        assert!(matches!(
            result,
            Err(SchemaBuildError::ReadFile(ReadContentError::PathIsNotAFile(_))),
        ));
    }

    #[test]
    fn load_schema_from_file() -> Result<()> {
        let path = std::env::temp_dir()
            .join(format!("gqlengine-load-schema-{}.graphql", std::process::id()));
        std::fs::write(&path, "type Query { fromFile: String }").expect("write temp schema");

        let result = SchemaBuilder::new().load_file(&path).and_then(SchemaBuilder::build);
        std::fs::remove_file(&path).expect("remove temp schema");

        let schema = result?;
        assert!(schema.query_type().field("fromFile").is_some());
        Ok(())
    }

    #[test]
    fn programmatic_root_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .query(
                ObjectType::new("Query")
                    .with_field(FieldDefinition::new("hello", TypeRef::named("String"))),
            )
            .build()?;
        assert_eq!(schema.query_type().name(), "Query");
        assert_eq!(
            schema.query_type().field("hello").map(|field| field.field_type()),
            Some(&TypeRef::named("String")),
        );
        Ok(())
    }

    #[test]
    fn custom_directive_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "directive @auth(role: String = \"user\") on FIELD_DEFINITION | OBJECT\n",
                "type Query { a: Int }\n",
            ))?
            .build()?;

        let auth = schema.directive("auth").expect("@auth is defined");
        assert_eq!(auth.locations(), [DirectiveLocation::FieldDefinition, DirectiveLocation::Object]);
        assert_eq!(
            auth.argument("role").and_then(|arg| arg.default_value()),
            Some(&json!("user")),
        );
        Ok(())
    }

    #[test]
    fn fields_thunk_is_forced_once() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let thunk_calls = calls.clone();
        let schema = SchemaBuilder::new()
            .query(ObjectType::new("Query").with_fields_thunk(move || {
                thunk_calls.fetch_add(1, Ordering::SeqCst);
                vec![
                    FieldDefinition::new("a", TypeRef::named("Int")),
                    FieldDefinition::new("self", TypeRef::named("Query")),
                ]
            }))
            .build()?;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(schema.query_type().field("a").is_some());
        assert!(schema.query_type().field("self").is_some());
        Ok(())
    }
}

mod type_registration {
    use super::*;

    #[test]
    fn registering_the_same_type_twice_is_a_noop() -> Result<()> {
        let shared = Arc::new(
            ObjectType::new("Thing").with_field(FieldDefinition::new("id", TypeRef::named("ID"))),
        );
        let schema = SchemaBuilder::new()
            .register_type(shared.clone())
            .register_type(shared)
            .load_str("type Query { thing: Thing }")?
            .build()?;
        assert!(schema.type_named("Thing").is_some());
        Ok(())
    }

    #[test]
    fn distinct_types_with_one_name_conflict() -> Result<()> {
        let err = SchemaBuilder::new()
            .register_type(ObjectType::new("Thing").with_field(FieldDefinition::new("id", TypeRef::named("ID"))))
            .load_str("type Thing { id: ID }\ntype Query { thing: Thing }")?
            .build()
            .expect_err("Thing is defined twice");
        assert!(matches!(&err, SchemaBuildError::DuplicateTypeName(name) if name == "Thing"));
        assert_eq!(
            err.to_string(),
            "Schema must contain unique named types but contains multiple types named \"Thing\".",
        );
        Ok(())
    }

    #[test]
    fn reserved_names_are_rejected() {
        let err = build_err("type __Secret { a: Int }\ntype Query { a: Int }");
        assert!(matches!(&err, SchemaBuildError::ReservedName(name) if name == "__Secret"));
    }

    #[test]
    fn scalar_implementation_replaces_sdl_placeholder() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("scalar Cents\ntype Query { price: Cents }")?
            .scalar(
                ScalarType::new("Cents")
                    .with_serialize(|value| value.as_i64().map(|cents| json!(format!("${}.{:02}", cents / 100, cents % 100)))),
            )
            .build()?;

        let cents = schema.type_named("Cents")
            .and_then(|named| named.as_scalar())
            .expect("Cents is a scalar");
        assert_eq!(cents.serialize(&json!(1250)), Some(json!("$12.50")));
        Ok(())
    }

    #[test]
    fn sdl_scalar_after_implementation_keeps_the_implementation() -> Result<()> {
        let schema = SchemaBuilder::new()
            .scalar(ScalarType::new("Upper").with_serialize(|value| {
                value.as_str().map(|s| json!(s.to_uppercase()))
            }))
            .load_str("scalar Upper\ntype Query { shout: Upper }")?
            .build()?;

        let upper = schema.type_named("Upper")
            .and_then(|named| named.as_scalar())
            .expect("Upper is a scalar");
        assert_eq!(upper.serialize(&json!("hi")), Some(json!("HI")));
        Ok(())
    }

    #[test]
    fn scalar_cannot_replace_another_kind() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str("type Query { a: Int }")?
            .scalar(ScalarType::new("Query"))
            .build()
            .expect_err("Query is an object type");
        assert!(matches!(&err, SchemaBuildError::DuplicateTypeName(name) if name == "Query"));
        Ok(())
    }

    #[test]
    fn duplicate_directive() {
        let err = build_err("directive @skip on FIELD\ntype Query { a: Int }");
        assert!(matches!(&err, SchemaBuildError::DuplicateDirective(name) if name == "skip"));
        assert_eq!(err.to_string(), "Directive \"@skip\" is defined more than once.");
    }
}

mod type_validation {
    use super::*;

    #[test]
    fn unknown_field_type() {
        let err = build_err("type Query { a: Missing }");
        assert_eq!(err.to_string(), "Unknown type \"Missing\" referenced by Query.a.");
    }

    #[test]
    fn unknown_argument_type() {
        let err = build_err("type Query { a(arg: Missing): Int }");
        assert_eq!(err.to_string(), "Unknown type \"Missing\" referenced by Query.a(arg:).");
    }

    #[test]
    fn object_field_must_be_output_type() {
        let err = build_err("input In { x: Int }\ntype Query { a: In }");
        assert!(matches!(err, SchemaBuildError::NonOutputFieldType { .. }));
        assert_eq!(err.to_string(), "Query.a field type must be Output Type but got: In.");
    }

    #[test]
    fn argument_must_be_input_type() {
        let err = build_err("type Query { a(arg: [Query]): Int }");
        assert_eq!(err.to_string(), "Query.a(arg:) argument type must be Input Type but got: [Query].");
    }

    #[test]
    fn input_field_must_be_input_type() {
        let err = build_err("input In { q: Query }\ntype Query { a(i: In): Int }");
        assert_eq!(err.to_string(), "In.q field type must be Input Type but got: Query.");
    }

    #[test]
    fn object_must_define_fields() {
        let err = SchemaBuilder::new()
            .query(ObjectType::new("Query"))
            .build()
            .expect_err("Query has no fields");
        assert!(matches!(&err, SchemaBuildError::EmptyFields { type_name } if type_name == "Query"));
    }

    #[test]
    fn nested_non_null_is_rejected() {
        let err = SchemaBuilder::new()
            .query(ObjectType::new("Query").with_field(FieldDefinition::new(
                "a",
                TypeRef::list(TypeRef::non_null(TypeRef::named_non_null("Int"))),
            )))
            .build()
            .expect_err("Int!! is not a type");
        assert_eq!(err.to_string(), "Can only create NonNull of a Nullable GraphQLType but got: Int!.");
    }

    #[test]
    fn argument_default_must_coerce() {
        let err = build_err("type Query { a(n: Int = \"abc\"): Int }");
        assert!(matches!(err, SchemaBuildError::UncoercibleDefault { .. }));
        assert_eq!(err.to_string(), "Query.a(n:) has invalid default value: \"abc\".");
    }

    #[test]
    fn input_field_default_must_coerce() {
        let err = build_err("input In { flag: Boolean = [1, 2] }\ntype Query { a(i: In): Int }");
        assert_eq!(err.to_string(), "In.flag has invalid default value: [1,2].");
    }

    #[test]
    fn union_members_must_be_objects() {
        let err = build_err("type Query { u: U }\nunion U = Query | Int");
        assert_eq!(err.to_string(), "U may only contain Object types, it cannot contain: Int.");
    }

    #[test]
    fn union_must_have_members() {
        let err = SchemaBuilder::new()
            .register_type(UnionType::new("Empty"))
            .load_str("type Query { a: Int }")
            .and_then(SchemaBuilder::build)
            .expect_err("Empty has no members");
        assert_eq!(err.to_string(), "Union type Empty must define one or more member types.");
    }
}

mod interface_implementation {
    use super::*;

    fn implementation_err(interface_fields: &str, object_fields: &str) -> String {
        build_err(&format!(
            "interface Named {{ {interface_fields} }}\ntype Query implements Named {{ {object_fields} }}",
        )).to_string()
    }

    #[test]
    fn valid_implementation_builds() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(concat!(
                "interface Named { name(upper: Boolean): String }\n",
                "type Query implements Named { name(upper: Boolean, lang: String): String, id: ID }\n",
            ))?
            .build()?;
        assert!(schema.query_type().implements("Named"));
        assert!(schema.is_possible_type("Named", "Query"));
        Ok(())
    }

    #[test]
    fn missing_field() {
        assert_eq!(
            implementation_err("name: String", "id: ID"),
            "\"Named\" expects field \"name\" but \"Query\" does not provide it.",
        );
    }

    #[test]
    fn field_type_mismatch() {
        assert_eq!(
            implementation_err("name: String", "name: String!"),
            "Named.name expects type \"String\" but Query.name provides type \"String!\".",
        );
    }

    #[test]
    fn missing_argument() {
        assert_eq!(
            implementation_err("name(upper: Boolean): String", "name: String"),
            "Named.name expects argument \"upper\" but Query.name does not provide it.",
        );
    }

    #[test]
    fn argument_type_mismatch() {
        assert_eq!(
            implementation_err("name(upper: Boolean): String", "name(upper: Int): String"),
            "Named.name(upper:) expects type \"Boolean\" but Query.name(upper:) provides type \"Int\".",
        );
    }

    #[test]
    fn extra_required_argument() {
        assert_eq!(
            implementation_err("name: String", "name(lang: String!): String"),
            "Query.name(lang:) is of required type \"String!\" but is not also provided by the \
             interface Named.name.",
        );
    }

    #[test]
    fn implements_non_interface() {
        let err = build_err("type Other { a: Int }\ntype Query implements Other { a: Int }");
        assert_eq!(err.to_string(), "Query may only implement Interface types, it cannot implement: Other.");
    }

    #[test]
    fn implements_unknown_type() {
        let err = build_err("type Query implements Nope { a: Int }");
        assert_eq!(err.to_string(), "Unknown type \"Nope\" referenced by Query.");
    }
}

mod type_extensions {
    use super::*;

    #[test]
    fn extend_type_adds_fields_and_interfaces() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str("type Query { a: Int }\ninterface Named { name: String }")?
            .load_str("extend type Query implements Named { name: String }")?
            .build()?;

        let query = schema.query_type();
        assert_eq!(query.fields().keys().map(String::as_str).collect::<Vec<_>>(), ["a", "name"]);
        assert!(schema.is_possible_type("Named", "Query"));
        Ok(())
    }

    #[test]
    fn extend_undefined_type() {
        let err = build_err("type Query { a: Int }\nextend type Nope { b: Int }");
        assert!(matches!(&err, SchemaBuildError::ExtensionOfUndefinedType(name) if name == "Nope"));
        assert_eq!(err.to_string(), "Cannot extend type \"Nope\" because it is not defined.");
    }

    #[test]
    fn extend_non_object_type() {
        let err = build_err("type Query { a: Int }\nenum E { A }\nextend type E { b: Int }");
        assert_eq!(err.to_string(), "Cannot extend non-object type \"E\".");
    }

    #[test]
    fn extend_with_existing_field() {
        let err = build_err("type Query { a: Int }\nextend type Query { a: String }");
        assert_eq!(err.to_string(), "Field \"Query.a\" can only be defined once.");
    }
}

mod hooks {
    use super::*;

    const HOOKS_SDL: &str = concat!(
        "interface Named { name: String }\n",
        "type Dog implements Named { name: String }\n",
        "union Pet = Dog\n",
        "type Query { pet: Pet, named: Named }\n",
    );

    #[test]
    fn hooks_attach_to_sdl_types() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(HOOKS_SDL)?
            .resolver("Query", "pet", |_| Ok(Value::Null))
            .is_type_of("Dog", |_, _| true)
            .resolve_type("Named", |_, _| Some("Dog".to_string()))
            .resolve_type("Pet", |_, _| Some("Dog".to_string()))
            .build()?;

        assert!(schema.query_type().field("pet").and_then(|field| field.resolver()).is_some());
        assert!(schema.query_type().field("named").and_then(|field| field.resolver()).is_none());

        let dog = schema.type_named("Dog").and_then(|named| named.as_object()).expect("Dog");
        assert!(dog.is_type_of_fn().is_some());
        let named = schema.type_named("Named").and_then(|named| named.as_interface()).expect("Named");
        assert!(named.resolve_type_fn().is_some());
        let pet = schema.type_named("Pet").and_then(|named| named.as_union()).expect("Pet");
        assert!(pet.resolve_type_fn().is_some());
        Ok(())
    }

    #[test]
    fn resolver_for_unknown_field() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(HOOKS_SDL)?
            .resolver("Query", "nope", |_| Ok(Value::Null))
            .build()
            .expect_err("Query.nope does not exist");
        assert_eq!(err.to_string(), "Cannot attach resolver to \"Query.nope\": no such object field.");
        Ok(())
    }

    #[test]
    fn subscribe_on_interface_field() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(HOOKS_SDL)?
            .subscribe("Named", "name", |_| Err("unreachable".into()))
            .build()
            .expect_err("Named is not an object type");
        assert_eq!(err.to_string(), "Cannot attach subscribe to \"Named.name\": no such object field.");
        Ok(())
    }

    #[test]
    fn is_type_of_on_interface() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(HOOKS_SDL)?
            .is_type_of("Named", |_, _| true)
            .build()
            .expect_err("Named is not an object type");
        assert_eq!(err.to_string(), "Cannot attach is_type_of to \"Named\": no such object type.");
        Ok(())
    }

    #[test]
    fn resolve_type_on_object() -> Result<()> {
        let err = SchemaBuilder::new()
            .load_str(HOOKS_SDL)?
            .resolve_type("Dog", |_, _| None)
            .build()
            .expect_err("Dog is not abstract");
        assert_eq!(
            err.to_string(),
            "Cannot attach resolve_type to \"Dog\": no such interface or union type.",
        );
        Ok(())
    }
}
