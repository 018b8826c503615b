//! Location tracking: every node of a well-formed document carries a
//! location with `start <= end`, and the parse options control how much
//! positional data is attached.

use crate::Location;
use crate::ParseOptions;
use crate::ast;
use crate::ast::AstNode;
use crate::tests::utils::KITCHEN_SINK;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse_ok;
use proptest::prelude::*;

/// Collects the locations of every node reachable from `doc`.
fn all_locations(doc: &ast::Document) -> Vec<Option<&Location>> {
    let mut locs = vec![doc.loc()];
    for def in &doc.definitions {
        locs.push(def.loc());
        match def {
            ast::Definition::Operation(op) => {
                if let Some(name) = &op.name {
                    locs.push(name.loc());
                }
                for var_def in &op.variable_definitions {
                    locs.push(var_def.loc());
                    locs.push(var_def.variable.loc());
                    type_locations(&var_def.var_type, &mut locs);
                    if let Some(default) = &var_def.default_value {
                        value_locations(default, &mut locs);
                    }
                }
                directive_locations(&op.directives, &mut locs);
                selection_set_locations(&op.selection_set, &mut locs);
            },
            ast::Definition::Fragment(frag) => {
                locs.push(frag.name.loc());
                locs.push(frag.type_condition.loc());
                directive_locations(&frag.directives, &mut locs);
                selection_set_locations(&frag.selection_set, &mut locs);
            },
            ast::Definition::TypeSystem(ts) => type_system_locations(ts, &mut locs),
        }
    }
    locs
}

fn selection_set_locations<'a>(set: &'a ast::SelectionSet, locs: &mut Vec<Option<&'a Location>>) {
    locs.push(set.loc());
    for selection in &set.selections {
        locs.push(selection.loc());
        directive_locations(selection.directives(), locs);
        match selection {
            ast::Selection::Field(field) => {
                locs.push(field.name.loc());
                if let Some(alias) = &field.alias {
                    locs.push(alias.loc());
                }
                for arg in &field.arguments {
                    locs.push(arg.loc());
                    value_locations(&arg.value, locs);
                }
                if let Some(sub) = &field.selection_set {
                    selection_set_locations(sub, locs);
                }
            },
            ast::Selection::FragmentSpread(spread) => locs.push(spread.name.loc()),
            ast::Selection::InlineFragment(inline) => {
                if let Some(cond) = &inline.type_condition {
                    locs.push(cond.loc());
                }
                selection_set_locations(&inline.selection_set, locs);
            },
        }
    }
}

fn directive_locations<'a>(directives: &'a [ast::Directive], locs: &mut Vec<Option<&'a Location>>) {
    for directive in directives {
        locs.push(directive.loc());
        for arg in &directive.arguments {
            locs.push(arg.loc());
            value_locations(&arg.value, locs);
        }
    }
}

fn value_locations<'a>(value: &'a ast::Value, locs: &mut Vec<Option<&'a Location>>) {
    locs.push(value.loc());
    match value {
        ast::Value::List(list) => {
            for item in &list.values {
                value_locations(item, locs);
            }
        },
        ast::Value::Object(obj) => {
            for field in &obj.fields {
                locs.push(field.loc());
                value_locations(&field.value, locs);
            }
        },
        _ => {},
    }
}

fn type_locations<'a>(type_ref: &'a ast::Type, locs: &mut Vec<Option<&'a Location>>) {
    locs.push(type_ref.loc());
    match type_ref {
        ast::Type::Named(named) => locs.push(named.name.loc()),
        ast::Type::List(list) => type_locations(&list.of_type, locs),
        ast::Type::NonNull(non_null) => type_locations(&non_null.of_type, locs),
    }
}

fn type_system_locations<'a>(
    def: &'a ast::TypeSystemDefinition,
    locs: &mut Vec<Option<&'a Location>>,
) {
    locs.push(def.loc());
    let fields = match def {
        ast::TypeSystemDefinition::Type(ast::TypeDefinition::Object(obj)) => &obj.fields,
        ast::TypeSystemDefinition::Type(ast::TypeDefinition::Interface(iface)) => &iface.fields,
        ast::TypeSystemDefinition::TypeExtension(ext) => &ext.definition.fields,
        _ => return,
    };
    for field in fields {
        locs.push(field.loc());
        type_locations(&field.field_type, locs);
        for arg in &field.arguments {
            locs.push(arg.loc());
            type_locations(&arg.value_type, locs);
            if let Some(default) = &arg.default_value {
                value_locations(default, locs);
            }
        }
    }
}

fn assert_well_formed_locations(body: &str) {
    let doc = parse_ok(body);
    for loc in all_locations(&doc) {
        let loc = loc.expect("every node has a location");
        assert!(loc.start <= loc.end, "inverted location {loc:?}");
        assert!(loc.end <= body.len(), "location {loc:?} past end of body");
        assert!(loc.source.is_some());
    }
}

#[test]
fn kitchen_sink_locations_are_well_formed() {
    assert_well_formed_locations(KITCHEN_SINK);
}

#[test]
fn location_covers_node_text() {
    let doc = parse_ok("query Q { alias: field(arg: [1, 2]) }");
    let op = first_operation(&doc);
    assert_eq!(
        op.loc().and_then(Location::source_text),
        Some("query Q { alias: field(arg: [1, 2]) }"),
    );
    let ast::Selection::Field(field) = &op.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(field.loc().and_then(Location::source_text), Some("alias: field(arg: [1, 2])"));
    assert_eq!(
        field.arguments[0].value.loc().and_then(Location::source_text),
        Some("[1, 2]"),
    );
}

#[test]
fn location_positions_resolve_to_line_and_column() {
    let doc = parse_ok("\n\n  { a }");
    let loc = first_operation(&doc).loc().expect("has location").clone();
    let start = loc.start_position().expect("source attached");
    assert_eq!((start.line, start.column), (3, 3));
}

#[test]
fn no_location_option_drops_locations() {
    let options = ParseOptions { no_location: true, ..Default::default() };
    let doc = crate::parse("{ a(b: 1) }", options).expect("valid");
    assert!(all_locations(&doc).iter().all(Option::is_none));
}

#[test]
fn no_source_option_keeps_offsets_only() {
    let options = ParseOptions { no_source: true, ..Default::default() };
    let doc = crate::parse("{ a }", options).expect("valid");
    for loc in all_locations(&doc) {
        let loc = loc.expect("offsets are kept");
        assert!(loc.source.is_none());
        assert!(loc.start <= loc.end);
    }
}

#[test]
fn shared_source_is_reused_across_nodes() {
    let source = std::sync::Arc::new(crate::Source::new("{ a b }"));
    let doc = crate::parse_source(source.clone(), ParseOptions::default()).expect("valid");
    let loc = doc.loc().expect("has location");
    assert!(std::sync::Arc::ptr_eq(loc.source.as_ref().expect("source"), &source));
}

// =============================================================================
// Generated documents
// =============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z_][a-zA-Z0-9_]{0,6}".prop_filter("`on` starts an inline fragment", |n| n != "on")
}

fn arb_value() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        (any::<i16>(), 0u8..100).prop_map(|(a, b)| format!("{a}.{b}")),
        "[a-zA-Z ]{0,8}".prop_map(|s| format!("\"{s}\"")),
        Just("true".to_string()),
        Just("null".to_string()),
        "[A-Z][A-Z_]{0,5}",
        arb_name().prop_map(|n| format!("${n}")),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            prop::collection::btree_map(arb_name(), inner, 0..4).prop_map(|fields| {
                let fields: Vec<_> = fields.into_iter().map(|(k, v)| format!("{k}: {v}")).collect();
                format!("{{{}}}", fields.join(", "))
            }),
        ]
    })
}

fn arb_selection_set() -> impl Strategy<Value = String> {
    let field = (
        prop::option::of(arb_name()),
        arb_name(),
        prop::collection::vec((arb_name(), arb_value()), 0..3),
    )
        .prop_map(|(alias, name, args)| {
            let mut text = match alias {
                Some(alias) => format!("{alias}: {name}"),
                None => name,
            };
            let mut seen = std::collections::HashSet::new();
            let args: Vec<_> = args
                .into_iter()
                .filter(|(n, _)| seen.insert(n.clone()))
                .map(|(n, v)| format!("{n}: {v}"))
                .collect();
            if !args.is_empty() {
                text.push_str(&format!("({})", args.join(", ")));
            }
            text
        });
    let leaf = prop::collection::vec(field, 1..4).prop_map(|fields| format!("{{ {} }}", fields.join(" ")));
    leaf.prop_recursive(3, 24, 3, |inner| {
        (arb_name(), inner, prop::collection::vec(arb_name(), 0..3)).prop_map(
            |(name, sub, siblings)| {
                let fragment_spread = siblings.first().map(|s| format!(" ...{s}")).unwrap_or_default();
                format!(
                    "{{ {name} {sub} {}{fragment_spread} ... on T {sub} }}",
                    siblings.join(" "),
                )
            },
        )
    })
}

proptest! {
    #[test]
    fn generated_documents_parse_with_well_formed_locations(
        op_name in arb_name(),
        selection_set in arb_selection_set(),
        fragment_name in arb_name(),
    ) {
        let body = format!(
            "query {op_name} {selection_set}\nfragment {fragment_name} on T {selection_set}",
        );
        assert_well_formed_locations(&body);
    }
}
