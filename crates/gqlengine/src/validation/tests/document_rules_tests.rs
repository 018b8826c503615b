//! Rules about the shape of the document as a whole: operation and fragment
//! names, fragment usage and fragment cycles.

use crate::validation::rule;
use crate::validation::rules::KnownFragmentNames;
use crate::validation::rules::LoneAnonymousOperation;
use crate::validation::rules::NoFragmentCycles;
use crate::validation::rules::NoUnusedFragments;
use crate::validation::rules::UniqueFragmentNames;
use crate::validation::rules::UniqueOperationNames;
use crate::validation::tests::utils::expect_fails;
use crate::validation::tests::utils::expect_passes;
use crate::validation::tests::utils::loc;

// =============================================================================
// UniqueOperationNames
// =============================================================================

#[test]
fn distinct_operation_names_pass() {
    expect_passes(
        rule::<UniqueOperationNames>,
        "query Foo { dog { name } } query Bar { dog { name } } mutation Baz { dog { name } }",
    );
}

#[test]
fn anonymous_operations_are_not_named() {
    expect_passes(rule::<UniqueOperationNames>, "{ dog { name } }");
}

#[test]
fn duplicate_operation_name_is_reported_at_both_names() {
    let errors = expect_fails(
        rule::<UniqueOperationNames>,
        "query Foo { dog { name } } query Foo { human { name } }",
        &["There can only be one operation named \"Foo\"."],
    );
    assert_eq!(errors[0].locations, vec![loc(1, 7), loc(1, 34)]);
}

#[test]
fn operations_of_different_types_share_one_namespace() {
    expect_fails(
        rule::<UniqueOperationNames>,
        "query Foo { dog { name } } subscription Foo { dog { name } }",
        &["There can only be one operation named \"Foo\"."],
    );
}

// =============================================================================
// LoneAnonymousOperation
// =============================================================================

#[test]
fn single_anonymous_operation_passes() {
    expect_passes(rule::<LoneAnonymousOperation>, "{ dog { name } } fragment F on Dog { name }");
}

#[test]
fn named_operations_pass() {
    expect_passes(
        rule::<LoneAnonymousOperation>,
        "query Foo { dog { name } } query Bar { dog { name } }",
    );
}

#[test]
fn anonymous_operation_beside_named_one_fails() {
    let errors = expect_fails(
        rule::<LoneAnonymousOperation>,
        "{ dog { name } } query Foo { dog { name } }",
        &["This anonymous operation must be the only defined operation."],
    );
    assert_eq!(errors[0].locations, vec![loc(1, 1)]);
}

#[test]
fn each_anonymous_operation_is_reported() {
    expect_fails(
        rule::<LoneAnonymousOperation>,
        "{ dog { name } } { cat { name } }",
        &[
            "This anonymous operation must be the only defined operation.",
            "This anonymous operation must be the only defined operation.",
        ],
    );
}

// =============================================================================
// UniqueFragmentNames / KnownFragmentNames / NoUnusedFragments
// =============================================================================

#[test]
fn duplicate_fragment_name_fails() {
    expect_fails(
        rule::<UniqueFragmentNames>,
        "{ dog { ...F } } fragment F on Dog { name } fragment F on Dog { nickname }",
        &["There can only be one fragment named \"F\"."],
    );
}

#[test]
fn spreads_of_unknown_fragments_fail() {
    let errors = expect_fails(
        rule::<KnownFragmentNames>,
        "{ dog { ...Known ...Unknown } } fragment Known on Dog { name }",
        &["Unknown fragment \"Unknown\"."],
    );
    assert_eq!(errors[0].locations, vec![loc(1, 21)]);
}

#[test]
fn known_fragments_in_nested_positions_pass() {
    expect_passes(
        rule::<KnownFragmentNames>,
        r#"
        {
          human(id: 4) {
            ...HumanFields
            ... on Human { relatives { ...HumanFields } }
          }
        }
        fragment HumanFields on Human { name }
        "#,
    );
}

#[test]
fn transitively_used_fragments_pass() {
    expect_passes(
        rule::<NoUnusedFragments>,
        "{ dog { ...A } } fragment A on Dog { ...B } fragment B on Dog { name }",
    );
}

#[test]
fn unreferenced_fragment_fails() {
    let errors = expect_fails(
        rule::<NoUnusedFragments>,
        "{ dog { ...A } }\nfragment A on Dog { name }\nfragment C on Dog { name }",
        &["Fragment \"C\" is never used."],
    );
    assert_eq!(errors[0].locations, vec![loc(3, 1)]);
}

#[test]
fn fragments_only_used_by_unused_fragments_fail() {
    expect_fails(
        rule::<NoUnusedFragments>,
        "{ dog { name } } fragment A on Dog { ...B } fragment B on Dog { name }",
        &["Fragment \"A\" is never used.", "Fragment \"B\" is never used."],
    );
}

// =============================================================================
// NoFragmentCycles
// =============================================================================

#[test]
fn acyclic_fragments_pass() {
    expect_passes(
        rule::<NoFragmentCycles>,
        "{ dog { ...A ...B } } fragment A on Dog { ...B } fragment B on Dog { name }",
    );
}

#[test]
fn fragment_spreading_itself_fails() {
    expect_fails(
        rule::<NoFragmentCycles>,
        "{ dog { ...F } } fragment F on Dog { ...F }",
        &["Cannot spread fragment \"F\" within itself."],
    );
}

#[test]
fn indirect_cycle_is_reported_once_along_its_path() {
    let errors = expect_fails(
        rule::<NoFragmentCycles>,
        "{ dog { ...A } }\nfragment A on Dog { ...B }\nfragment B on Dog { ...C }\nfragment C on Dog { ...A }",
        &["Cannot spread fragment \"A\" within itself via B, C."],
    );
    assert_eq!(errors[0].locations, vec![loc(2, 21), loc(3, 21), loc(4, 21)]);
}

#[test]
fn self_spread_inside_nested_selections_fails() {
    expect_fails(
        rule::<NoFragmentCycles>,
        "{ dog { ...F } } fragment F on Dog { ... on Dog { ... { ...F } } }",
        &["Cannot spread fragment \"F\" within itself."],
    );
}

#[test]
fn spreads_of_unknown_fragments_do_not_form_cycles() {
    expect_passes(rule::<NoFragmentCycles>, "{ dog { ...A } } fragment A on Dog { ...Missing }");
}
