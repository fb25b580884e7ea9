//! Property-based tests for the tokenizer and parser.

use proptest::prelude::*;

use crate::{Expression, ParseError, MAX_SOURCE_LEN};

/// Strategy for well-formed expression sources, built by structural
/// recursion so every generated string is grammatical.
fn well_formed() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("t".to_string()),
        Just("pi".to_string()),
        Just("e".to_string()),
        (0u32..1000).prop_map(|n| n.to_string()),
        (0.001f64..100.0).prop_map(|x| format!("{x:.3}")),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} + {b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} - {b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} * {b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("({a} / {b})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("pow({a}, {b})")),
            inner.clone().prop_map(|a| format!("-({a})")),
            inner.clone().prop_map(|a| format!("sin({a})")),
            inner.clone().prop_map(|a| format!("cos({a})")),
            inner.prop_map(|a| format!("sqrt({a})")),
        ]
    })
}

proptest! {
    // Parsing must never panic, whatever the input.
    #[test]
    fn parse_never_panics(source in ".{0,600}") {
        let _ = Expression::parse(&source);
    }

    // Inputs past the length cap are rejected, not processed.
    #[test]
    fn over_long_input_rejected(filler in "[t+1]{501,600}") {
        prop_assert_eq!(Expression::parse(&filler).unwrap_err(), ParseError::TooLong);
    }

    // Identifiers outside the lexicon are always rejected, wherever they
    // appear.
    #[test]
    fn foreign_identifiers_rejected(name in "[q-sv-z][a-z]{0,6}") {
        // Skip the rare draw that lands on a lexicon word.
        prop_assume!(knotwork_core::Function::from_name(&name).is_none());
        prop_assume!(name != "t");
        let source = format!("sin({name})");
        prop_assert!(
            matches!(
                Expression::parse(&source),
                Err(ParseError::UnknownSymbol { .. })
            ),
            "expected UnknownSymbol error for source {:?}",
            source
        );
    }

    // Every grammatical input parses, provided it fits the length cap.
    #[test]
    fn well_formed_inputs_parse(source in well_formed()) {
        prop_assume!(source.len() <= MAX_SOURCE_LEN);
        prop_assert!(Expression::parse(&source).is_ok(), "{}", source);
    }

    // Parsing is deterministic: same source, same structure.
    #[test]
    fn parse_is_deterministic(source in well_formed()) {
        prop_assume!(source.len() <= MAX_SOURCE_LEN);
        let a = Expression::parse(&source).unwrap();
        let b = Expression::parse(&source).unwrap();
        prop_assert_eq!(a.root(), b.root());
        prop_assert_eq!(a.node_count(), b.node_count());
    }
}
