//! Property tests for subject invariants.

use proptest::prelude::*;
use proven_subject::Subject;

/// Concrete matching of a literal subject against a pattern, token by token.
fn matches(literal: &[&str], pattern: &[&str]) -> bool {
    for (position, token) in pattern.iter().enumerate() {
        if *token == ">" {
            return literal.len() > position;
        }
        match literal.get(position) {
            Some(value) if *token == "*" || token == value => {}
            _ => return false,
        }
    }
    literal.len() == pattern.len()
}

fn tokens(subject: &Subject) -> Vec<&str> {
    subject.as_str().split('.').collect()
}

fn literal_token() -> impl Strategy<Value = String> {
    "[ab]{1,2}"
}

fn literal_subject() -> impl Strategy<Value = String> {
    prop::collection::vec(literal_token(), 1..5).prop_map(|tokens| tokens.join("."))
}

fn pattern_subject() -> impl Strategy<Value = String> {
    let token = prop_oneof![3 => literal_token(), 1 => Just("*".to_string())];

    (prop::collection::vec(token, 0..5), any::<bool>()).prop_filter_map(
        "subject needs at least one token",
        |(mut tokens, tail)| {
            if tail {
                tokens.push(">".to_string());
            }
            (!tokens.is_empty()).then(|| tokens.join("."))
        },
    )
}

proptest! {
    #[test]
    fn raw_string_round_trips(raw in pattern_subject()) {
        let subject = Subject::new(raw.clone()).unwrap();
        prop_assert_eq!(subject.to_string(), raw.clone());
        prop_assert_eq!(String::from(subject), raw);
    }

    #[test]
    fn subset_match_is_reflexive(raw in pattern_subject()) {
        let subject = Subject::new(raw).unwrap();
        prop_assert!(subject.is_subset_match(&subject));
    }

    #[test]
    fn literal_subset_equals_concrete_match(
        literal in literal_subject(),
        pattern in pattern_subject(),
    ) {
        let literal = Subject::new(literal).unwrap();
        let pattern = Subject::new(pattern).unwrap();

        prop_assert!(literal.is_literal());
        prop_assert_eq!(
            literal.is_subset_match(&pattern),
            matches(&tokens(&literal), &tokens(&pattern))
        );
    }

    #[test]
    fn subset_match_preserves_concrete_matches(
        literal in literal_subject(),
        narrow in pattern_subject(),
        broad in pattern_subject(),
    ) {
        let literal = Subject::new(literal).unwrap();
        let narrow = Subject::new(narrow).unwrap();
        let broad = Subject::new(broad).unwrap();

        if narrow.is_subset_match(&broad) && literal.is_subset_match(&narrow) {
            prop_assert!(literal.is_subset_match(&broad));
        }
    }

    #[test]
    fn subset_match_is_transitive(
        a in pattern_subject(),
        b in pattern_subject(),
        c in pattern_subject(),
    ) {
        let a = Subject::new(a).unwrap();
        let b = Subject::new(b).unwrap();
        let c = Subject::new(c).unwrap();

        if a.is_subset_match(&b) && b.is_subset_match(&c) {
            prop_assert!(a.is_subset_match(&c));
        }
    }
}
