//! Property-based tests for the Church transcoder
//!
//! Bracket strings are generated as trees of opaque, dot-free content so they are
//! always balanced. Comparisons ignore whitespace, which compression is free to move
//! around dots.

use dots_core::{compress, expand, trim_outer_parens};
use proptest::prelude::*;

/// Balanced, dot-free bracket strings
fn bracket_string_strategy() -> impl Strategy<Value = String> {
    let leaf = "[pqr ∧∨⊃~]{0,3}";
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop::collection::vec(
            prop_oneof![
                inner.clone(),
                inner.prop_map(|group| format!("({group})")),
            ],
            1..4,
        )
        .prop_map(|parts| parts.concat())
    })
}

fn without_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_expand_inverts_compress(bracketed in bracket_string_strategy()) {
            let dotted = compress(&bracketed).expect("balanced input compresses");
            prop_assert_eq!(
                without_whitespace(&expand(&dotted)),
                without_whitespace(&trim_outer_parens(&bracketed)),
                "dotted form was {:?}", dotted
            );
        }

        #[test]
        fn test_trim_outer_parens_is_idempotent(s in "[()pq ]{0,16}") {
            let once = trim_outer_parens(&s);
            prop_assert_eq!(trim_outer_parens(&once), once);
        }

        #[test]
        fn test_trailing_pair_never_survives(bracketed in bracket_string_strategy()) {
            let normalized = trim_outer_parens(&bracketed);
            prop_assume!(normalized.ends_with(')'));

            let dotted = compress(&bracketed).unwrap();
            prop_assert!(dotted.contains('.'), "no dot in {:?}", dotted);
            prop_assert!(!dotted.ends_with(')'), "tail pair kept in {:?}", dotted);
        }

        #[test]
        fn test_extra_close_is_rejected(bracketed in bracket_string_strategy()) {
            let err = compress(&format!("{bracketed})")).unwrap_err();
            prop_assert!(err.is_unbalanced());
        }

        #[test]
        fn test_extra_open_is_rejected(bracketed in bracket_string_strategy()) {
            let err = compress(&format!("({bracketed}")).unwrap_err();
            prop_assert!(err.is_unbalanced());
        }

        #[test]
        fn test_compress_output_has_no_doubled_dots(bracketed in bracket_string_strategy()) {
            let dotted = compress(&bracketed).unwrap();
            prop_assert!(!dotted.contains(".."), "escape sequence in {:?}", dotted);
        }
    }
}
