//! End-to-end scenarios for Church compression and expansion
//!
//! Expected outputs are pinned with inline snapshots so a change in spacing or dot
//! placement shows up as a readable diff.

use dots_core::{compress, expand, NotationError, NotationRegistry, Side};
use insta::assert_snapshot;

#[test]
fn test_compress_trims_wrapper_and_dots_tail() {
    assert_snapshot!(compress("(a(bc))").unwrap(), @"a. bc");
}

#[test]
fn test_compress_keeps_leading_pair() {
    assert_snapshot!(compress("((p)(q))").unwrap(), @"(p). q");
}

#[test]
fn test_compress_formula() {
    let bracketed = "(p ⊃ (q ⊃ r)) ⊃ ((p ⊃ q) ⊃ (p ⊃ r))";
    assert_snapshot!(compress(bracketed).unwrap(), @"(p ⊃ . q ⊃ r) ⊃ . (p ⊃ q) ⊃ . p ⊃ r");
}

#[test]
fn test_expand_single_dot() {
    assert_snapshot!(expand("a. bc"), @"a( bc)");
}

#[test]
fn test_expand_formula() {
    assert_snapshot!(
        expand("(p ⊃ . q ⊃ r) ⊃ . (p ⊃ q) ⊃ . p ⊃ r"),
        @"(p ⊃ ( q ⊃ r)) ⊃ ( (p ⊃ q) ⊃ ( p ⊃ r))"
    );
}

/// `..` only protects its first dot; the second opens a scope. Pinned as current
/// behavior.
#[test]
fn test_expand_doubled_dot_quirk() {
    let expanded = expand("a..b");
    assert_eq!(expanded, "a.(b)");
    assert_ne!(expanded, "a..b");
}

#[test]
fn test_compress_rejects_unclosed_open() {
    assert_eq!(
        compress("(a").unwrap_err(),
        NotationError::UnbalancedParens {
            position: 0,
            side: Side::Open
        }
    );
}

#[test]
fn test_compress_rejects_stray_close() {
    assert_eq!(
        compress("a)").unwrap_err(),
        NotationError::UnbalancedParens {
            position: 1,
            side: Side::Close
        }
    );
}

#[test]
fn test_registry_round_trip_is_canonical() {
    let registry = NotationRegistry::default();
    let dotted = registry
        .convert("(p ∨ q) ∧ (r ∨ s)", "brackets", "church")
        .unwrap();
    assert_snapshot!(dotted, @"(p ∨ q) ∧ . r ∨ s");

    let bracketed = registry.convert(&dotted, "church", "brackets").unwrap();
    assert_snapshot!(bracketed, @"(p ∨ q) ∧ (r ∨ s)");
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = NotationRegistry::default();
    let inputs = ["(a(bc))", "((p)(q))", "a(b(c))"];

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let registry = &registry;
                scope.spawn(move || registry.convert(input, "brackets", "church").unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(outputs, vec!["a. bc", "(p). q", "a. b. c"]);
}
