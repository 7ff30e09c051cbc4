//! Canonical bracket strings
//!
//! Bracket strings produced by expansion, or typed by a user, are handed to a
//! [`Canonicalizer`] before they are shown or compressed. This is the seam where a
//! grammar-aware parser and serializer plugs in: it receives a bracket string and
//! returns the same formula in its canonical bracketed spelling.
//!
//! The built-in [`StructuralCanonicalizer`] knows no grammar. It checks that the
//! parentheses balance and tidies whitespace, leaving nesting and content untouched.

use crate::church::match_pairs;
use crate::error::NotationError;

/// Turns a bracket string into its canonical spelling.
pub trait Canonicalizer: Send + Sync {
    fn canonicalize(&self, bracketed: &str) -> Result<String, NotationError>;
}

/// Balance check plus whitespace normalization.
///
/// - runs of whitespace become one space
/// - whitespace directly inside a parenthesis is dropped
/// - leading and trailing whitespace is trimmed
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralCanonicalizer;

impl Canonicalizer for StructuralCanonicalizer {
    fn canonicalize(&self, bracketed: &str) -> Result<String, NotationError> {
        match_pairs(bracketed)?;

        let mut out = String::with_capacity(bracketed.len());
        let mut pending_space = false;
        for ch in bracketed.trim().chars() {
            if ch.is_whitespace() {
                pending_space = true;
                continue;
            }
            if pending_space && ch != ')' && !out.ends_with('(') {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
        Ok(out)
    }
}

/// Passes bracket strings through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl Canonicalizer for Verbatim {
    fn canonicalize(&self, bracketed: &str) -> Result<String, NotationError> {
        Ok(bracketed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_tidies_whitespace() {
        let canon = StructuralCanonicalizer;
        assert_eq!(canon.canonicalize("a( bc)").unwrap(), "a(bc)");
        assert_eq!(
            canon.canonicalize("  p  ∨ ( q ∧  r ) ").unwrap(),
            "p ∨ (q ∧ r)"
        );
    }

    #[test]
    fn structural_keeps_nesting() {
        let canon = StructuralCanonicalizer;
        assert_eq!(canon.canonicalize("(p)(q)").unwrap(), "(p)(q)");
        assert_eq!(canon.canonicalize("a.(b)").unwrap(), "a.(b)");
    }

    #[test]
    fn structural_rejects_unbalanced() {
        let canon = StructuralCanonicalizer;
        assert!(canon.canonicalize("a((b)").unwrap_err().is_unbalanced());
    }

    #[test]
    fn verbatim_is_identity() {
        assert_eq!(Verbatim.canonicalize(" a( b) ").unwrap(), " a( b) ");
        assert_eq!(Verbatim.canonicalize("a)").unwrap(), "a)");
    }
}
