//! Fully bracketed notation
//!
//! The pivot every other notation converts through. Reading and writing both just
//! canonicalize the string.

use crate::canonical::{Canonicalizer, StructuralCanonicalizer};
use crate::error::NotationError;
use crate::notation::Notation;
use std::sync::Arc;

/// Formulas with every scope written as explicit parentheses.
#[derive(Clone)]
pub struct BracketsNotation {
    canonicalizer: Arc<dyn Canonicalizer>,
}

impl BracketsNotation {
    pub fn new(canonicalizer: Arc<dyn Canonicalizer>) -> Self {
        Self { canonicalizer }
    }
}

impl Default for BracketsNotation {
    fn default() -> Self {
        Self::new(Arc::new(StructuralCanonicalizer))
    }
}

impl Notation for BracketsNotation {
    fn name(&self) -> &str {
        "brackets"
    }

    fn description(&self) -> &str {
        "Fully bracketed formulas"
    }

    fn file_extensions(&self) -> &[&str] {
        &["brk", "brackets"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<String, NotationError> {
        self.canonicalizer.canonicalize(source)
    }

    fn serialize(&self, bracketed: &str) -> Result<String, NotationError> {
        self.canonicalizer.canonicalize(bracketed)
    }
}
