//! Church's single-dot notation
//!
//! Reading expands the dots and canonicalizes the resulting bracket string. Writing
//! canonicalizes first so the compressor always sees a balanced, tidy input.

use crate::canonical::{Canonicalizer, StructuralCanonicalizer};
use crate::church::{compress, expand};
use crate::error::NotationError;
use crate::notation::Notation;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChurchNotation {
    canonicalizer: Arc<dyn Canonicalizer>,
}

impl ChurchNotation {
    pub fn new(canonicalizer: Arc<dyn Canonicalizer>) -> Self {
        Self { canonicalizer }
    }
}

impl Default for ChurchNotation {
    fn default() -> Self {
        Self::new(Arc::new(StructuralCanonicalizer))
    }
}

impl Notation for ChurchNotation {
    fn name(&self) -> &str {
        "church"
    }

    fn description(&self) -> &str {
        "Church's single-dot notation"
    }

    fn file_extensions(&self) -> &[&str] {
        &["church", "dots"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<String, NotationError> {
        self.canonicalizer.canonicalize(&expand(source))
    }

    fn serialize(&self, bracketed: &str) -> Result<String, NotationError> {
        compress(&self.canonicalizer.canonicalize(bracketed)?)
    }
}
