//! Notation registry for notation discovery and selection
//!
//! This module provides a centralized registry for all available notations.
//! Notations can be registered and retrieved by name, and conversions between any two
//! registered notations go through the fully bracketed string.

use crate::canonical::{Canonicalizer, StructuralCanonicalizer};
use crate::error::NotationError;
use crate::notation::Notation;
use crate::notations::{BracketsNotation, ChurchNotation};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of formula notations
///
/// # Examples
///
/// ```ignore
/// let registry = NotationRegistry::default();
/// let dotted = registry.convert("(a(bc))", "brackets", "church")?;
/// assert_eq!(dotted, "a. bc");
/// ```
pub struct NotationRegistry {
    notations: HashMap<String, Box<dyn Notation>>,
}

impl NotationRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        NotationRegistry {
            notations: HashMap::new(),
        }
    }

    /// Register a notation
    ///
    /// If a notation with the same name already exists, it will be replaced.
    pub fn register<N: Notation + 'static>(&mut self, notation: N) {
        self.notations
            .insert(notation.name().to_string(), Box::new(notation));
    }

    /// Get a notation by name
    pub fn get(&self, name: &str) -> Result<&dyn Notation, NotationError> {
        self.notations
            .get(name)
            .map(|n| n.as_ref())
            .ok_or_else(|| NotationError::NotationNotFound(name.to_string()))
    }

    /// Check if a notation exists
    pub fn has(&self, name: &str) -> bool {
        self.notations.contains_key(name)
    }

    /// List all available notation names (sorted)
    pub fn list_notations(&self) -> Vec<String> {
        let mut names: Vec<_> = self.notations.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect notation from filename based on file extension
    pub fn detect_notation_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.notations
            .values()
            .find(|notation| notation.file_extensions().contains(&extension))
            .map(|notation| notation.name().to_string())
    }

    /// Parse source text in the given notation into a bracket string
    pub fn parse(&self, source: &str, notation: &str) -> Result<String, NotationError> {
        let n = self.get(notation)?;
        if !n.supports_parsing() {
            return Err(NotationError::NotSupported(format!(
                "Notation '{notation}' does not support parsing"
            )));
        }
        n.parse(source)
    }

    /// Serialize a bracket string in the given notation
    pub fn serialize(&self, bracketed: &str, notation: &str) -> Result<String, NotationError> {
        let n = self.get(notation)?;
        if !n.supports_serialization() {
            return Err(NotationError::NotSupported(format!(
                "Notation '{notation}' does not support serialization"
            )));
        }
        n.serialize(bracketed)
    }

    /// Convert source text from one notation to another
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, NotationError> {
        // Fail on an unknown target before doing any work.
        self.get(to)?;
        let bracketed = self.parse(source, from)?;
        tracing::debug!(from, to, bracketed = %bracketed, "converting notation");
        self.serialize(&bracketed, to)
    }

    /// Create a registry with the built-in notations sharing one canonicalizer
    pub fn with_canonicalizer(canonicalizer: Arc<dyn Canonicalizer>) -> Self {
        let mut registry = Self::new();

        registry.register(BracketsNotation::new(Arc::clone(&canonicalizer)));
        registry.register(ChurchNotation::new(canonicalizer));

        registry
    }

    /// Create a registry with default notations
    pub fn with_defaults() -> Self {
        Self::with_canonicalizer(Arc::new(StructuralCanonicalizer))
    }
}

impl Default for NotationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::Verbatim;

    // Write-only test notation
    struct Shouting;
    impl Notation for Shouting {
        fn name(&self) -> &str {
            "shouting"
        }
        fn description(&self) -> &str {
            "Upper-cased brackets"
        }
        fn file_extensions(&self) -> &[&str] {
            &["loud"]
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn serialize(&self, bracketed: &str) -> Result<String, NotationError> {
            Ok(bracketed.to_uppercase())
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = NotationRegistry::new();
        assert_eq!(registry.notations.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = NotationRegistry::new();
        registry.register(Shouting);

        assert!(registry.has("shouting"));
        assert_eq!(registry.list_notations(), vec!["shouting"]);
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = NotationRegistry::new();
        match registry.get("pm") {
            Err(NotationError::NotationNotFound(name)) => assert_eq!(name, "pm"),
            _ => panic!("Expected NotationNotFound error"),
        }
    }

    #[test]
    fn test_registry_replace_notation() {
        let mut registry = NotationRegistry::new();
        registry.register(Shouting);
        registry.register(Shouting);

        assert_eq!(registry.list_notations().len(), 1);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = NotationRegistry::default();
        assert_eq!(registry.list_notations(), vec!["brackets", "church"]);
    }

    #[test]
    fn test_convert_brackets_to_church() {
        let registry = NotationRegistry::default();
        assert_eq!(
            registry.convert("(a(bc))", "brackets", "church").unwrap(),
            "a. bc"
        );
    }

    #[test]
    fn test_convert_church_to_brackets() {
        let registry = NotationRegistry::default();
        assert_eq!(
            registry.convert("(p). q", "church", "brackets").unwrap(),
            "(p)(q)"
        );
    }

    #[test]
    fn test_convert_through_custom_writer() {
        let mut registry = NotationRegistry::default();
        registry.register(Shouting);
        assert_eq!(
            registry.convert("p. q", "church", "shouting").unwrap(),
            "P(Q)"
        );
    }

    #[test]
    fn test_parsing_unsupported() {
        let mut registry = NotationRegistry::new();
        registry.register(Shouting);
        match registry.parse("x", "shouting") {
            Err(NotationError::NotSupported(msg)) => assert!(msg.contains("parsing")),
            _ => panic!("Expected NotSupported error"),
        }
    }

    #[test]
    fn test_convert_unknown_target_fails_first() {
        let registry = NotationRegistry::default();
        match registry.convert("(a", "brackets", "pm") {
            Err(NotationError::NotationNotFound(name)) => assert_eq!(name, "pm"),
            other => panic!("Expected NotationNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_unbalanced_source() {
        let registry = NotationRegistry::default();
        let err = registry.convert("a)", "brackets", "church").unwrap_err();
        assert!(err.is_unbalanced());
    }

    #[test]
    fn test_with_verbatim_canonicalizer() {
        let registry = NotationRegistry::with_canonicalizer(Arc::new(Verbatim));
        assert_eq!(
            registry.convert("a. bc", "church", "brackets").unwrap(),
            "a( bc)"
        );
    }

    #[test]
    fn test_detect_notation_from_filename() {
        let mut registry = NotationRegistry::with_defaults();
        registry.register(Shouting);

        assert_eq!(
            registry.detect_notation_from_filename("formula.brk"),
            Some("brackets".to_string())
        );
        assert_eq!(
            registry.detect_notation_from_filename("/path/to/formula.church"),
            Some("church".to_string())
        );
        assert_eq!(
            registry.detect_notation_from_filename("formula.dots"),
            Some("church".to_string())
        );
        assert_eq!(
            registry.detect_notation_from_filename("formula.loud"),
            Some("shouting".to_string())
        );
        assert_eq!(registry.detect_notation_from_filename("formula.txt"), None);
        assert_eq!(registry.detect_notation_from_filename("formula"), None);
    }
}
