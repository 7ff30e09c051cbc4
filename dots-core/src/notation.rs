//! Notation trait definition
//!
//! This module defines the core Notation trait that all notation implementations must
//! implement. Every notation converts through the fully bracketed form: parsing turns
//! source text into a bracket string, serializing turns a bracket string into source text.

use crate::error::NotationError;

/// Trait for formula notations
///
/// Implementors provide conversion between their own spelling of a formula and the
/// fully bracketed string. Notations can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Notation for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, bracketed: &str) -> Result<String, NotationError> {
///         Ok(bracketed.to_uppercase())
///     }
/// }
/// ```
pub trait Notation: Send + Sync {
    /// The name of this notation (e.g., "brackets", "church")
    fn name(&self) -> &str;

    /// Optional description of this notation
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this notation, without the leading dot.
    ///
    /// Used for automatic notation detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this notation supports parsing (source → bracket string)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this notation supports serialization (bracket string → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a fully bracketed string
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<String, NotationError> {
        Err(NotationError::NotSupported(format!(
            "Notation '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a fully bracketed string in this notation
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _bracketed: &str) -> Result<String, NotationError> {
        Err(NotationError::NotSupported(format!(
            "Notation '{}' does not support serialization",
            self.name()
        )))
    }
}
