//! Shared configuration loader for the dots toolchain.
//!
//! `defaults/dots.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DotsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use dots_core::{Canonicalizer, NotationRegistry, StructuralCanonicalizer, Verbatim};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

const DEFAULT_TOML: &str = include_str!("../defaults/dots.default.toml");

/// Top-level configuration consumed by dots applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DotsConfig {
    pub convert: ConvertConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Conversion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub from: String,
    pub to: String,
    pub canonicalize: bool,
}

impl ConvertConfig {
    /// The canonicalizer selected by `convert.canonicalize`.
    pub fn canonicalizer(&self) -> Arc<dyn Canonicalizer> {
        if self.canonicalize {
            Arc::new(StructuralCanonicalizer)
        } else {
            Arc::new(Verbatim)
        }
    }
}

impl From<&ConvertConfig> for NotationRegistry {
    fn from(config: &ConvertConfig) -> Self {
        NotationRegistry::with_canonicalizer(config.canonicalizer())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub trailing_newline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DotsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DotsConfig, ConfigError> {
    Loader::new().build()
}
