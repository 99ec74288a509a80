//! Course configuration loading.
//!
//! `defaults/lectex.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync. Course repositories layer their own
//! file on top of those defaults via [`Loader`] before deserializing into
//! [`CourseConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/lectex.default.toml");

/// Top-level configuration consumed by the precompiler.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    pub course: CourseSection,
    pub precompile: PrecompileSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseSection {
    pub language: Language,
}

/// Knobs of the precompilation pipeline itself.
#[derive(Debug, Clone, Deserialize)]
pub struct PrecompileSection {
    /// Environments whose content the spacing correction never touches.
    pub no_touch_environments: Vec<String>,
}

/// Language the course is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
}

impl Language {
    /// Spacing convention before `; : ! ?` for this language.
    pub fn spacing_rule(self) -> SpacingRule {
        match self {
            Language::English => SpacingRule::Remove,
            // French typography puts a non-breaking space before double
            // punctuation. Insertion is currently a no-op in the normalizer;
            // the mapping stays here so the ruleset remains configurable.
            Language::French => SpacingRule::NonBreakingInsert,
        }
    }
}

/// How spaces before punctuation are treated outside no-touch environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpacingRule {
    /// Leave lines untouched.
    None,
    /// Remove a space or `~` directly before the punctuation mark.
    Remove,
    /// Insert a non-breaking space before the mark. Reserved: the current
    /// ruleset treats this as a no-op.
    NonBreakingInsert,
}

/// Helper for layering course overrides over the built-in defaults.
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<CourseConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
