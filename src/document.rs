//! Immutable document value passed between precompilation steps.

use std::fmt;

/// A LaTeX source document.
///
/// Every precompilation step consumes a `Document` and produces a new one;
/// no step mutates its input. The wrapper keeps stage boundaries explicit
/// and makes the pipeline trivially re-runnable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn new(source: impl Into<String>) -> Self {
        Document(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Document {
    fn from(source: &str) -> Self {
        Document(source.to_string())
    }
}

impl From<String> for Document {
    fn from(source: String) -> Self {
        Document(source)
    }
}
