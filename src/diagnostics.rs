//! Diagnostic collection for the precompilation pipeline.
//!
//! Every advisory finding (unreferenced asset, leftover marker, spelling
//! mistake, ...) is recorded as a [`Diagnostic`] in an explicit
//! [`Diagnostics`] collector threaded through the pipeline. Keeping the
//! collector a plain value instead of a global sink keeps every step pure
//! and lets callers decide how findings are reported.
//!
//! Diagnostics are always advisory: none of them alters the transformed
//! text or aborts a run.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A single advisory finding.
///
/// `path` names the file the finding refers to, usually the lecture source
/// but for asset checks the asset itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub path: PathBuf,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning: {} ({})", self.message, self.path.display())
    }
}

/// Collector for the diagnostics of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an advisory finding.
    pub fn warn(&mut self, message: impl Into<String>, path: impl Into<PathBuf>) {
        self.diagnostics.push(Diagnostic {
            message: message.into(),
            path: path.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// True when some diagnostic message contains `fragment`.
    pub fn mentions(&self, fragment: &str) -> bool {
        self.diagnostics.iter().any(|d| d.message.contains(fragment))
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn("first", "a.tex");
        diagnostics.warn("second", "b.tex");
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn test_display_includes_path() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn("something odd", "notes/lecture01.tex");
        let rendered = diagnostics.iter().next().unwrap().to_string();
        assert_eq!(rendered, "warning: something odd (notes/lecture01.tex)");
    }
}
