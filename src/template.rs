//! LaTeX template embedding.
//!
//! The compiled book wraps every precompiled lecture in a fixed template
//! carrying the preamble and document environment. The template is plain
//! text with a single `{{content}}` placeholder; rendering substitutes the
//! precompiled fragment for it.

use std::fmt;

/// Placeholder the document text is substituted for.
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// A validated template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

/// Construction errors for [`Template`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template has no `{{content}}` placeholder.
    MissingPlaceholder,
    /// The template has more than one placeholder.
    DuplicatePlaceholder(usize),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MissingPlaceholder => {
                write!(f, "template has no {} placeholder", CONTENT_PLACEHOLDER)
            }
            TemplateError::DuplicatePlaceholder(n) => {
                write!(f, "template has {} {} placeholders, expected exactly one", n, CONTENT_PLACEHOLDER)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

impl Template {
    /// Validate that `source` carries exactly one placeholder.
    pub fn new(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        match source.matches(CONTENT_PLACEHOLDER).count() {
            0 => Err(TemplateError::MissingPlaceholder),
            1 => Ok(Template { source }),
            n => Err(TemplateError::DuplicatePlaceholder(n)),
        }
    }

    /// Substitute `content` for the placeholder.
    pub fn render(&self, content: &str) -> String {
        self.source.replacen(CONTENT_PLACEHOLDER, content, 1)
    }
}
