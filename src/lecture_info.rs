//! Lecture metadata extracted from the raw source.

use crate::scan;

/// Title and summary carried by a `\lecture{title}{summary}` invocation.
///
/// Extracted from the raw source before restructuring runs (the pipeline
/// later empties the summary argument). Consumed by the diagnostic scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureInfo {
    pub title: String,
    pub summary: String,
}

impl LectureInfo {
    /// Extract metadata from the first `\lecture` invocation, or `None` when
    /// the document has none.
    pub fn from_latex(latex: &str) -> Option<Self> {
        let spans = scan::locate_lecture(latex)?;
        Some(LectureInfo {
            title: latex[spans.title_open + 1..spans.title_close].to_string(),
            summary: latex[spans.summary_open + 1..spans.summary_close].to_string(),
        })
    }
}
