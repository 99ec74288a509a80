//! The precompilation pipeline.
//!
//! Two stages compose in sequence:
//!
//! 1. [`Restructurer`] turns a standalone lecture document into a
//!    chapter-level fragment: body extraction, heading promotion, asset
//!    relocation, `\lecture` restructuring.
//! 2. [`Normalizer`] applies spacing rules, trims the result, embeds it in
//!    the course template and runs the diagnostic scan.
//!
//! Each step consumes its stage value and returns a new one, so a pipeline
//! reads as a single chain:
//!
//! ```text
//! raw text -> Restructurer::full_restructure -> Normalizer::full_normalize
//!          -> final text + diagnostics
//! ```
//!
//! Only the two body-extraction steps can fail (a lecture without
//! `\begin{document}` / `\end{document}` markers cannot be embedded);
//! everything else records a diagnostic and carries on. [`full_precompile`]
//! wires both stages together.

pub mod lint;
pub mod normalize;
pub mod restructure;

pub use normalize::Normalizer;
pub use restructure::Restructurer;

use crate::config::CourseConfig;
use crate::diagnostics::Diagnostics;
use crate::document::Document;
use crate::lecture_info::LectureInfo;
use crate::template::Template;
use std::fmt;
use std::path::{Path, PathBuf};

/// Fatal pipeline errors.
///
/// Advisory findings never show up here; they go through
/// [`Diagnostics`](crate::diagnostics::Diagnostics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecompileError {
    /// A structural marker required for body extraction is absent.
    MissingMarker { marker: &'static str, path: PathBuf },
}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecompileError::MissingMarker { marker, path } => {
                write!(f, "no {} found in {}", marker, path.display())
            }
        }
    }
}

impl std::error::Error for PrecompileError {}

/// Result of a full pipeline run.
#[derive(Debug)]
pub struct PrecompileOutput {
    pub document: Document,
    pub diagnostics: Diagnostics,
}

/// Run both pipeline stages end to end.
///
/// `latex_path` is only used to attribute errors and diagnostics; the file
/// content is taken from `latex`. `lecture_info` should be extracted from
/// the raw source before calling (the pipeline empties the summary).
pub fn full_precompile(
    latex: &str,
    latex_path: &Path,
    asset_paths: &[PathBuf],
    lecture_info: Option<&LectureInfo>,
    template: &Template,
    config: &CourseConfig,
) -> Result<PrecompileOutput, PrecompileError> {
    let mut diagnostics = Diagnostics::new();
    let document = Restructurer::new(Document::new(latex), latex_path)
        .full_restructure(asset_paths, &mut diagnostics)?;
    let document = Normalizer::new(document).full_normalize(
        config,
        template,
        lecture_info,
        latex_path,
        &mut diagnostics,
    );
    Ok(PrecompileOutput {
        document,
        diagnostics,
    })
}
