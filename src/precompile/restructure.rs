//! Standalone-document to chapter-fragment restructuring.
//!
//! A lecture source is a complete LaTeX document; the compiled book wants a
//! chapter-level fragment. The [`Restructurer`] strips everything outside
//! the document environment, promotes headings one level, repoints figure
//! references at the collected asset tree and restructures the `\lecture`
//! command around the chapter boundary.
//!
//! Step order matters: heading promotion must run before the
//! chapter-after-lecture rewrite (which looks for `\chapter`), and the
//! summary is emptied last because every rewrite invalidates previously
//! computed offsets. Spans are therefore recomputed from scratch in each
//! step.

use crate::diagnostics::Diagnostics;
use crate::document::Document;
use crate::scan;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

use super::PrecompileError;

const BEGIN_DOCUMENT: &str = r"\begin{document}";
const END_DOCUMENT: &str = r"\end{document}";

/// One labeled pass over all heading commands, deepest name first, so a
/// rewritten occurrence is never matched again: `\subsection` becomes
/// `\section` without the result being promoted a second time.
static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\(subsubsection|subsection|section)\b").expect("heading pattern is valid")
});

static CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\chapter\b").expect("chapter pattern is valid"));

/// First pipeline stage. Wraps the current [`Document`] together with the
/// source path used to attribute errors and diagnostics.
#[derive(Debug, Clone)]
pub struct Restructurer {
    doc: Document,
    path: PathBuf,
}

impl Restructurer {
    pub fn new(doc: Document, path: impl Into<PathBuf>) -> Self {
        Restructurer {
            doc,
            path: path.into(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Run all restructuring steps in order.
    pub fn full_restructure(
        self,
        asset_paths: &[PathBuf],
        diagnostics: &mut Diagnostics,
    ) -> Result<Document, PrecompileError> {
        Ok(self
            .remove_before_begin_document()?
            .remove_after_end_document()?
            .remove_make_title()
            .promote_heading_levels()
            .relocate_assets(asset_paths, diagnostics)
            .mark_chapter_after_lecture()
            .clear_lecture_summary()
            .into_document())
    }

    fn replace(self, text: String) -> Self {
        Restructurer {
            doc: Document::new(text),
            path: self.path,
        }
    }

    /// Keep only the text after `\begin{document}`.
    pub fn remove_before_begin_document(self) -> Result<Self, PrecompileError> {
        match self.doc.as_str().find(BEGIN_DOCUMENT) {
            Some(pos) => {
                let body = self.doc.as_str()[pos + BEGIN_DOCUMENT.len()..].to_string();
                Ok(self.replace(body))
            }
            None => Err(PrecompileError::MissingMarker {
                marker: BEGIN_DOCUMENT,
                path: self.path,
            }),
        }
    }

    /// Keep only the text before `\end{document}`.
    pub fn remove_after_end_document(self) -> Result<Self, PrecompileError> {
        match self.doc.as_str().find(END_DOCUMENT) {
            Some(pos) => {
                let body = self.doc.as_str()[..pos].to_string();
                Ok(self.replace(body))
            }
            None => Err(PrecompileError::MissingMarker {
                marker: END_DOCUMENT,
                path: self.path,
            }),
        }
    }

    /// Drop every `\maketitle`; the book renders its own front matter.
    pub fn remove_make_title(self) -> Self {
        let text = self.doc.as_str().replace(r"\maketitle", "");
        self.replace(text)
    }

    /// Promote headings one level: `\section` to `\chapter`, `\subsection`
    /// to `\section`, `\subsubsection` to `\subsection`.
    pub fn promote_heading_levels(self) -> Self {
        let text = HEADING
            .replace_all(self.doc.as_str(), |caps: &Captures| match &caps[1] {
                "section" => r"\chapter".to_string(),
                "subsection" => r"\section".to_string(),
                "subsubsection" => r"\subsection".to_string(),
                other => format!("\\{}", other),
            })
            .into_owned();
        self.replace(text)
    }

    /// Repoint brace-enclosed asset names at the collected asset tree.
    ///
    /// `a/b/c/pic.png` turns every `{pic.png}` into `{c/pic.png}` (forward
    /// slashes regardless of the input separator). An asset never referenced
    /// in the text is reported and skipped.
    pub fn relocate_assets(self, asset_paths: &[PathBuf], diagnostics: &mut Diagnostics) -> Self {
        let mut text = self.doc.as_str().to_string();
        for asset_path in asset_paths {
            let Some(relocated) = relocated_reference(asset_path) else {
                continue;
            };
            let Some(name) = asset_path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let needle = format!("{{{}}}", name);
            if !text.contains(&needle) {
                diagnostics.warn(
                    "asset in folder but not referenced in the latex file",
                    asset_path,
                );
                continue;
            }
            text = text.replace(&needle, &format!("{{{}}}", relocated));
        }
        self.replace(text)
    }

    /// When nothing but whitespace separates the `\lecture` summary from the
    /// first `\chapter`, insert `\cleardoublepage` before `\lecture` and
    /// rename that chapter to `\chapterafterlecture` so the renderer can
    /// style a chapter directly following front matter differently.
    ///
    /// Any intervening content means the author already separates the two;
    /// the text is left alone.
    pub fn mark_chapter_after_lecture(self) -> Self {
        let text = self.doc.as_str();
        let Some(spans) = scan::locate_lecture(text) else {
            return self;
        };
        let Some(first_chapter) = scan::find_command(text, "chapter") else {
            return self;
        };
        if scan::has_content_between(text, spans.summary_close + 1, first_chapter) {
            return self;
        }
        let mut text = text.to_string();
        text.insert_str(spans.command_start, "\\cleardoublepage\n");
        let text = CHAPTER.replace(&text, r"\chapterafterlecture").into_owned();
        self.replace(text)
    }

    /// Empty the summary argument, collapsing to `\lecture{Title}{}`.
    ///
    /// Spans are recomputed here; offsets from earlier steps are stale after
    /// the `\cleardoublepage` insertion.
    pub fn clear_lecture_summary(self) -> Self {
        let text = self.doc.as_str();
        let Some(spans) = scan::locate_lecture(text) else {
            return self;
        };
        let mut cleared = String::with_capacity(text.len());
        cleared.push_str(&text[..spans.summary_open + 1]);
        cleared.push_str(&text[spans.summary_close..]);
        self.replace(cleared)
    }
}

/// Path of an asset relative to its grandparent directory: the immediate
/// parent segment plus the filename, joined with a forward slash.
fn relocated_reference(asset_path: &Path) -> Option<String> {
    let name = asset_path.file_name()?.to_str()?;
    let parent = asset_path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str());
    Some(match parent {
        Some(parent) => format!("{}/{}", parent, name),
        None => name.to_string(),
    })
}
