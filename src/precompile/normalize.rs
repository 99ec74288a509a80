//! Whitespace normalization, template embedding and linting.
//!
//! Second pipeline stage. Runs after restructuring but does not depend on
//! it; any LaTeX fragment can be normalized standalone.

use crate::config::{CourseConfig, SpacingRule};
use crate::diagnostics::Diagnostics;
use crate::document::Document;
use crate::lecture_info::LectureInfo;
use crate::template::Template;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use super::lint;

/// Punctuation marks the spacing correction applies to.
const PUNCTUATION: [char; 4] = [';', ':', '!', '?'];

static BEGIN_ENV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\begin\{(.*)\}").expect("begin pattern is valid"));
static END_ENV: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\end\{(.*)\}").expect("end pattern is valid"));

/// Second pipeline stage.
#[derive(Debug, Clone)]
pub struct Normalizer {
    doc: Document,
}

impl Normalizer {
    pub fn new(doc: Document) -> Self {
        Normalizer { doc }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Run all normalization steps, then the diagnostic scan, and return the
    /// final document.
    pub fn full_normalize(
        self,
        config: &CourseConfig,
        template: &Template,
        lecture_info: Option<&LectureInfo>,
        latex_path: &Path,
        diagnostics: &mut Diagnostics,
    ) -> Document {
        let normalized = self
            .correct_spaces(
                config.course.language.spacing_rule(),
                &config.precompile.no_touch_environments,
            )
            .strip()
            .apply_template(template);
        normalized.lint(lecture_info, latex_path, diagnostics);
        normalized.into_document()
    }

    /// Apply the spacing rule to every line outside no-touch environments.
    ///
    /// Environment begin/end markers are assumed alone on their line; a
    /// nesting counter tracks how deep inside no-touch environments the scan
    /// currently is. An unmatched end marker clamps the counter at zero
    /// rather than letting it go negative.
    pub fn correct_spaces(self, rule: SpacingRule, no_touch_envs: &[String]) -> Self {
        let mut depth: usize = 0;
        let mut corrected = Vec::new();
        for line in self.doc.as_str().split('\n') {
            let begins_no_touch = BEGIN_ENV
                .captures(line)
                .is_some_and(|c| no_touch_envs.iter().any(|e| e == &c[1]));
            let ends_no_touch = END_ENV
                .captures(line)
                .is_some_and(|c| no_touch_envs.iter().any(|e| e == &c[1]));
            if begins_no_touch {
                depth += 1;
                corrected.push(line.to_string());
            } else if ends_no_touch {
                depth = depth.saturating_sub(1);
                corrected.push(line.to_string());
            } else if depth == 0 {
                corrected.push(correct_line(line, rule));
            } else {
                corrected.push(line.to_string());
            }
        }
        Normalizer::new(Document::new(corrected.join("\n")))
    }

    /// Trim leading and trailing whitespace of the whole document.
    pub fn strip(self) -> Self {
        let text = self.doc.as_str().trim().to_string();
        Normalizer::new(Document::new(text))
    }

    /// Substitute the document for the template's content placeholder.
    pub fn apply_template(self, template: &Template) -> Self {
        let text = template.render(self.doc.as_str());
        Normalizer::new(Document::new(text))
    }

    /// Run the read-only diagnostic scan against the current text.
    pub fn lint(
        &self,
        lecture_info: Option<&LectureInfo>,
        latex_path: &Path,
        diagnostics: &mut Diagnostics,
    ) {
        lint::scan_document(self.doc.as_str(), lecture_info, latex_path, diagnostics);
    }
}

fn correct_line(line: &str, rule: SpacingRule) -> String {
    match rule {
        SpacingRule::Remove => {
            let mut line = line.to_string();
            for mark in PUNCTUATION {
                line = line.replace(&format!(" {}", mark), &mark.to_string());
                line = line.replace(&format!("~{}", mark), &mark.to_string());
            }
            line
        }
        // Non-breaking-space insertion is a deliberate no-op in the current
        // ruleset; the variant is kept so call sites stay unchanged when it
        // gains an implementation.
        SpacingRule::NonBreakingInsert => line.to_string(),
        SpacingRule::None => line.to_string(),
    }
}
