//! Rule-based diagnostic scan over the final document text.
//!
//! Each check is stateless and independent of the others; the scan never
//! alters the text. Findings are advisory and go through the
//! [`Diagnostics`] collector.

use crate::diagnostics::Diagnostics;
use crate::lecture_info::LectureInfo;
use crate::scan;
use std::path::Path;

/// Accent/decoration commands whose argument should never carry a subscript;
/// the decoration belongs on the base symbol, not the indexed expression.
const DECORATION_COMMANDS: [&str; 4] = ["hat", "bvec", "bhat", "widetilde"];

/// Run every check against `latex`, attributing findings to `latex_path`.
pub fn scan_document(
    latex: &str,
    lecture_info: Option<&LectureInfo>,
    latex_path: &Path,
    diagnostics: &mut Diagnostics,
) {
    check_part(latex, latex_path, diagnostics);
    check_parentheses(latex, latex_path, diagnostics);
    check_leftovers(latex, latex_path, diagnostics);
    check_spelling(latex, latex_path, diagnostics);
    check_decorations(latex, latex_path, diagnostics);
    if let Some(info) = lecture_info {
        check_lecture_info(info, latex_path, diagnostics);
    }
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Chapters are the top level of a lecture; `\part` never belongs in one.
/// Every `\partial` contains `\part` as a substring, so the two counts are
/// compared instead of counting `\part` alone.
fn check_part(latex: &str, path: &Path, diagnostics: &mut Diagnostics) {
    if count(latex, r"\part") != count(latex, r"\partial") {
        diagnostics.warn(r"\part is used.", path);
    }
}

/// Parentheses are only counted in text: sized delimiters like
/// `\left(1, 3\right]` would skew the balance otherwise.
fn check_parentheses(latex: &str, path: &Path, diagnostics: &mut Diagnostics) {
    let opening = count(latex, "(") - count(latex, r"\left(") - count(latex, r"\right(");
    let closing = count(latex, ")") - count(latex, r"\left)") - count(latex, r"\right)");
    if opening != closing {
        diagnostics.warn(
            format!(
                "{} opening parenthesis and {} closing parenthesis.",
                opening, closing
            ),
            path,
        );
    }
}

/// Authoring markers that must be resolved before the book is compiled.
fn check_leftovers(latex: &str, path: &Path, diagnostics: &mut Diagnostics) {
    if latex.contains(r"\later") {
        diagnostics.warn("A note for later was left.", path);
    }
    if latex.contains(r"\unexpanded") {
        diagnostics.warn("An unexpanded was kept.", path);
    }
    if latex.contains("bmatrix") {
        diagnostics.warn("A bmatrix was left.", path);
    }
    if latex.contains("eq:label") {
        diagnostics.warn("A default label eq:label was left.", path);
    }
}

fn check_spelling(latex: &str, path: &Path, diagnostics: &mut Diagnostics) {
    if latex.contains("Fourrier") {
        diagnostics.warn("'Fourrier' instead of 'Fourier'.", path);
    }
    if latex.to_lowercase().contains("rotationel") {
        diagnostics.warn("'rotationel' instead of 'rotationnel'.", path);
    }
}

fn check_decorations(latex: &str, path: &Path, diagnostics: &mut Diagnostics) {
    for command in DECORATION_COMMANDS {
        if scan::command_arg_contains(latex, command, "_") {
            diagnostics.warn(format!("{} containing underscore.", capitalize(command)), path);
        }
    }
}

fn check_lecture_info(info: &LectureInfo, path: &Path, diagnostics: &mut Diagnostics) {
    if info.title.trim().is_empty() {
        diagnostics.warn("Empty title in lecture command.", path);
    }
    if info.summary.trim().is_empty() {
        diagnostics.warn("Empty summary in lecture command.", path);
    }
    if info.summary.contains(r"\begin{enumerate}") {
        diagnostics.warn("Enumerate in summary, should use itemize.", path);
    }
    if !info.summary.contains(r"\begin{itemize}[left=0pt]") {
        diagnostics.warn("Should use itemize with left=0pt.", path);
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
