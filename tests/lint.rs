//! Integration tests for the diagnostic scan.

use lectex::diagnostics::Diagnostics;
use lectex::document::Document;
use lectex::lecture_info::LectureInfo;
use lectex::precompile::Normalizer;
use std::path::Path;

fn lint(latex: &str) -> Diagnostics {
    lint_with(latex, None)
}

fn lint_with(latex: &str, info: Option<&LectureInfo>) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    Normalizer::new(Document::new(latex)).lint(info, Path::new("notes.tex"), &mut diagnostics);
    diagnostics
}

#[test]
fn test_clean_text_has_no_findings() {
    assert!(lint("A perfectly fine sentence.").is_empty());
}

#[test]
fn test_part_is_reported() {
    assert!(lint("\\part{Introduction}").mentions("\\part is used"));
}

#[test]
fn test_partial_is_not_part() {
    assert!(lint("\\partial x over \\partial t").is_empty());
}

#[test]
fn test_sized_delimiters_do_not_skew_parenthesis_balance() {
    assert!(lint("\\left( 1, 3 \\right)").is_empty());
}

#[test]
fn test_parenthesis_mismatch_reports_both_counts() {
    let diagnostics = lint("only ( here");
    assert!(diagnostics.mentions("1 opening parenthesis and 0 closing parenthesis."));
}

#[test]
fn test_balanced_bare_parentheses_are_fine() {
    assert!(lint("a (small) remark").is_empty());
}

#[test]
fn test_later_marker_reported() {
    assert!(lint("\\later{tighten this proof}").mentions("note for later"));
}

#[test]
fn test_unexpanded_marker_reported() {
    assert!(lint("\\unexpanded{\\foo}").mentions("unexpanded"));
}

#[test]
fn test_bmatrix_fragment_reported() {
    assert!(lint("\\begin{bmatrix} 1 \\end{bmatrix}").mentions("bmatrix"));
}

#[test]
fn test_default_equation_label_reported() {
    assert!(lint("\\label{eq:label}").mentions("eq:label"));
}

#[test]
fn test_fourrier_is_case_sensitive() {
    assert!(lint("the Fourrier transform").mentions("Fourrier"));
    assert!(lint("the fourrier transform").is_empty());
}

#[test]
fn test_rotationel_is_case_insensitive() {
    assert!(lint("le Rotationel").mentions("rotationel"));
    assert!(lint("le rotationel").mentions("rotationel"));
}

#[test]
fn test_decorated_command_with_subscript_reported() {
    let diagnostics = lint("\\hat{x_i}");
    assert!(diagnostics.mentions("Hat containing underscore."));
}

#[test]
fn test_each_decoration_command_is_named() {
    assert!(lint("\\widetilde{a_b}").mentions("Widetilde containing underscore."));
    assert!(lint("\\bvec{v_1}").mentions("Bvec containing underscore."));
    assert!(lint("\\bhat{n_x}").mentions("Bhat containing underscore."));
}

#[test]
fn test_decoration_without_subscript_is_fine() {
    assert!(lint("\\hat{x} and \\widetilde{y}").is_empty());
}

#[test]
fn test_empty_title_and_summary_reported() {
    let info = LectureInfo {
        title: "  ".to_string(),
        summary: String::new(),
    };
    let diagnostics = lint_with("text", Some(&info));
    assert!(diagnostics.mentions("Empty title"));
    assert!(diagnostics.mentions("Empty summary"));
}

#[test]
fn test_enumerate_in_summary_reported() {
    let info = LectureInfo {
        title: "T".to_string(),
        summary: "\\begin{enumerate}\\item a\\end{enumerate}".to_string(),
    };
    assert!(lint_with("text", Some(&info)).mentions("Enumerate in summary"));
}

#[test]
fn test_summary_without_left_margin_option_reported() {
    let info = LectureInfo {
        title: "T".to_string(),
        summary: "\\begin{itemize}\\item a\\end{itemize}".to_string(),
    };
    assert!(lint_with("text", Some(&info)).mentions("left=0pt"));
}

#[test]
fn test_well_formed_summary_is_quiet() {
    let info = LectureInfo {
        title: "T".to_string(),
        summary: "\\begin{itemize}[left=0pt]\\item a\\end{itemize}".to_string(),
    };
    assert!(lint_with("text", Some(&info)).is_empty());
}
