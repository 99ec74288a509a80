//! End-to-end pipeline tests.

use lectex::config::Loader;
use lectex::lecture_info::LectureInfo;
use lectex::precompile::{full_precompile, PrecompileError};
use lectex::template::Template;
use std::path::{Path, PathBuf};

const LECTURE: &str = "\\documentclass{article}\n\
\\begin{document}\n\
\\maketitle\n\
\\lecture{Fourier Series}{\\begin{itemize}[left=0pt]\\item Basics\\end{itemize}}\n\
\\section{Motivation}\n\
A function (periodic) can be decomposed ; see {spectrum.png}.\n\
\\subsection{Definitions}\n\
\\end{document}\n";

fn template() -> Template {
    Template::new("\\documentclass{book}\n\\begin{document}\n{{content}}\n\\end{document}\n")
        .unwrap()
}

#[test]
fn test_full_precompile_happy_path() {
    let config = Loader::new().build().unwrap();
    let assets = vec![PathBuf::from("course/Lecture05/spectrum.png")];
    let info = LectureInfo::from_latex(LECTURE);
    let output = full_precompile(
        LECTURE,
        Path::new("Lecture05/notes.tex"),
        &assets,
        info.as_ref(),
        &template(),
        &config,
    )
    .unwrap();

    let text = output.document.as_str();
    // Wrapped in the template, body between the template's own markers.
    assert!(text.starts_with("\\documentclass{book}\n\\begin{document}\n"));
    assert!(text.ends_with("\\end{document}\n"));
    // Restructured: promoted heading, relocated asset, emptied summary.
    assert!(text.contains("\\cleardoublepage\n\\lecture{Fourier Series}{}"));
    assert!(text.contains("\\chapterafterlecture{Motivation}"));
    assert!(text.contains("\\section{Definitions}"));
    assert!(text.contains("{Lecture05/spectrum.png}"));
    assert!(!text.contains("\\maketitle"));
    // Normalized: space before punctuation removed.
    assert!(text.contains("decomposed; see"));
    // The bare parenthesis pair is balanced and the summary is well formed.
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_missing_marker_aborts_with_file() {
    let config = Loader::new().build().unwrap();
    let result = full_precompile(
        "no document environment",
        Path::new("Lecture07/notes.tex"),
        &[],
        None,
        &template(),
        &config,
    );
    match result {
        Err(PrecompileError::MissingMarker { marker, path }) => {
            assert_eq!(marker, "\\begin{document}");
            assert_eq!(path, PathBuf::from("Lecture07/notes.tex"));
        }
        other => panic!("expected a missing-marker error, got {:?}", other),
    }
}

#[test]
fn test_diagnostics_flow_out_of_the_pipeline() {
    let config = Loader::new().build().unwrap();
    let latex = "\\begin{document}\n\\lecture{}{}\n\\later{fix}\n\\end{document}\n";
    let info = LectureInfo::from_latex(latex);
    let output = full_precompile(
        latex,
        Path::new("notes.tex"),
        &[PathBuf::from("a/b/missing.png")],
        info.as_ref(),
        &template(),
        &config,
    )
    .unwrap();
    assert!(output.diagnostics.mentions("not referenced"));
    assert!(output.diagnostics.mentions("note for later"));
    assert!(output.diagnostics.mentions("Empty title"));
    assert!(output.diagnostics.mentions("Empty summary"));
    assert!(output.diagnostics.mentions("left=0pt"));
}
