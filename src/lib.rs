//! # lectex
//!
//! Precompiler for LaTeX lecture notes.
//!
//! Lecture notes are authored as standalone documents, one per lecture. Before
//! the course book is typeset they are rewritten into chapter-level fragments:
//! the preamble is dropped, headings are promoted one level, figure references
//! are repointed at the collected asset tree, and the `\lecture` command is
//! restructured around the chapter boundary. A final linting pass reports the
//! authoring mistakes that keep coming back.
//!
//! The pipeline works on plain text with regex and brace scanning; it never
//! builds a LaTeX syntax tree. See the [`precompile`] module for the stage
//! breakdown.

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod lecture_info;
pub mod precompile;
pub mod scan;
pub mod template;
