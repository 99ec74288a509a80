//! Command and brace scanning primitives.
//!
//! The precompiler never parses LaTeX into a grammar tree; every structural
//! question it asks is answered here by linear scanning: locate a command
//! invocation, find the closing brace matching an opening one, check whether
//! a text span carries real content. All offsets are byte offsets into the
//! scanned text.

/// Byte spans of the first `\lecture{title}{summary}` invocation.
///
/// Offsets point at the braces themselves: `title_open..=title_close` covers
/// the first argument including its braces, likewise for the summary. The
/// spans are recomputed on demand; they go stale as soon as the text changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LectureSpans {
    pub command_start: usize,
    pub title_open: usize,
    pub title_close: usize,
    pub summary_open: usize,
    pub summary_close: usize,
}

/// Find the first invocation of `\name`, returning the offset of its
/// backslash.
///
/// A match is rejected when the command name continues with another letter,
/// so `find_command(text, "part")` does not stop on `\partial`.
pub fn find_command(text: &str, name: &str) -> Option<usize> {
    let needle = format!("\\{}", name);
    let mut from = 0;
    while let Some(pos) = text[from..].find(&needle) {
        let start = from + pos;
        let after = start + needle.len();
        let continues = text[after..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if !continues {
            return Some(start);
        }
        from = after;
    }
    None
}

/// Given the offset of an opening brace, return the offset of its matching
/// closing brace, accounting for nested braces.
///
/// Returns `None` when `open` does not sit on a `{` or the brace is never
/// closed.
pub fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// True when `text[start..end]` contains anything besides whitespace.
///
/// An empty or inverted range counts as no content.
pub fn has_content_between(text: &str, start: usize, end: usize) -> bool {
    if start >= end || end > text.len() {
        return false;
    }
    text[start..end].chars().any(|c| !c.is_whitespace())
}

/// True when any `\name{...}` invocation has an argument containing `needle`.
///
/// Invocations without a braced argument directly after the command name are
/// skipped.
pub fn command_arg_contains(text: &str, name: &str, needle: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = find_command(&text[from..], name) {
        let open = from + pos + name.len() + 1;
        match matching_brace(text, open) {
            Some(close) => {
                if text[open + 1..close].contains(needle) {
                    return true;
                }
                from = close + 1;
            }
            None => from = open,
        }
        if from >= text.len() {
            break;
        }
    }
    false
}

/// Locate the first `\lecture{...}{...}` invocation and compute the brace
/// spans of both arguments.
///
/// The two arguments must follow the command name directly, which is how the
/// lecture sources write it. Returns `None` when the command is absent or its
/// arguments are not brace-delimited.
pub fn locate_lecture(text: &str) -> Option<LectureSpans> {
    let command_start = find_command(text, "lecture")?;
    let title_open = command_start + "\\lecture".len();
    let title_close = matching_brace(text, title_open)?;
    let summary_open = title_close + 1;
    let summary_close = matching_brace(text, summary_open)?;
    Some(LectureSpans {
        command_start,
        title_open,
        title_close,
        summary_open,
        summary_close,
    })
}
