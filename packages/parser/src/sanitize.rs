//! Opaque-Span Extraction
//!
//! Lifts string literals and block comments out of the source so that the
//! structural scans that follow never see the punctuation inside them.

use crate::chars::{CR, LF, MARKER_CLOSE, MARKER_OPEN, REPLACEMENT, SLASH};
use crate::placeholder::{PlaceholderKind, PlaceholderTable};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Double- or single-quoted string (backslash escapes any character,
/// newlines included), or a `/* ... */` comment.
static STRINGS_AND_COMMENTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:\\[\s\S]|[^"])*"|'(?:\\[\s\S]|[^'])*'|/\*[\s\S]*?\*/"#).unwrap()
});

/// Normalize line endings, hide strings and comments behind markers, and drop
/// blank lines.
pub fn extract_opaque_spans(source: &str, table: &mut PlaceholderTable) -> String {
    let normalized = preprocess(source);
    let before = table.len();

    let hidden = STRINGS_AND_COMMENTS_RE.replace_all(&normalized, |caps: &Captures| {
        let span = &caps[0];
        let kind = if span.starts_with(SLASH) {
            PlaceholderKind::Comment
        } else {
            PlaceholderKind::Opaque
        };
        table.push(kind, span)
    });

    tracing::trace!(spans = table.len() - before, "extracted strings and comments");

    hidden
        .split(LF)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `\r\n` to `\n`, and the two marker delimiters to U+FFFD so no input
/// character can be read as part of a placeholder.
fn preprocess(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            CR if chars.peek() == Some(&LF) => {}
            MARKER_OPEN | MARKER_CLOSE => out.push(REPLACEMENT),
            _ => out.push(ch),
        }
    }
    out
}
