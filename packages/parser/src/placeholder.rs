//! Placeholder Table
//!
//! Append-only side table of text spans lifted out of the working source.
//! Each span is replaced in the source by a marker token:
//!
//! ```text
//! \0 [kind tag] index \u{1}
//! ```
//!
//! where the kind tag is `b` for brace blocks, `c` for comments and absent
//! for string literals. The tag is a letter and the index is decimal, so the
//! two never run together, and distinct open and close delimiters keep a
//! marker's tail from reading as the head of the next one.

use crate::chars::{MARKER_CLOSE, MARKER_OPEN};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Any marker, capturing the kind tag and the index.
static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x00([bc]?)(\d+)\x01").unwrap());

static COMMENT_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x00c\d+\x01").unwrap());

/// Kind of a lifted span, encoded in its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Quoted string literal.
    Opaque,
    /// `/* ... */` block comment.
    Comment,
    /// `{ ... }` block, braces included.
    Block,
}

impl PlaceholderKind {
    pub fn tag(self) -> Option<char> {
        match self {
            PlaceholderKind::Opaque => None,
            PlaceholderKind::Comment => Some('c'),
            PlaceholderKind::Block => Some('b'),
        }
    }
}

/// Build the marker token for the entry at `index`.
pub fn marker(kind: PlaceholderKind, index: usize) -> String {
    let mut out = String::with_capacity(8);
    out.push(MARKER_OPEN);
    if let Some(tag) = kind.tag() {
        out.push(tag);
    }
    out.push_str(&index.to_string());
    out.push(MARKER_CLOSE);
    out
}

/// Remove every comment marker from `text`.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT_MARKER_RE.replace_all(text, "")
}

/// The first comment marker in `text`, if any.
pub fn first_comment(text: &str) -> Option<&str> {
    COMMENT_MARKER_RE.find(text).map(|m| m.as_str())
}

/// Ordered store of lifted spans for a single parse.
#[derive(Debug, Default)]
pub struct PlaceholderTable {
    entries: Vec<String>,
}

impl PlaceholderTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store `text` and return the marker that stands in for it.
    pub fn push(&mut self, kind: PlaceholderKind, text: impl Into<String>) -> String {
        self.entries.push(text.into());
        marker(kind, self.entries.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Replace every marker in `text`, including markers nested inside the
    /// restored spans, until the original text is back.
    ///
    /// Markers with an index the table does not hold are left in place.
    pub fn resolve(&self, text: &str) -> String {
        if !text.contains(MARKER_OPEN) {
            return text.to_string();
        }
        MARKER_RE
            .replace_all(text, |caps: &Captures| match self.lookup(caps) {
                Some(entry) if entry.contains(MARKER_OPEN) => self.resolve(entry),
                Some(entry) => entry.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    fn lookup(&self, caps: &Captures) -> Option<&str> {
        caps.get(2)
            .and_then(|m| m.as_str().parse::<usize>().ok())
            .and_then(|index| self.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_carry_kind_tags() {
        assert_eq!(marker(PlaceholderKind::Opaque, 3), "\u{0}3\u{1}");
        assert_eq!(marker(PlaceholderKind::Comment, 12), "\u{0}c12\u{1}");
        assert_eq!(marker(PlaceholderKind::Block, 0), "\u{0}b0\u{1}");
    }

    #[test]
    fn push_returns_marker_for_new_index() {
        let mut table = PlaceholderTable::new();
        assert_eq!(table.push(PlaceholderKind::Opaque, "'a'"), "\u{0}0\u{1}");
        assert_eq!(table.push(PlaceholderKind::Block, "{x}"), "\u{0}b1\u{1}");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1), Some("{x}"));
        assert_eq!(table.get(2), None);
    }

    #[test]
    fn resolve_restores_nested_spans() {
        let mut table = PlaceholderTable::new();
        let string = table.push(PlaceholderKind::Opaque, "\"s\"");
        let inner = table.push(PlaceholderKind::Block, format!("{{a:{}}}", string));
        let outer = table.push(PlaceholderKind::Block, format!("{{b{}}}", inner));

        assert_eq!(table.resolve(&format!("x{}", outer)), "x{b{a:\"s\"}}");
        assert_eq!(table.resolve("no markers"), "no markers");
    }

    #[test]
    fn unknown_index_is_left_alone() {
        let table = PlaceholderTable::new();
        assert_eq!(table.resolve("a\u{0}b7\u{1}"), "a\u{0}b7\u{1}");
    }

    #[test]
    fn comment_markers_are_found_and_stripped() {
        let text = "\u{0}c0\u{1} a \u{0}1\u{1}\u{0}c2\u{1}";
        assert_eq!(first_comment(text), Some("\u{0}c0\u{1}"));
        assert_eq!(strip_comments(text), " a \u{0}1\u{1}");
        assert_eq!(first_comment("plain"), None);
    }
}
