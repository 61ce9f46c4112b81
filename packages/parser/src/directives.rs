//! Directive Extraction
//!
//! `@charset` and `@import` statements end at the first `;` and carry no
//! block, so they are pulled out of a segment before rule matching.

use crate::ast::Node;
use crate::placeholder::PlaceholderTable;
use once_cell::sync::Lazy;
use regex::Regex;

static CHARSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)@charset .*?;").unwrap());

static IMPORT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)@import .*?;").unwrap());

/// A statement-level at-rule recognized ahead of rule matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Charset,
    Import,
}

impl Directive {
    /// Extraction order within a segment.
    pub const ALL: [Directive; 2] = [Directive::Charset, Directive::Import];

    /// Value of the node's `type` field.
    pub fn name(self) -> &'static str {
        match self {
            Directive::Charset => "charset",
            Directive::Import => "imports",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Directive::Charset => &*CHARSET_RE,
            Directive::Import => &*IMPORT_RE,
        }
    }
}

/// Append one node per occurrence of `directive` in `segment` to `nodes`, in
/// source order, and return the segment with those statements removed.
pub fn extract_directive(
    directive: Directive,
    segment: &str,
    table: &PlaceholderTable,
    nodes: &mut Vec<Node>,
) -> String {
    let pattern = directive.pattern();
    let mut rest = String::with_capacity(segment.len());
    let mut last = 0;

    for found in pattern.find_iter(segment) {
        nodes.push(Node::directive(directive.name(), table.resolve(found.as_str())));
        rest.push_str(&segment[last..found.start()]);
        last = found.end();
    }
    rest.push_str(&segment[last..]);
    rest
}

/// Extract every directive kind, `@charset` first.
pub fn extract_directives(
    segment: &str,
    table: &PlaceholderTable,
    nodes: &mut Vec<Node>,
) -> String {
    Directive::ALL
        .iter()
        .fold(segment.to_string(), |rest, &directive| {
            extract_directive(directive, &rest, table, nodes)
        })
}
