//! Brace-Block Collapsing
//!
//! Replaces every `{ ... }` block with a block marker, innermost blocks
//! first, so that a nested stylesheet flattens into a sequence of
//! `header <block marker>` pairs. Each stored block keeps its braces and holds
//! the markers of the blocks nested directly inside it.
//!
//! A block containing a bare quote character (an unterminated string) cannot
//! be collapsed, and neither can any block around it. Unmatched braces stay in
//! the text as they are.

use crate::chars::{is_quote, LBRACE, RBRACE};
use crate::placeholder::{PlaceholderKind, PlaceholderTable};
use smallvec::SmallVec;

/// An open brace that has not been closed yet.
struct OpenBlock {
    text: String,
    collapsible: bool,
}

pub fn collapse_blocks(source: &str, table: &mut PlaceholderTable) -> String {
    let mut out = String::with_capacity(source.len());
    let mut open: SmallVec<[OpenBlock; 8]> = SmallVec::new();
    let mut collapsed = 0usize;

    for ch in source.chars() {
        match ch {
            LBRACE => open.push(OpenBlock {
                text: LBRACE.to_string(),
                collapsible: true,
            }),
            RBRACE => match open.pop() {
                Some(mut block) => {
                    block.text.push(RBRACE);
                    let (replacement, collapsible) = if block.collapsible {
                        collapsed += 1;
                        (table.push(PlaceholderKind::Block, block.text), true)
                    } else {
                        (block.text, false)
                    };
                    match open.last_mut() {
                        Some(parent) => {
                            parent.text.push_str(&replacement);
                            parent.collapsible &= collapsible;
                        }
                        None => out.push_str(&replacement),
                    }
                }
                None => out.push(RBRACE),
            },
            _ => match open.last_mut() {
                Some(block) => {
                    block.text.push(ch);
                    if is_quote(ch) {
                        block.collapsible = false;
                    }
                }
                None => out.push(ch),
            },
        }
    }

    if !open.is_empty() {
        tracing::debug!(unclosed = open.len(), "unbalanced braces left in source");
    }
    // Unclosed braces go back into the text in order
    for block in open {
        out.push_str(&block.text);
    }

    tracing::trace!(blocks = collapsed, "collapsed brace blocks");
    out
}
