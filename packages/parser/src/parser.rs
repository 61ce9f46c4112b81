//! Rule-Node Builder
//!
//! Turns a flattened segment (strings, comments and blocks all behind
//! markers) into tree nodes. Every `header <block marker>` pair becomes one
//! node; container at-rules recurse into their block body, everything else
//! parses the body as declarations.

use crate::ast::Node;
use crate::blocks::collapse_blocks;
use crate::config::ParserConfig;
use crate::declarations::parse_declarations;
use crate::directives::extract_directives;
use crate::placeholder::{first_comment, strip_comments, PlaceholderTable};
use crate::sanitize::extract_opaque_spans;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest header text followed by a block marker.
static RULE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\s\S]*?)\x00b(\d+)\x01").unwrap());

static AT_KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([a-z_\-][a-z0-9_\-]*)").unwrap());

static DEFAULT_PARSER: Lazy<CssParser> = Lazy::new(CssParser::default);

/// Parse `source` with the default configuration.
pub fn parse_css(source: &str) -> Vec<Node> {
    DEFAULT_PARSER.parse(source)
}

/// Reusable parser; holds configuration only, every call parses independently.
#[derive(Debug, Clone, Default)]
pub struct CssParser {
    config: ParserConfig,
}

impl CssParser {
    pub fn new(config: ParserConfig) -> Self {
        CssParser { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, source: &str) -> Vec<Node> {
        let mut table = PlaceholderTable::new();
        let text = extract_opaque_spans(source, &mut table);
        let text = collapse_blocks(&text, &mut table);

        let context = ParseContext {
            table,
            config: &self.config,
        };
        let nodes = context.parse_code(&text, 0);
        tracing::debug!(
            nodes = nodes.len(),
            placeholders = context.table.len(),
            "parsed stylesheet"
        );
        nodes
    }
}

/// State of one parse: the filled placeholder table and the configuration.
struct ParseContext<'a> {
    table: PlaceholderTable,
    config: &'a ParserConfig,
}

impl ParseContext<'_> {
    fn parse_code(&self, segment: &str, depth: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        let rest = extract_directives(segment, &self.table, &mut nodes);

        let mut consumed = 0;
        for caps in RULE_RE.captures_iter(&rest) {
            consumed = caps.get(0).map_or(consumed, |m| m.end());
            let header = caps.get(1).map_or("", |m| m.as_str());
            let block = caps
                .get(2)
                .and_then(|m| m.as_str().parse::<usize>().ok())
                .and_then(|index| self.table.get(index))
                .unwrap_or("{}");
            nodes.push(self.build_node(header, block, depth));
        }

        let trailing = rest[consumed..].trim();
        if !trailing.is_empty() {
            tracing::debug!(
                depth,
                text = %self.table.resolve(trailing),
                "dropped text without a block"
            );
        }
        nodes
    }

    fn build_node(&self, header: &str, block: &str, depth: usize) -> Node {
        let comments = first_comment(header).map(|m| self.table.resolve(m));
        let header = strip_comments(header);
        let header = header.trim();

        let mut node = Node::new(self.table.resolve(header));
        node.comments = comments;
        node.kind = AT_KEYWORD_RE
            .captures_iter(header)
            .last()
            .map(|caps| caps[1].to_string());

        // Stored blocks always start with `{` and end with `}`
        let body = block
            .strip_prefix('{')
            .and_then(|b| b.strip_suffix('}'))
            .unwrap_or(block);
        let body = strip_comments(body);

        match node.kind.as_deref() {
            Some(kind) if self.config.is_container(kind) => {
                tracing::trace!(depth, kind, "descending into container at-rule");
                node.children = Some(self.parse_code(&body, depth + 1));
            }
            _ => node.rules = Some(parse_declarations(&body, &self.table)),
        }
        node
    }
}
