#![deny(clippy::all)]

/**
 * CSS Object Parser
 *
 * Reads CSS source text into a tree of rule nodes without a full CSS
 * grammar: strings, comments and blocks are lifted behind placeholders so
 * that plain pattern matching can recover the structure.
 */

#[cfg(feature = "napi-bindings")]
use napi::bindgen_prelude::*;
#[cfg(feature = "napi-bindings")]
use napi_derive::napi;

pub mod ast;
pub mod blocks;
pub mod chars;
pub mod config;
pub mod declarations;
pub mod directives;
mod error;
pub mod parser;
pub mod placeholder;
pub mod sanitize;

// Re-exports
pub use ast::{Declaration, Node};
pub use config::ParserConfig;
pub use error::{ConfigError, Result as ConfigResult};
pub use parser::{parse_css, CssParser};

/// Serialize a parsed tree to compact JSON.
pub fn to_json(nodes: &[Node]) -> serde_json::Result<String> {
    serde_json::to_string(nodes)
}

pub fn to_json_pretty(nodes: &[Node]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(nodes)
}

/// Parse CSS and return the tree as JSON text
#[cfg(feature = "napi-bindings")]
#[napi(js_name = "parseCSS")]
pub fn parse_css_json(source: String) -> Result<String> {
    let nodes = parse_css(&source);
    to_json(&nodes).map_err(|e| Error::from_reason(e.to_string()))
}
