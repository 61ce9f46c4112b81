//! Parsed stylesheet tree.
//!
//! Field names and optionality are the serialized contract consumers read:
//! absent optional fields are omitted from the output entirely.

use serde::{Deserialize, Serialize};

/// One parsed unit: a rule set, an at-rule, or a directive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Trimmed header text before the block, or `@charset` / `@imports`.
    pub selector: String,
    /// At-rule keyword without the `@`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Raw text of the comment that led the selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Directive statement text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Declaration>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn new(selector: impl Into<String>) -> Self {
        Node {
            selector: selector.into(),
            ..Default::default()
        }
    }

    /// A `@charset` / `@import` node; `name` is the `type` value.
    pub fn directive(name: &str, styles: impl Into<String>) -> Self {
        Node {
            selector: format!("@{}", name),
            kind: Some(name.to_string()),
            styles: Some(styles.into()),
            ..Default::default()
        }
    }

    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }

    pub fn is_directive(&self) -> bool {
        self.styles.is_some()
    }
}

/// A `key: value` pair inside a rule block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub key: String,
    pub value: String,
    /// Set when the segment had no `:`; `value` then holds the whole segment.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub defective: bool,
}

impl Declaration {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Declaration {
            key: key.into(),
            value: value.into(),
            defective: false,
        }
    }

    pub fn defective(value: impl Into<String>) -> Self {
        Declaration {
            key: String::new(),
            value: value.into(),
            defective: true,
        }
    }
}
