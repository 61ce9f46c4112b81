//! Parser configuration.

use crate::chars::{is_identifier_part, is_identifier_start};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// At-rules whose blocks hold nested rule sets rather than declarations.
pub const DEFAULT_CONTAINER_AT_RULES: &[&str] = &["media", "supports", "keyframes", "page"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    /// Keywords without `@`, matched exactly against a node's `type`.
    pub container_at_rules: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            container_at_rules: DEFAULT_CONTAINER_AT_RULES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ParserConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: ParserConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for keyword in &self.container_at_rules {
            let mut chars = keyword.chars();
            let valid =
                chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_part);
            if !valid {
                return Err(ConfigError::InvalidAtRule(keyword.clone()));
            }
        }
        Ok(())
    }

    pub fn is_container(&self, kind: &str) -> bool {
        self.container_at_rules.iter().any(|k| k == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_containers() {
        let config = ParserConfig::default();
        for kind in ["media", "supports", "keyframes", "page"] {
            assert!(config.is_container(kind));
        }
        assert!(!config.is_container("font-face"));
        assert!(!config.is_container("MEDIA"));
    }

    #[test]
    fn loads_from_json() {
        let config = ParserConfig::from_json(r#"{"containerAtRules": ["media", "layer"]}"#).unwrap();
        assert!(config.is_container("layer"));
        assert!(!config.is_container("supports"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        assert_eq!(ParserConfig::from_json("{}").unwrap(), ParserConfig::default());
    }

    #[test]
    fn rejects_keyword_with_at_sign() {
        let err = ParserConfig::from_json(r#"{"containerAtRules": ["@media"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAtRule(ref k) if k == "@media"));
    }

    #[test]
    fn rejects_upper_case_keyword() {
        let err = ParserConfig::from_json(r#"{"containerAtRules": ["Layer"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAtRule(ref k) if k == "Layer"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ParserConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
