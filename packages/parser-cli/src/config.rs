use anyhow::Context;
use css_object_parser::ParserConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of a `css2json.json` project file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectConfig {
    pub parser: ParserConfig,
    pub pretty: bool,
    pub out_dir: Option<PathBuf>,
}

impl ProjectConfig {
    pub const FILE_NAME: &'static str = "css2json.json";

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("in config {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: ProjectConfig = serde_json::from_str(content)?;
        config.parser.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else `css2json.json` from `dir` when present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(Self::FILE_NAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "using project config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
