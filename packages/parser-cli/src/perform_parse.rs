//! Parse stylesheets from disk and emit their trees.

use anyhow::Context;
use css_object_parser::{CssParser, Node};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::ProjectConfig;

/// Options for one `css2json` run, after flags are merged over the config.
#[derive(Debug, Default)]
pub struct ParseOptions {
    /// Paths or glob patterns; empty means read stdin.
    pub inputs: Vec<String>,
    pub config: ProjectConfig,
}

/// Expand each input as a glob pattern, keeping the input order.
///
/// Inputs without glob metacharacters are taken as plain paths.
pub fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.contains(['*', '?', '[']) {
            files.push(PathBuf::from(input));
            continue;
        }
        let mut matched: Vec<PathBuf> = glob::glob(input)
            .with_context(|| format!("invalid glob pattern '{}'", input))?
            .collect::<Result<Vec<PathBuf>, _>>()
            .with_context(|| format!("failed to expand '{}'", input))?;
        if matched.is_empty() {
            tracing::warn!(pattern = %input, "pattern matched no files");
        }
        matched.sort();
        files.append(&mut matched);
    }
    Ok(files)
}

/// Parse every file in parallel; results keep the order of `files`.
pub fn parse_files(
    files: &[PathBuf],
    parser: &CssParser,
) -> anyhow::Result<IndexMap<String, Vec<Node>>> {
    let start = Instant::now();
    let parsed = files
        .par_iter()
        .map(|path| {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let nodes = parser.parse(&source);
            tracing::debug!(file = %path.display(), nodes = nodes.len(), "parsed");
            Ok::<_, anyhow::Error>((path.display().to_string(), nodes))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    tracing::debug!(files = files.len(), elapsed = ?start.elapsed(), "parsing finished");
    Ok(parsed.into_iter().collect())
}

pub fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

/// Write each tree to `out_dir/<file stem>.json`; returns the written paths.
pub fn write_outputs(
    results: &IndexMap<String, Vec<Node>>,
    out_dir: &Path,
    pretty: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut written: Vec<PathBuf> = Vec::with_capacity(results.len());
    for (input, nodes) in results {
        let stem = Path::new(input)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "stdin".to_string());
        let target = out_dir.join(format!("{}.json", stem));
        if written.contains(&target) {
            tracing::warn!(
                input = %input,
                target = %target.display(),
                "output overwritten by a later input"
            );
        }
        fs::write(&target, render(nodes, pretty)?)
            .with_context(|| format!("failed to write {}", target.display()))?;
        written.push(target);
    }
    Ok(written)
}

/// Run the whole command; the JSON for stdout, if any, is returned.
pub fn perform_parse(options: &ParseOptions) -> anyhow::Result<Option<String>> {
    let parser = CssParser::new(options.config.parser.clone());
    let pretty = options.config.pretty;

    let results = if options.inputs.is_empty() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        let mut results = IndexMap::new();
        results.insert("stdin".to_string(), parser.parse(&source));
        results
    } else {
        let files = expand_inputs(&options.inputs)?;
        parse_files(&files, &parser)?
    };

    if let Some(out_dir) = &options.config.out_dir {
        let written = write_outputs(&results, out_dir, pretty)?;
        tracing::info!(files = written.len(), dir = %out_dir.display(), "wrote trees");
        return Ok(None);
    }

    let text = if results.len() == 1 {
        let nodes = results.values().next().map(Vec::as_slice).unwrap_or_default();
        render(nodes, pretty)?
    } else {
        render(&results, pretty)?
    };
    Ok(Some(text))
}
