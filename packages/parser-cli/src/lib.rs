#![deny(clippy::all)]

/**
 * css2json - command line host for css-object-parser
 *
 * Reads stylesheets from disk or stdin and prints their parsed trees as JSON
 */
pub use css_object_parser as parser;

pub mod config;
pub mod logging;
pub mod perform_parse;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
