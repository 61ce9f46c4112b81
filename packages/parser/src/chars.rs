/*
 * Character Codes
 *
 * Characters the pipeline scans for while recovering structure.
 */

// Placeholder delimiters; neither survives preprocessing in input text
pub const MARKER_OPEN: char = '\0';
pub const MARKER_CLOSE: char = '\u{1}';
pub const REPLACEMENT: char = '\u{FFFD}';

pub const LF: char = '\n';
pub const CR: char = '\r';

// Punctuation
pub const DQ: char = '"';
pub const SQ: char = '\'';
pub const SLASH: char = '/';
pub const AT: char = '@';
pub const COLON: char = ':';
pub const SEMICOLON: char = ';';
pub const LBRACE: char = '{';
pub const RBRACE: char = '}';
pub const MINUS: char = '-';
pub const UNDERSCORE: char = '_';

pub fn is_quote(ch: char) -> bool {
    ch == DQ || ch == SQ
}

/// First character of an at-keyword identifier; keywords are lower-case.
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch == UNDERSCORE || ch == MINUS
}

pub fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == UNDERSCORE || ch == MINUS
}
