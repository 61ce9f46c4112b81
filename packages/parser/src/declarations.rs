//! Declaration Parsing
//!
//! Splits a block body into `key: value` declarations. The body still holds
//! placeholder markers, so `;` and `:` inside strings never split anything;
//! markers are resolved only in the emitted values.

use crate::ast::Declaration;
use crate::chars::{COLON, LF, SEMICOLON};
use crate::placeholder::PlaceholderTable;

pub fn parse_declarations(body: &str, table: &PlaceholderTable) -> Vec<Declaration> {
    let mut result = Vec::new();

    for segment in body.split(SEMICOLON).map(str::trim).filter(|s| !s.is_empty()) {
        match segment.split_once(COLON) {
            Some((key, value)) => {
                let key = key.trim();
                let value = table.resolve(&value.replace(LF, " "));
                let value = value.trim();
                if !key.is_empty() && !value.is_empty() {
                    result.push(Declaration::new(key, value));
                }
            }
            None => {
                let raw = table.resolve(segment);
                tracing::debug!(segment = %raw, "declaration without `:`");
                result.push(Declaration::defective(raw));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::PlaceholderKind;

    #[test]
    fn splits_on_semicolons_in_order() {
        let table = PlaceholderTable::new();
        let rules = parse_declarations("margin:0\n\n;\nborder: none\n", &table);
        assert_eq!(
            rules,
            vec![Declaration::new("margin", "0"), Declaration::new("border", "none")]
        );
    }

    #[test]
    fn value_keeps_text_after_first_colon() {
        let table = PlaceholderTable::new();
        let rules = parse_declarations("background: url(http://x/y.png)", &table);
        assert_eq!(rules, vec![Declaration::new("background", "url(http://x/y.png)")]);
    }

    #[test]
    fn newlines_in_values_become_spaces() {
        let table = PlaceholderTable::new();
        let rules = parse_declarations("font: 11pt Arial,\nsans-serif", &table);
        assert_eq!(rules[0].value, "11pt Arial, sans-serif");
    }

    #[test]
    fn values_are_restored_from_placeholders() {
        let mut table = PlaceholderTable::new();
        let string = table.push(PlaceholderKind::Opaque, "\"a;b:c\"");
        let body = format!("border:url({}); margin:0", string);
        let rules = parse_declarations(&body, &table);
        assert_eq!(
            rules,
            vec![
                Declaration::new("border", "url(\"a;b:c\")"),
                Declaration::new("margin", "0"),
            ]
        );
    }

    #[test]
    fn keys_are_not_restored_from_placeholders() {
        let mut table = PlaceholderTable::new();
        let string = table.push(PlaceholderKind::Opaque, "\"a\"");
        let rules = parse_declarations(&format!("{}:b", string), &table);
        assert_eq!(rules, vec![Declaration::new(string.as_str(), "b")]);
        assert!(rules[0].key.starts_with('\0'));
    }

    #[test]
    fn empty_key_or_value_is_dropped() {
        let table = PlaceholderTable::new();
        assert!(parse_declarations("color:; :red; ;;", &table).is_empty());
    }

    #[test]
    fn segment_without_colon_is_defective() {
        let table = PlaceholderTable::new();
        let rules = parse_declarations("badtoken; color: red", &table);
        assert_eq!(
            rules,
            vec![Declaration::defective("badtoken"), Declaration::new("color", "red")]
        );
    }
}
