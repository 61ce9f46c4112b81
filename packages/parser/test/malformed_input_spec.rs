//! Malformed Input Tests
//!
//! Unrecognized shapes degrade quietly instead of failing.

use css_object_parser::{parse_css, Declaration};
use serde_json::{json, Value};

fn parse(source: &str) -> Value {
    serde_json::to_value(parse_css(source)).unwrap()
}

#[test]
fn should_flag_declaration_without_colon() {
    assert_eq!(
        parse(".a{badtoken}"),
        json!([{"selector": ".a", "rules": [{"key": "", "value": "badtoken", "defective": true}]}])
    );
}

#[test]
fn should_drop_empty_keys_and_values() {
    let nodes = parse_css("a { color: ; : red; ;; margin: 0 }");
    assert_eq!(nodes[0].rules, Some(vec![Declaration::new("margin", "0")]));
}

#[test]
fn should_restore_strings_in_defective_declarations() {
    let nodes = parse_css("a { \"just a string\" }");
    assert_eq!(nodes[0].rules, Some(vec![Declaration::defective("\"just a string\"")]));
}

#[test]
fn should_omit_unclosed_block() {
    let nodes = parse_css("a { b: c }\nd { e: f");
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].selector, "a");
}

#[test]
fn should_ignore_stray_closing_brace() {
    let nodes = parse_css("a { b: c } }\nd { e: f }");
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[1].selector, "}\nd");
}

#[test]
fn should_omit_block_with_unterminated_string() {
    let nodes = parse_css("a { content: \"open; }\nb { c: d }");
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].rules, Some(vec![Declaration::new("c", "d")]));
}

#[test]
fn should_replace_nul_characters() {
    let nodes = parse_css("a { content: x\u{0}b0\u{1}y }");
    assert_eq!(nodes.len(), 1);
    assert_eq!(
        nodes[0].rules,
        Some(vec![Declaration::new("content", "x\u{FFFD}b0\u{FFFD}y")])
    );
}

#[test]
fn should_keep_nested_block_inside_plain_rule_as_text() {
    let nodes = parse_css(".outer { .inner { x: y } }");
    assert_eq!(
        nodes[0].rules,
        Some(vec![Declaration::defective(".inner { x: y }")])
    );
}
