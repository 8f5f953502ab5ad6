use crate::passes::punctuation::{escape_newlines, normalize_punctuation};

#[test]
fn fullwidth_punctuation_outside_strings_is_rewritten() {
    let s = "{\"a\"：1，\"b\"：2}";
    assert_eq!(normalize_punctuation(s), "{\"a\":1,\"b\":2}");
}

#[test]
fn fullwidth_punctuation_inside_strings_is_preserved() {
    let s = "{\"a\": \"时间：30分钟，很快\"}";
    assert_eq!(normalize_punctuation(s), s);
}

#[test]
fn punctuation_pass_is_idempotent() {
    let s = "{\"a\"：\"冒号：保留\"，\"b\"：2}";
    let once = normalize_punctuation(s);
    assert_eq!(normalize_punctuation(&once), once);
}

#[test]
fn newlines_inside_strings_become_escapes() {
    let s = "{\"a\": \"第一行\n第二行\"}";
    assert_eq!(escape_newlines(s), "{\"a\": \"第一行\\n第二行\"}");
}

#[test]
fn newlines_outside_strings_are_legal_whitespace() {
    let s = "{\n  \"a\": 1\n}";
    assert_eq!(escape_newlines(s), s);
}

#[test]
fn newline_pass_is_idempotent() {
    let s = "{\"a\": \"断\n行\"}";
    let once = escape_newlines(s);
    assert_eq!(escape_newlines(&once), once);
}

#[test]
fn carriage_returns_inside_strings_are_escaped() {
    let s = "{\"a\": \"one\r\ntwo\"}";
    assert_eq!(escape_newlines(s), "{\"a\": \"one\\r\\ntwo\"}");
}
