use crate::passes::quotes::{collapse_doubled_quotes, convert_single_quotes, quote_bare_keys};

#[test]
fn single_quoted_strings_become_double_quoted() {
    assert_eq!(convert_single_quotes("{'a': 'x'}"), "{\"a\": \"x\"}");
}

#[test]
fn internal_double_quotes_are_escaped() {
    let s = "{'a': '他说\"好\"'}";
    assert_eq!(convert_single_quotes(s), "{\"a\": \"他说\\\"好\\\"\"}");
}

#[test]
fn escaped_single_quote_is_unescaped() {
    let s = "{'a': 'it\\'s'}";
    assert_eq!(convert_single_quotes(s), "{\"a\": \"it's\"}");
}

#[test]
fn apostrophe_inside_double_quoted_string_is_untouched() {
    let s = "{\"a\": \"it's fine\"}";
    assert_eq!(convert_single_quotes(s), s);
}

#[test]
fn lone_single_quote_passes_through() {
    let s = "{\"a\": 5'}";
    assert_eq!(convert_single_quotes(s), s);
}

#[test]
fn bare_keys_are_quoted() {
    assert_eq!(
        quote_bare_keys("{a: 1, b2: 2}"),
        "{\"a\": 1, \"b2\": 2}"
    );
}

#[test]
fn cjk_bare_keys_are_quoted() {
    assert_eq!(quote_bare_keys("{名称: \"x\"}"), "{\"名称\": \"x\"}");
}

#[test]
fn bare_values_are_not_touched_by_key_pass() {
    let s = "{\"a\": hello}";
    assert_eq!(quote_bare_keys(s), s);
}

#[test]
fn keywords_in_arrays_are_not_quoted() {
    let s = "[true, false, null]";
    assert_eq!(quote_bare_keys(s), s);
}

#[test]
fn doubled_quote_artifact_collapses() {
    assert_eq!(
        collapse_doubled_quotes("{\"a\": \"\"值\"\"}"),
        "{\"a\": \"值\"}"
    );
}

#[test]
fn genuinely_empty_string_survives() {
    let s = "{\"a\": \"\", \"b\": 1}";
    assert_eq!(collapse_doubled_quotes(s), s);
}
