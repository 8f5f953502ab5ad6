use crate::unwrap_payload;
use serde_json::json;

#[test]
fn recipe_wrapper_is_unwrapped() {
    let v = json!({"recipe": {"titleZh": "酸菜鱼"}});
    assert_eq!(unwrap_payload(v), json!({"titleZh": "酸菜鱼"}));
}

#[test]
fn wrapper_priority_order_is_fixed() {
    let v = json!({"data": {"titleZh": "x"}, "payload": {"titleZh": "y"}});
    assert_eq!(unwrap_payload(v), json!({"titleZh": "x"}));
}

#[test]
fn array_of_candidates_yields_first_object() {
    let v = json!([1, "noise", {"titleZh": "x"}]);
    assert_eq!(unwrap_payload(v), json!({"titleZh": "x"}));
}

#[test]
fn array_without_objects_yields_first_element() {
    let v = json!(["only", "strings"]);
    assert_eq!(unwrap_payload(v), json!("only"));
}

#[test]
fn nested_wrappers_are_peeled() {
    let v = json!({"recipe": {"recipe": {"titleZh": "x"}}});
    assert_eq!(unwrap_payload(v), json!({"titleZh": "x"}));
}

#[test]
fn wrapper_holding_candidate_array_is_unwrapped() {
    let v = json!({"result": [{"titleZh": "x"}]});
    assert_eq!(unwrap_payload(v), json!({"titleZh": "x"}));
}

#[test]
fn plain_record_passes_through() {
    let v = json!({"titleZh": "x", "steps": []});
    assert_eq!(unwrap_payload(v.clone()), v);
}

#[test]
fn scalars_pass_through() {
    assert_eq!(unwrap_payload(json!(null)), json!(null));
    assert_eq!(unwrap_payload(json!("text")), json!("text"));
}
