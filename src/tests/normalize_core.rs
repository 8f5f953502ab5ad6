use crate::{Diags, Options, normalize_candidate};
use serde_json::json;

fn opts() -> Options {
    Options::default()
}

#[test]
fn title_is_taken_from_first_nonempty_alias() {
    let mut d = Diags::new();
    let v = normalize_candidate(json!({"name": "宫保鸡丁"}), &opts(), &mut d);
    assert_eq!(v["titleZh"], "宫保鸡丁");

    let mut d = Diags::new();
    let v = normalize_candidate(json!({"titleZh": "", "dishName": "鱼香肉丝"}), &opts(), &mut d);
    assert_eq!(v["titleZh"], "鱼香肉丝");
}

#[test]
fn summary_is_synthesized_from_sibling_aliases() {
    let mut d = Diags::new();
    let v = normalize_candidate(
        json!({"title": "x", "totalTime": "45分钟", "servings": "3人份", "prepTime": 20}),
        &opts(),
        &mut d,
    );
    assert_eq!(v["summary"]["timeTotalMin"].as_f64(), Some(45.0));
    assert_eq!(v["summary"]["servings"].as_f64(), Some(3.0));
    assert_eq!(v["summary"]["timeActiveMin"].as_f64(), Some(20.0));
}

#[test]
fn bare_string_summary_becomes_one_line() {
    let mut d = Diags::new();
    let v = normalize_candidate(json!({"summary": "一碗热汤"}), &opts(), &mut d);
    assert_eq!(v["summary"]["oneLine"], "一碗热汤");
}

#[test]
fn difficulty_vocabulary_is_bilingual() {
    for (raw, want) in [
        ("简单", "easy"),
        ("Easy", "easy"),
        ("适中", "medium"),
        ("intermediate", "medium"),
        ("困难", "hard"),
        ("Advanced", "hard"),
    ] {
        let mut d = Diags::new();
        let v = normalize_candidate(json!({"difficulty": raw}), &opts(), &mut d);
        assert_eq!(v["summary"]["difficulty"], want, "raw {:?}", raw);
    }
}

#[test]
fn unrecognized_difficulty_is_left_for_defaulting() {
    let mut d = Diags::new();
    let v = normalize_candidate(json!({"difficulty": "看心情"}), &opts(), &mut d);
    assert!(v["summary"].get("difficulty").is_none());
    assert!(!d.entries().is_empty());
}

#[test]
fn loose_string_arrays_are_split() {
    let mut d = Diags::new();
    let v = normalize_candidate(json!({"tips": "趁热吃，别放凉、隔夜更好"}), &opts(), &mut d);
    let tips = v["tips"].as_array().unwrap();
    assert_eq!(tips.len(), 3);
}

#[test]
fn json_looking_string_is_reparsed() {
    let mut d = Diags::new();
    let v = normalize_candidate(
        json!({"tags": "[\"下饭\", \"快手\"]"}),
        &opts(),
        &mut d,
    );
    assert_eq!(v["tags"], json!(["下饭", "快手"]));
}

#[test]
fn troubleshooting_keys_are_remapped() {
    let mut d = Diags::new();
    let v = normalize_candidate(
        json!({"troubleshooting": [{"issue": "太咸", "reason": "盐多", "solution": "加水"}]}),
        &opts(),
        &mut d,
    );
    assert_eq!(
        v["troubleshooting"][0],
        json!({"problem": "太咸", "cause": "盐多", "fix": "加水"})
    );
}

#[test]
fn pairing_alias_feeds_related_recipes() {
    let mut d = Diags::new();
    let v = normalize_candidate(json!({"pairing": ["米饭", "青菜汤"]}), &opts(), &mut d);
    assert_eq!(v["relatedRecipes"], json!(["米饭", "青菜汤"]));
}

#[test]
fn non_object_candidates_pass_through_for_the_guarantor() {
    let mut d = Diags::new();
    assert_eq!(normalize_candidate(json!(null), &opts(), &mut d), json!(null));
    let mut d = Diags::new();
    assert_eq!(
        normalize_candidate(json!("prose"), &opts(), &mut d),
        json!("prose")
    );
}
