use crate::record::bucket_ratio;
use crate::{Diags, Options, normalize_candidate};
use serde_json::json;

fn opts() -> Options {
    Options::default()
}

#[test]
fn decimal_ratios_bucket_within_tolerance() {
    assert_eq!(bucket_ratio(16.0 / 9.0), Some("16:9"));
    assert_eq!(bucket_ratio(1.7), Some("16:9"));
    assert_eq!(bucket_ratio(4.0 / 3.0), Some("4:3"));
    assert_eq!(bucket_ratio(1.34), Some("4:3"));
    assert_eq!(bucket_ratio(1.5), Some("3:2"));
    // equidistant-ish value resolves to the nearest target
    assert_eq!(bucket_ratio(1.45), Some("3:2"));
}

#[test]
fn ratios_outside_all_buckets_resolve_to_none() {
    assert_eq!(bucket_ratio(1.0), None);
    assert_eq!(bucket_ratio(2.2), None);
    assert_eq!(bucket_ratio(0.0), None);
}

#[test]
fn separator_variants_are_accepted() {
    for (raw, want) in [
        ("16:9", "16:9"),
        ("16x9", "16:9"),
        ("16/9", "16:9"),
        ("16-9", "16:9"),
        ("4:3", "4:3"),
        ("3:2", "3:2"),
        ("1.78", "16:9"),
    ] {
        let mut d = Diags::new();
        let v = normalize_candidate(
            json!({"imageShots": [{"key": "cover_main", "imagePrompt": "p", "ratio": raw}]}),
            &opts(),
            &mut d,
        );
        assert_eq!(v["imageShots"][0]["ratio"], want, "raw {:?}", raw);
    }
}

#[test]
fn unresolved_ratio_falls_back_by_key_name() {
    for (key, want) in [
        ("step_sear", "4:3"),
        ("ingredient_flatlay", "3:2"),
        ("flat_top", "3:2"),
        ("hero", "16:9"),
    ] {
        let mut d = Diags::new();
        let v = normalize_candidate(
            json!({"imageShots": [{"key": key, "imagePrompt": "p", "ratio": "圆形"}]}),
            &opts(),
            &mut d,
        );
        assert_eq!(v["imageShots"][0]["ratio"], want, "key {:?}", key);
        assert!(d.entries().iter().any(|e| e.message.contains("ratio")));
    }
}

#[test]
fn bare_prompt_strings_become_shots() {
    let mut d = Diags::new();
    let v = normalize_candidate(json!({"imageShots": ["成品特写"]}), &opts(), &mut d);
    let shot = &v["imageShots"][0];
    assert_eq!(shot["key"], "shot01");
    assert_eq!(shot["imagePrompt"], "成品特写");
    assert_eq!(shot["ratio"], "16:9");
}

#[test]
fn prompt_and_url_aliases_are_remapped() {
    let mut d = Diags::new();
    let v = normalize_candidate(
        json!({"shots": [{"key": "cover_main", "prompt": "俯拍", "url": "https://img/x.png", "ratio": 1.5}]}),
        &opts(),
        &mut d,
    );
    let shot = &v["imageShots"][0];
    assert_eq!(shot["imagePrompt"], "俯拍");
    assert_eq!(shot["imageUrl"], "https://img/x.png");
    assert_eq!(shot["ratio"], "3:2");
}
