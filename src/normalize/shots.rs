use crate::diag::Diags;
use crate::normalize::first_nonempty_str;
use crate::record::bucket_ratio;
use serde_json::{Map, Value};

pub(crate) fn normalize_shots(items: Vec<Value>, diags: &mut Diags) -> Value {
    Value::Array(
        items
            .into_iter()
            .enumerate()
            .map(|(i, v)| normalize_shot(v, i, diags))
            .collect(),
    )
}

fn normalize_shot(v: Value, idx: usize, diags: &mut Diags) -> Value {
    let mut out = Map::new();
    match v {
        Value::Object(m) => {
            let key = first_nonempty_str(&m, &["key", "name", "slot", "id"])
                .unwrap_or_else(|| shot_key(idx));
            let prompt = first_nonempty_str(&m, &["imagePrompt", "image_prompt", "prompt"])
                .unwrap_or_default();
            let ratio = parse_ratio(
                m.get("ratio")
                    .or_else(|| m.get("aspectRatio"))
                    .or_else(|| m.get("aspect")),
                &key,
                diags,
            );
            out.insert("key".to_string(), Value::String(key));
            out.insert("imagePrompt".to_string(), Value::String(prompt));
            out.insert("ratio".to_string(), Value::String(ratio.to_string()));
            if let Some(np) =
                first_nonempty_str(&m, &["negativePrompt", "negative_prompt", "negative"])
            {
                out.insert("negativePrompt".to_string(), Value::String(np));
            }
            if let Some(u) = first_nonempty_str(&m, &["imageUrl", "image_url", "url"]) {
                out.insert("imageUrl".to_string(), Value::String(u));
            }
        }
        Value::String(s) => {
            let key = shot_key(idx);
            let ratio = parse_ratio(None, &key, diags);
            out.insert("key".to_string(), Value::String(key));
            out.insert("imagePrompt".to_string(), Value::String(s));
            out.insert("ratio".to_string(), Value::String(ratio.to_string()));
        }
        _ => {
            diags.warn("normalize", "unusable image shot entry replaced by placeholder");
            out.insert("key".to_string(), Value::String(shot_key(idx)));
            out.insert("imagePrompt".to_string(), Value::String(String::new()));
            out.insert("ratio".to_string(), Value::String("16:9".to_string()));
        }
    }
    Value::Object(out)
}

fn shot_key(idx: usize) -> String {
    format!("shot{:02}", idx + 1)
}

/// Permissive aspect-ratio parser: colon/x/slash/dash separators, a few named
/// ratios, or bare decimals, bucketed to the nearest canonical label within
/// ±0.15. Unresolved values fall back by key name.
pub(crate) fn parse_ratio(v: Option<&Value>, key: &str, diags: &mut Diags) -> &'static str {
    if let Some(v) = v
        && let Some(r) = ratio_decimal(v)
        && let Some(label) = bucket_ratio(r)
    {
        return label;
    }
    let fallback = if key.starts_with("step") {
        "4:3"
    } else if key.starts_with("ingredient") || key.starts_with("flat") {
        "3:2"
    } else {
        "16:9"
    };
    if v.is_some() {
        diags.warn(
            "normalize",
            format!("unresolved ratio for shot {:?}, defaulted to {}", key, fallback),
        );
    }
    fallback
}

fn ratio_decimal(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let t = s.trim().to_ascii_lowercase();
            match t.as_str() {
                "widescreen" | "wide" | "landscape" => return Some(16.0 / 9.0),
                "standard" | "tv" => return Some(4.0 / 3.0),
                "classic" | "photo" | "postcard" => return Some(1.5),
                _ => {}
            }
            for sep in [':', 'x', '/', '-', '×'] {
                if let Some((a, b)) = t.split_once(sep)
                    && let (Ok(w), Ok(h)) = (a.trim().parse::<f64>(), b.trim().parse::<f64>())
                {
                    if h > 0.0 {
                        return Some(w / h);
                    }
                    return None;
                }
            }
            t.parse::<f64>().ok()
        }
        _ => None,
    }
}
