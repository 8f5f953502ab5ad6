pub(crate) mod ingredients;
pub(crate) mod shots;
pub(crate) mod steps;

use crate::diag::Diags;
use crate::options::Options;
use crate::record::Difficulty;
use serde_json::{Map, Value};

/// Map alternate field names and shapes onto the canonical schema, coercing
/// types along the way. Pure and total: anything unusable is left out for the
/// completeness stage to backfill. The tree stays untyped (`Value`) until the
/// validation gate converts it.
pub fn normalize_candidate(value: Value, opts: &Options, diags: &mut Diags) -> Value {
    let src = match value {
        Value::Object(m) => m,
        other => {
            if !other.is_null() {
                diags.warn(
                    "normalize",
                    "candidate is not an object, deferring to placeholder synthesis",
                );
            }
            return other;
        }
    };
    let mut out = Map::new();

    if let Some(t) = first_nonempty_str(
        &src,
        &["titleZh", "title", "name", "recipeName", "dishName"],
    ) {
        out.insert("titleZh".to_string(), Value::String(t));
    }

    out.insert("summary".to_string(), normalize_summary(&src, diags));

    if let Some(v) = src.get("ingredients") {
        out.insert(
            "ingredients".to_string(),
            ingredients::normalize_ingredients(v, opts, diags),
        );
    }

    if let Some(v) = steps::steps_container(&src) {
        out.insert("steps".to_string(), steps::normalize_steps(v, opts, diags));
    }

    if let Some(v) = src
        .get("imageShots")
        .or_else(|| src.get("shots"))
        .or_else(|| src.get("images"))
        && let Some(items) = loose_array(v, diags)
    {
        out.insert("imageShots".to_string(), shots::normalize_shots(items, diags));
    }

    for key in ["aliases", "tips", "equipment", "notes", "tags"] {
        if let Some(v) = src.get(key)
            && let Some(items) = loose_array(v, diags)
        {
            let strings: Vec<Value> = items
                .iter()
                .filter_map(stringify)
                .map(Value::String)
                .collect();
            if !strings.is_empty() {
                out.insert(key.to_string(), Value::Array(strings));
            }
        }
    }

    if let Some(v) = src
        .get("relatedRecipes")
        .or_else(|| src.get("related"))
        .or_else(|| src.get("pairing"))
        && let Some(items) = loose_array(v, diags)
    {
        let strings: Vec<Value> = items
            .iter()
            .filter_map(stringify)
            .map(Value::String)
            .collect();
        if !strings.is_empty() {
            out.insert("relatedRecipes".to_string(), Value::Array(strings));
        }
    }

    if let Some(v) = src.get("faq")
        && let Some(items) = loose_array(v, diags)
    {
        out.insert("faq".to_string(), Value::Array(items));
    }

    if let Some(v) = src.get("troubleshooting")
        && let Some(items) = loose_array(v, diags)
    {
        let entries: Vec<Value> = items.iter().map(remap_trouble).collect();
        out.insert("troubleshooting".to_string(), Value::Array(entries));
    }

    if let Some(Value::Object(m)) = src.get("styleGuide") {
        out.insert("styleGuide".to_string(), Value::Object(m.clone()));
    }
    if let Some(Value::Object(m)) = src.get("nutrition") {
        out.insert("nutrition".to_string(), Value::Object(m.clone()));
    }
    if let Some(s) = first_nonempty_str(&src, &["story", "background"]) {
        out.insert("story".to_string(), Value::String(s));
    }

    Value::Object(out)
}

fn normalize_summary(src: &Map<String, Value>, diags: &mut Diags) -> Value {
    let base: Map<String, Value> = match src.get("summary") {
        Some(Value::Object(m)) => m.clone(),
        Some(Value::String(s)) if !s.trim().is_empty() => {
            let mut m = Map::new();
            m.insert(
                "oneLine".to_string(),
                Value::String(s.trim().to_string()),
            );
            m
        }
        _ => Map::new(),
    };
    let mut out = Map::new();

    if let Some(s) = pick_str(
        &base,
        src,
        &["oneLine", "one_line", "tagline", "brief", "description", "intro"],
    ) {
        out.insert("oneLine".to_string(), Value::String(s));
    }
    if let Some(s) = pick_str(&base, src, &["healingTone", "healing_tone", "tone", "mood"]) {
        out.insert("healingTone".to_string(), Value::String(s));
    }
    if let Some(raw) = pick_str(&base, src, &["difficulty", "level"]) {
        match Difficulty::canonical(&raw) {
            Some(d) => {
                out.insert("difficulty".to_string(), Value::String(d.to_string()));
            }
            None => diags.warn(
                "normalize",
                format!("unrecognized difficulty {:?}, left for defaulting", raw),
            ),
        }
    }
    for (canon, aliases) in [
        (
            "timeTotalMin",
            &["timeTotalMin", "totalTimeMin", "totalTime", "timeBudget", "duration"][..],
        ),
        (
            "timeActiveMin",
            &["timeActiveMin", "activeTimeMin", "activeTime", "prepTime", "handsOnTime"][..],
        ),
        ("servings", &["servings", "yield", "portions", "serves"][..]),
    ] {
        if let Some(n) = pick_num(&base, src, aliases) {
            out.insert(canon.to_string(), Value::from(n));
        }
    }
    Value::Object(out)
}

fn remap_trouble(v: &Value) -> Value {
    match v {
        Value::Object(m) => {
            let mut out = Map::new();
            let problem = first_nonempty_str(m, &["problem", "issue", "symptom"])
                .or_else(|| stringify(v))
                .unwrap_or_default();
            out.insert("problem".to_string(), Value::String(problem));
            if let Some(c) = first_nonempty_str(m, &["cause", "reason"]) {
                out.insert("cause".to_string(), Value::String(c));
            }
            if let Some(f) = first_nonempty_str(m, &["fix", "solution", "remedy"]) {
                out.insert("fix".to_string(), Value::String(f));
            }
            Value::Object(out)
        }
        other => {
            let mut out = Map::new();
            out.insert(
                "problem".to_string(),
                Value::String(stringify(other).unwrap_or_default()),
            );
            Value::Object(out)
        }
    }
}

fn pick_str(base: &Map<String, Value>, src: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_nonempty_str(base, keys).or_else(|| first_nonempty_str(src, keys))
}

fn pick_num(base: &Map<String, Value>, src: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|k| base.get(*k).and_then(coerce_number))
        .or_else(|| keys.iter().find_map(|k| src.get(*k).and_then(coerce_number)))
}

pub(crate) fn first_nonempty_str(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| {
        map.get(*k)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Coerce a documented numeric field: numbers pass through, strings accept a
/// plain number, a fraction, or a leading numeric prefix ("30分钟" -> 30).
pub(crate) fn coerce_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => coerce_number_str(s),
        _ => None,
    }
}

/// Byte length of a leading numeric run (digits, `.`, `/`, leading `-`).
pub(crate) fn numeric_prefix_len(t: &str) -> usize {
    let mut end = 0;
    for (i, c) in t.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == '/' || (i == 0 && c == '-') {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    end
}

pub(crate) fn coerce_number_str(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(n) = t.parse::<f64>() {
        return n.is_finite().then_some(n);
    }
    if let Some((a, b)) = t.split_once('/')
        && let (Ok(x), Ok(y)) = (a.trim().parse::<f64>(), b.trim().parse::<f64>())
        && y != 0.0
    {
        let q = x / y;
        return q.is_finite().then_some(q);
    }
    let mut end = 0;
    for (i, c) in t.char_indices() {
        if c.is_ascii_digit() || c == '.' || (i == 0 && c == '-') {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    if end > 0
        && let Ok(n) = t[..end].parse::<f64>()
    {
        return n.is_finite().then_some(n);
    }
    None
}

/// Coerce a loosely-shaped array field: arrays pass through, JSON-looking
/// strings are re-parsed, free text is split on commas and newlines, other
/// scalars become a singleton. `null`/absent stays absent.
pub(crate) fn loose_array(v: &Value, diags: &mut Diags) -> Option<Vec<Value>> {
    match v {
        Value::Array(items) => Some(items.clone()),
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() {
                return None;
            }
            if t.starts_with('[') || t.starts_with('{') {
                if let Ok(parsed) = serde_json::from_str::<Value>(t) {
                    return match parsed {
                        Value::Array(items) => Some(items),
                        other => Some(vec![other]),
                    };
                }
                diags.warn("normalize", "array-looking string failed to re-parse, split as text");
            }
            Some(split_free_text(t).into_iter().map(Value::String).collect())
        }
        Value::Null => None,
        other => Some(vec![other.clone()]),
    }
}

pub(crate) fn split_free_text(s: &str) -> Vec<String> {
    s.split(['\n', ',', '，', '、'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn stringify(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => serde_json::to_string(other).ok(),
    }
}
