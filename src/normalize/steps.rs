use crate::diag::Diags;
use crate::error::truncate_chars;
use crate::normalize::{coerce_number, first_nonempty_str, loose_array, split_free_text, stringify};
use crate::options::Options;
use crate::record::Heat;
use serde_json::{Map, Value};

pub(crate) fn steps_container(src: &Map<String, Value>) -> Option<&Value> {
    ["steps", "instructions", "directions", "method"]
        .iter()
        .find_map(|k| src.get(*k))
}

/// Accept bare strings, objects with alternate action-field names, or a
/// free-text blob; generate missing ids (`step01`, ...) and level `heat` onto
/// the canonical vocabulary, defaulting to `medium`.
pub(crate) fn normalize_steps(v: &Value, opts: &Options, diags: &mut Diags) -> Value {
    let items: Vec<Value> = match v {
        Value::Array(a) => a.clone(),
        Value::String(s) => split_free_text(s).into_iter().map(Value::String).collect(),
        other => vec![other.clone()],
    };
    Value::Array(
        items
            .iter()
            .enumerate()
            .map(|(i, it)| normalize_step(it, i, opts, diags))
            .collect(),
    )
}

fn normalize_step(v: &Value, idx: usize, opts: &Options, diags: &mut Diags) -> Value {
    let mut out = Map::new();
    match v {
        Value::String(s) => {
            let s = s.trim();
            out.insert("id".to_string(), Value::String(step_id(idx)));
            out.insert(
                "title".to_string(),
                Value::String(truncate_chars(s, opts.title_truncate_chars)),
            );
            out.insert("action".to_string(), Value::String(s.to_string()));
            out.insert("heat".to_string(), Value::String("medium".to_string()));
        }
        Value::Object(m) => {
            let id = first_nonempty_str(m, &["id", "stepId"]).unwrap_or_else(|| step_id(idx));
            let action = first_nonempty_str(
                m,
                &["action", "content", "description", "text", "step", "instruction"],
            )
            .unwrap_or_default();
            let title = first_nonempty_str(m, &["title", "name"])
                .unwrap_or_else(|| truncate_chars(&action, opts.title_truncate_chars));
            let heat = match first_nonempty_str(m, &["heat", "fire", "flame"]) {
                Some(raw) => Heat::canonical(&raw).unwrap_or_else(|| {
                    diags.warn(
                        "normalize",
                        format!("unrecognized heat {:?}, defaulted to medium", raw),
                    );
                    "medium"
                }),
                None => "medium",
            };
            out.insert("id".to_string(), Value::String(id));
            out.insert("title".to_string(), Value::String(title));
            out.insert("action".to_string(), Value::String(action));
            out.insert("heat".to_string(), Value::String(heat.to_string()));
            if let Some(n) = ["timerSec", "timer", "seconds", "durationSec"]
                .iter()
                .find_map(|k| m.get(*k).and_then(coerce_number))
            {
                out.insert("timerSec".to_string(), Value::from(n));
            }
            if let Some(cue) = first_nonempty_str(m, &["visualCue", "visual_cue", "cue"]) {
                out.insert("visualCue".to_string(), Value::String(cue));
            }
            if let Some(v) = m
                .get("failurePoints")
                .or_else(|| m.get("failure_points"))
                .or_else(|| m.get("pitfalls"))
                && let Some(items) = loose_array(v, diags)
            {
                let strings: Vec<Value> = items
                    .iter()
                    .filter_map(stringify)
                    .map(Value::String)
                    .collect();
                if !strings.is_empty() {
                    out.insert("failurePoints".to_string(), Value::Array(strings));
                }
            }
        }
        other => {
            let text = stringify(other).unwrap_or_default();
            diags.warn("normalize", "non-text step entry coerced to string");
            out.insert("id".to_string(), Value::String(step_id(idx)));
            out.insert(
                "title".to_string(),
                Value::String(truncate_chars(&text, opts.title_truncate_chars)),
            );
            out.insert("action".to_string(), Value::String(text));
            out.insert("heat".to_string(), Value::String("medium".to_string()));
        }
    }
    Value::Object(out)
}

pub(crate) fn step_id(idx: usize) -> String {
    format!("step{:02}", idx + 1)
}
