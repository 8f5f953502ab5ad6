use crate::diag::Diags;
use crate::normalize::coerce_number;
use crate::options::Options;
use crate::record::Heat;
use serde_json::{Map, Value};

const PLACEHOLDER_SHOT_KEYS: [&str; 3] = ["cover_main", "cover_detail", "cover_inside"];

/// Fill structurally-required-but-absent fields with deterministic
/// placeholders, never overwriting present values. Total: any parsed value
/// (`null`, a string, an array, garbage) yields a record satisfying the
/// structural invariants. Placeholder text is templated around the fallback
/// title only; no culinary claims are fabricated.
pub fn ensure_minimums(
    value: Value,
    fallback_title: &str,
    opts: &Options,
    diags: &mut Diags,
) -> Value {
    let mut map = match value {
        Value::Object(m) => m,
        other => {
            diags.warn(
                "ensure",
                format!(
                    "candidate is {}, building minimal record from fallback title",
                    type_name(&other)
                ),
            );
            Map::new()
        }
    };

    let has_title = map
        .get("titleZh")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !has_title {
        diags.warn("ensure", "missing title, used fallback title");
        map.insert(
            "titleZh".to_string(),
            Value::String(fallback_title.to_string()),
        );
    }
    let title = map
        .get("titleZh")
        .and_then(Value::as_str)
        .unwrap_or(fallback_title)
        .to_string();

    ensure_summary(&mut map, &title, diags);
    ensure_ingredients(&mut map, &title, opts, diags);
    ensure_steps(&mut map, diags);
    ensure_shots(&mut map, diags);

    if !matches!(map.get("styleGuide"), Some(Value::Object(_))) {
        map.insert("styleGuide".to_string(), Value::Object(Map::new()));
    }
    let has_story = map
        .get("story")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !has_story {
        let story = map
            .get("summary")
            .and_then(|s| s.get("oneLine"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}的故事还没有写下来。", title));
        map.insert("story".to_string(), Value::String(story));
    }

    Value::Object(map)
}

fn ensure_summary(map: &mut Map<String, Value>, title: &str, diags: &mut Diags) {
    let mut summary = match map.remove("summary") {
        Some(Value::Object(m)) => m,
        _ => Map::new(),
    };
    if !present_str(&summary, "oneLine") {
        summary.insert(
            "oneLine".to_string(),
            Value::String(format!("一道以{}为主角的菜。", title)),
        );
    }
    if !present_str(&summary, "healingTone") {
        summary.insert(
            "healingTone".to_string(),
            Value::String(format!("按自己的节奏，把{}慢慢做好。", title)),
        );
    }
    if !present_str(&summary, "difficulty") {
        diags.warn("ensure", "missing difficulty, defaulted to medium");
        summary.insert("difficulty".to_string(), Value::String("medium".to_string()));
    }
    for (key, default) in [("timeTotalMin", 30.0), ("timeActiveMin", 15.0), ("servings", 2.0)] {
        let ok = summary.get(key).and_then(coerce_number).is_some();
        if !ok {
            summary.insert(key.to_string(), Value::from(default));
        } else if !summary.get(key).is_some_and(Value::is_number) {
            // present but string-typed: re-coerce in place
            let n = summary.get(key).and_then(coerce_number).unwrap_or(default);
            summary.insert(key.to_string(), Value::from(n));
        }
    }
    map.insert("summary".to_string(), Value::Object(summary));
}

fn ensure_ingredients(
    map: &mut Map<String, Value>,
    title: &str,
    opts: &Options,
    diags: &mut Diags,
) {
    let mut sections: Vec<Value> = match map.remove("ingredients") {
        Some(Value::Array(a)) => a,
        _ => Vec::new(),
    };
    sections.retain(|s| {
        let keep = s
            .get("items")
            .and_then(Value::as_array)
            .is_some_and(|a| !a.is_empty());
        if !keep {
            diags.warn("ensure", "dropped ingredient section without items");
        }
        keep
    });
    for section in &mut sections {
        if let Some(items) = section.get_mut("items").and_then(Value::as_array_mut) {
            for item in items {
                backfill_item(item, diags);
            }
        }
    }
    if sections.is_empty() {
        diags.warn("ensure", "no usable ingredients, inserted placeholder section");
        let mut item = Map::new();
        item.insert("name".to_string(), Value::String(title.to_string()));
        item.insert("amount".to_string(), Value::from(1.0));
        item.insert("unit".to_string(), Value::String("份".to_string()));
        let mut section = Map::new();
        section.insert(
            "section".to_string(),
            Value::String(opts.default_section_name.clone()),
        );
        section.insert("items".to_string(), Value::Array(vec![Value::Object(item)]));
        sections.push(Value::Object(section));
    }
    map.insert("ingredients".to_string(), Value::Array(sections));
}

fn backfill_item(item: &mut Value, diags: &mut Diags) {
    let Some(m) = item.as_object_mut() else {
        diags.warn("ensure", "replaced non-object ingredient item");
        let mut repl = Map::new();
        repl.insert("name".to_string(), Value::String("食材".to_string()));
        repl.insert("amount".to_string(), Value::from(1.0));
        repl.insert("unit".to_string(), Value::String("适量".to_string()));
        *item = Value::Object(repl);
        return;
    };
    if !m.get("name").and_then(Value::as_str).is_some_and(|s| !s.trim().is_empty()) {
        m.insert("name".to_string(), Value::String("食材".to_string()));
    }
    let amount = m.get("amount").and_then(coerce_number);
    m.insert("amount".to_string(), Value::from(amount.unwrap_or(1.0)));
    if !m.get("unit").is_some_and(Value::is_string) {
        m.insert("unit".to_string(), Value::String("适量".to_string()));
    }
}

fn ensure_steps(map: &mut Map<String, Value>, diags: &mut Diags) {
    let mut steps: Vec<Value> = match map.remove("steps") {
        Some(Value::Array(a)) => a,
        _ => Vec::new(),
    };
    steps.retain(|s| s.is_object());
    for (idx, step) in steps.iter_mut().enumerate() {
        let Some(m) = step.as_object_mut() else { continue };
        if !m.get("id").and_then(Value::as_str).is_some_and(|s| !s.is_empty()) {
            m.insert(
                "id".to_string(),
                Value::String(format!("step{:02}", idx + 1)),
            );
        }
        let action_ok = m
            .get("action")
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty());
        if !action_ok {
            diags.warn("ensure", format!("step {} had no action text", idx + 1));
            m.insert(
                "action".to_string(),
                Value::String("按顺序完成这一步。".to_string()),
            );
        }
        if !m.get("title").and_then(Value::as_str).is_some_and(|s| !s.is_empty()) {
            m.insert(
                "title".to_string(),
                Value::String(format!("第{}步", idx + 1)),
            );
        }
        // heat is re-validated defensively even when the normalizer already ran
        let heat_ok = m
            .get("heat")
            .and_then(Value::as_str)
            .and_then(Heat::canonical)
            .is_some();
        if heat_ok {
            let canon = m
                .get("heat")
                .and_then(Value::as_str)
                .and_then(Heat::canonical)
                .unwrap_or("medium");
            m.insert("heat".to_string(), Value::String(canon.to_string()));
        } else {
            if m.contains_key("heat") {
                diags.warn("ensure", format!("step {} heat re-leveled to medium", idx + 1));
            }
            m.insert("heat".to_string(), Value::String("medium".to_string()));
        }
    }
    if steps.is_empty() {
        diags.warn("ensure", "no usable steps, inserted generic preparation step");
        let mut m = Map::new();
        m.insert("id".to_string(), Value::String("step01".to_string()));
        m.insert("title".to_string(), Value::String("准备".to_string()));
        m.insert(
            "action".to_string(),
            Value::String("把需要的食材准备好。".to_string()),
        );
        m.insert("heat".to_string(), Value::String("medium".to_string()));
        steps.push(Value::Object(m));
    }
    map.insert("steps".to_string(), Value::Array(steps));
}

fn ensure_shots(map: &mut Map<String, Value>, diags: &mut Diags) {
    let mut shots: Vec<Value> = match map.remove("imageShots") {
        Some(Value::Array(a)) => a.into_iter().filter(Value::is_object).collect(),
        Some(_) | None => Vec::new(),
    };
    if shots.len() < 3 {
        diags.warn(
            "ensure",
            format!("padded imageShots from {} to 3 placeholder slots", shots.len()),
        );
    }
    let taken: Vec<String> = shots
        .iter()
        .filter_map(|s| s.get("key").and_then(Value::as_str).map(str::to_string))
        .collect();
    let mut free = PLACEHOLDER_SHOT_KEYS
        .iter()
        .filter(|k| !taken.iter().any(|t| t == **k));
    let mut extra = 0usize;
    while shots.len() < 3 {
        let key = match free.next() {
            Some(k) => (*k).to_string(),
            None => {
                extra += 1;
                format!("extra{:02}", extra)
            }
        };
        let mut m = Map::new();
        m.insert("key".to_string(), Value::String(key));
        m.insert("imagePrompt".to_string(), Value::String(String::new()));
        m.insert("ratio".to_string(), Value::String("16:9".to_string()));
        m.insert("imageUrl".to_string(), Value::String(String::new()));
        shots.push(Value::Object(m));
    }
    map.insert("imageShots".to_string(), Value::Array(shots));
}

fn present_str(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
