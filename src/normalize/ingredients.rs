use crate::diag::Diags;
use crate::normalize::{
    coerce_number, coerce_number_str, first_nonempty_str, numeric_prefix_len, split_free_text,
    stringify,
};
use crate::options::Options;
use crate::record::IconKey;
use serde_json::{Map, Value};

/// Accept a section->items map, a flat item list, a free-text blob, or
/// already-correct nesting, and produce the canonical `[{section, items}]`
/// shape. String items like `"盐 5克"` are parsed via the trailing-amount/unit
/// pattern.
pub(crate) fn normalize_ingredients(v: &Value, opts: &Options, diags: &mut Diags) -> Value {
    match v {
        Value::Array(items) if !items.is_empty() && items.iter().all(is_section_like) => {
            Value::Array(
                items
                    .iter()
                    .map(|s| normalize_section(s, opts, diags))
                    .collect(),
            )
        }
        Value::Array(items) => {
            let its: Vec<Value> = items.iter().map(|it| normalize_item(it, diags)).collect();
            Value::Array(vec![section_value(&opts.default_section_name, its)])
        }
        Value::Object(_) if is_section_like(v) => {
            Value::Array(vec![normalize_section(v, opts, diags)])
        }
        Value::Object(map) => Value::Array(
            map.iter()
                .map(|(name, items)| {
                    let its: Vec<Value> = match items {
                        Value::Array(a) => a.iter().map(|it| normalize_item(it, diags)).collect(),
                        other => vec![normalize_item(other, diags)],
                    };
                    section_value(name, its)
                })
                .collect(),
        ),
        Value::String(s) => {
            let its: Vec<Value> = split_free_text(s)
                .iter()
                .map(|t| parse_item_text(t, diags))
                .collect();
            Value::Array(vec![section_value(&opts.default_section_name, its)])
        }
        _ => {
            diags.warn(
                "normalize",
                "unusable ingredients shape, deferring to placeholder synthesis",
            );
            Value::Array(Vec::new())
        }
    }
}

fn is_section_like(v: &Value) -> bool {
    v.as_object().is_some_and(|m| {
        matches!(
            m.get("items").or_else(|| m.get("list")),
            Some(Value::Array(_))
        )
    })
}

fn normalize_section(v: &Value, opts: &Options, diags: &mut Diags) -> Value {
    let Some(m) = v.as_object() else {
        return section_value(&opts.default_section_name, Vec::new());
    };
    let name = first_nonempty_str(m, &["section", "name", "title"])
        .unwrap_or_else(|| opts.default_section_name.clone());
    let its: Vec<Value> = match m.get("items").or_else(|| m.get("list")) {
        Some(Value::Array(a)) => a.iter().map(|it| normalize_item(it, diags)).collect(),
        _ => Vec::new(),
    };
    section_value(&name, its)
}

fn normalize_item(v: &Value, diags: &mut Diags) -> Value {
    match v {
        Value::String(s) => parse_item_text(s, diags),
        Value::Object(m) => {
            let name = first_nonempty_str(m, &["name", "ingredient", "item"]).unwrap_or_else(|| {
                diags.warn("normalize", "ingredient item without a name");
                "食材".to_string()
            });
            let mut amount: Option<f64> = None;
            let mut unit_from_amount: Option<String> = None;
            match m
                .get("amount")
                .or_else(|| m.get("qty"))
                .or_else(|| m.get("quantity"))
            {
                Some(Value::String(s)) => {
                    let t = s.trim();
                    match coerce_number_str(t) {
                        Some(n) => {
                            amount = Some(n);
                            // keep a unit suffix like "300克" unless an
                            // explicit unit field wins below
                            let p = numeric_prefix_len(t);
                            if p > 0 && p < t.len() {
                                let suffix = t[p..].trim();
                                if !suffix.is_empty() {
                                    unit_from_amount = Some(suffix.to_string());
                                }
                            }
                        }
                        // non-numeric amount text carries the unit instead
                        None if !t.is_empty() => unit_from_amount = Some(t.to_string()),
                        None => {}
                    }
                }
                Some(other) => amount = coerce_number(other),
                None => {}
            }
            let unit = first_nonempty_str(m, &["unit", "uom", "measure"])
                .or(unit_from_amount)
                .unwrap_or_else(|| "适量".to_string());
            let mut out = Map::new();
            out.insert("name".to_string(), Value::String(name));
            out.insert("amount".to_string(), Value::from(amount.unwrap_or(1.0)));
            out.insert("unit".to_string(), Value::String(unit));
            if let Some(raw) = first_nonempty_str(m, &["iconKey", "icon", "category"]) {
                let key = IconKey::canonical(&raw).unwrap_or_else(|| {
                    diags.warn(
                        "normalize",
                        format!("unrecognized iconKey {:?}, fell back to other", raw),
                    );
                    "other"
                });
                out.insert("iconKey".to_string(), Value::String(key.to_string()));
            }
            if let Some(n) = first_nonempty_str(m, &["notes", "note", "remark"]) {
                out.insert("notes".to_string(), Value::String(n));
            }
            Value::Object(out)
        }
        other => match stringify(other) {
            Some(s) => parse_item_text(&s, diags),
            None => item_value("食材", 1.0, "适量"),
        },
    }
}

/// Parse `"盐 5克"`-style text: the last numeric run is the amount, what
/// follows it is the unit, what precedes it is the name. Leading-amount text
/// like `"500克牛肉"` is split after the unit word.
pub(crate) fn parse_item_text(text: &str, diags: &mut Diags) -> Value {
    let t = text.trim();
    let chars: Vec<char> = t.chars().collect();
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let mut j = 0;
    while j < chars.len() {
        if chars[j].is_ascii_digit() {
            let s = j;
            while j < chars.len() && (chars[j].is_ascii_digit() || chars[j] == '.' || chars[j] == '/')
            {
                j += 1;
            }
            runs.push((s, j));
        } else {
            j += 1;
        }
    }
    if let Some(&(s, e)) = runs.last()
        && let Some(amount) = coerce_number_str(&chars[s..e].iter().collect::<String>())
    {
        let name = chars[..s].iter().collect::<String>().trim().to_string();
        let suffix = chars[e..].iter().collect::<String>().trim().to_string();
        if !name.is_empty() {
            return item_value(&name, amount, &suffix);
        }
        if let Some((head, rest)) = suffix.split_once(char::is_whitespace)
            && !rest.trim().is_empty()
        {
            return item_value(rest.trim(), amount, head.trim());
        }
        let mut it = suffix.chars();
        if let Some(u) = it.next() {
            let rest: String = it.collect();
            if !rest.trim().is_empty() {
                return item_value(rest.trim(), amount, &u.to_string());
            }
        }
    }
    diags.warn(
        "normalize",
        format!("ingredient text {:?} carries no amount, defaulted", t),
    );
    item_value(t, 1.0, "适量")
}

fn item_value(name: &str, amount: f64, unit: &str) -> Value {
    let mut m = Map::new();
    m.insert("name".to_string(), Value::String(name.to_string()));
    m.insert("amount".to_string(), Value::from(amount));
    m.insert("unit".to_string(), Value::String(unit.to_string()));
    Value::Object(m)
}

fn section_value(name: &str, items: Vec<Value>) -> Value {
    let mut m = Map::new();
    m.insert("section".to_string(), Value::String(name.to_string()));
    m.insert("items".to_string(), Value::Array(items));
    Value::Object(m)
}
