use serde_json::Value;

/// Wrapper keys under which models nest the real payload, in priority order.
const WRAPPER_KEYS: [&str; 5] = ["recipe", "data", "result", "output", "payload"];

/// Peel known wrapper framing off an already-parsed value: an array of
/// candidates yields its first object element, and an object wrapped under a
/// known key is unwrapped one level, recursing when the inner value is itself
/// wrapped. Pure; input without framing comes back unchanged.
pub fn unwrap_payload(value: Value) -> Value {
    unwrap_depth(value, 0)
}

fn unwrap_depth(value: Value, depth: u8) -> Value {
    if depth >= 3 {
        return value;
    }
    match value {
        Value::Array(mut items) => {
            if items.is_empty() {
                return Value::Array(items);
            }
            let idx = items.iter().position(Value::is_object).unwrap_or(0);
            unwrap_depth(items.swap_remove(idx), depth + 1)
        }
        Value::Object(mut map) => {
            let hit = WRAPPER_KEYS
                .iter()
                .find(|k| matches!(map.get(**k), Some(Value::Object(_) | Value::Array(_))))
                .copied();
            match hit {
                Some(key) => {
                    let inner = map.remove(key).unwrap_or(Value::Null);
                    unwrap_depth(inner, depth + 1)
                }
                None => Value::Object(map),
            }
        }
        other => other,
    }
}
