use crate::classify::is_whitespace;
use crate::diag::{Diags, build_context};
use crate::passes::{last_significant, string_end};

/// Scalar fields whose bare (unquoted) values get fixed up in place.
const WATCHED_KEYS: [&str; 3] = ["amount", "unit", "notes"];

/// Order-sensitive cleanup after structural repair, one string-aware scan:
/// drop a comma sitting before `}`/`]`, collapse comma runs, drop a comma
/// right after `{`/`[`, rewrite `amount: n/m` to its decimal quotient, and
/// quote bare tokens assigned to known scalar fields (literal `null` and
/// numeric tokens are kept).
pub(crate) fn repair_literals(input: &str, diags: &mut Diags) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut pending_key: Option<String> = None;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            let end = string_end(&chars, i);
            pending_key = Some(string_content(&chars, i, end));
            out.extend(&chars[i..end]);
            i = end;
            continue;
        }
        match c {
            ':' => {
                let key = pending_key.take();
                out.push(':');
                i += 1;
                while i < chars.len() && is_whitespace(chars[i]) {
                    out.push(chars[i]);
                    i += 1;
                }
                let watched = key
                    .as_deref()
                    .is_some_and(|k| WATCHED_KEYS.contains(&k));
                if watched
                    && i < chars.len()
                    && !matches!(chars[i], '"' | '{' | '[' | '}' | ']' | ',')
                {
                    let start = i;
                    let mut j = i;
                    while j < chars.len()
                        && !matches!(chars[j], ',' | '}' | ']' | '\n' | '\r' | '"')
                    {
                        j += 1;
                    }
                    let raw: String = chars[start..j].iter().collect();
                    let token = raw.trim();
                    if token.is_empty() {
                        out.push_str(&raw);
                    } else if token == "null" {
                        out.push_str("null");
                    } else if key.as_deref() == Some("amount")
                        && let Some(dec) = fraction_to_decimal(token)
                    {
                        out.push_str(&dec);
                        diags.warn_at(
                            "literals",
                            start,
                            format!("rewrote fraction {} to {}", token, dec),
                            build_context(&chars, start, 10),
                        );
                    } else if token.parse::<f64>().is_ok() {
                        out.push_str(token);
                    } else {
                        out.push('"');
                        out.push_str(token);
                        out.push('"');
                        diags.warn_at(
                            "literals",
                            start,
                            format!("quoted bare value {:?}", token),
                            build_context(&chars, start, 10),
                        );
                    }
                    i = j;
                }
            }
            ',' => {
                let mut k = i + 1;
                while k < chars.len() && is_whitespace(chars[k]) {
                    k += 1;
                }
                // trailing comma, comma run, or comma opening a container
                if matches!(chars.get(k), Some('}' | ']' | ','))
                    || matches!(last_significant(&out), Some('{' | '[') | None)
                {
                    i += 1;
                    continue;
                }
                out.push(',');
                i += 1;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn string_content(chars: &[char], open: usize, end: usize) -> String {
    if end > open + 1 && chars.get(end - 1) == Some(&'"') {
        chars[open + 1..end - 1].iter().collect()
    } else {
        chars[open + 1..end].iter().collect()
    }
}

fn fraction_to_decimal(token: &str) -> Option<String> {
    let (num, den) = token.split_once('/')?;
    let n: f64 = num.trim().parse().ok()?;
    let d: f64 = den.trim().parse().ok()?;
    if d == 0.0 {
        return None;
    }
    let q = n / d;
    q.is_finite().then(|| format!("{}", q))
}
