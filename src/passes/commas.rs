use crate::classify::{is_value_terminal, is_whitespace};
use crate::diag::{Diags, build_context};
use crate::options::Options;
use crate::passes::{last_significant, string_end};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FrameKind {
    Object,
    Array,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    kind: FrameKind,
    expecting_key: bool,
}

/// Inject the comma models drop between adjacent object members:
/// `"key": value "key2": value2`. A string opening under an object frame is
/// classified as a key by looking forward (past its own escapes) for `:`;
/// the comma is injected when the last significant emitted character closes a
/// value. Ambiguous boundaries are reported, not guessed. String content,
/// once opened, is copied through unmodified.
pub(crate) fn repair_commas(input: &str, opts: &Options, diags: &mut Diags) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 8);
    let mut stack: Vec<Frame> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' {
            let end = string_end(&chars, i);
            let in_object = matches!(
                stack.last(),
                Some(Frame {
                    kind: FrameKind::Object,
                    ..
                })
            );
            if in_object {
                let mut k = end;
                while k < chars.len() && is_whitespace(chars[k]) {
                    k += 1;
                }
                let is_key = matches!(chars.get(k), Some(':'));
                if is_key
                    && let Some(top) = stack.last_mut()
                    && !top.expecting_key
                {
                    match last_significant(&out) {
                        Some(prev) if matches!(prev, ',' | '{' | ':') => {}
                        Some(prev)
                            if is_value_terminal(prev)
                                || opts.extra_value_terminals.contains(&prev) =>
                        {
                            out.push(',');
                            top.expecting_key = true;
                            diags.warn_at(
                                "commas",
                                i,
                                "inserted missing comma before object key",
                                build_context(&chars, i, opts.log_context_window),
                            );
                        }
                        Some(prev) => {
                            diags.warn_at(
                                "commas",
                                i,
                                format!(
                                    "key follows {:?} which does not close a value, no comma inserted",
                                    prev
                                ),
                                build_context(&chars, i, opts.log_context_window),
                            );
                        }
                        None => {}
                    }
                }
            }
            out.extend(&chars[i..end]);
            i = end;
            continue;
        }
        match c {
            '{' => stack.push(Frame {
                kind: FrameKind::Object,
                expecting_key: true,
            }),
            '[' => stack.push(Frame {
                kind: FrameKind::Array,
                expecting_key: false,
            }),
            '}' | ']' => {
                stack.pop();
            }
            ':' => {
                if let Some(top) = stack.last_mut() {
                    top.expecting_key = false;
                }
            }
            ',' => {
                if let Some(top) = stack.last_mut() {
                    top.expecting_key = true;
                }
            }
            _ => {}
        }
        out.push(c);
        i += 1;
    }
    out
}
