use memchr::{memchr, memrchr};

/// Strip code-fence markers and surrounding prose, keeping the substring
/// between the first `{` and the last `}` when both exist in that order.
/// Total: anything without a brace window passes through unchanged.
pub(crate) fn preprocess(input: &str) -> String {
    let s = strip_fences(input.trim());
    let bytes = s.as_bytes();
    match (memchr(b'{', bytes), memrchr(b'}', bytes)) {
        (Some(start), Some(end)) if start < end => s[start..=end].to_string(),
        _ => s.to_string(),
    }
}

fn strip_fences(s: &str) -> &str {
    let mut t = s;
    if let Some(rest) = t.strip_prefix("```") {
        // optional language tag, then one newline
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
        t = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest);
    }
    if let Some(rest) = t.trim_end().strip_suffix("```") {
        t = rest;
    }
    t.trim()
}
