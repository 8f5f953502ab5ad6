use memchr::memchr;

/// Find the first brace-balanced `{...}` span, ignoring braces inside string
/// literals. Returns `None` when the depth never returns to zero. Used once
/// as a fallback after the first parse attempt fails.
pub fn extract_balanced(input: &str) -> Option<&str> {
    let start = memchr(b'{', input.as_bytes())?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in input[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&input[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }
    None
}
