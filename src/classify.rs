#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    // Include U+FEFF (BOM) as whitespace-equivalent so stray BOMs never derail a scan.
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000D}' | '\u{0020}' | '\u{FEFF}'
    )
}

#[inline]
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Full-width punctuation that models emit when prompted in Chinese.
/// Only rewritten outside string literals.
#[inline]
pub(crate) fn ascii_for_fullwidth(c: char) -> Option<char> {
    match c {
        '\u{FF1A}' => Some(':'), // ：
        '\u{FF0C}' => Some(','), // ，
        '\u{FF1D}' => Some('='), // ＝
        _ => None,
    }
}

/// Last character of a completed JSON value: closing quote, closing bracket,
/// a digit, or the tail of `true`/`false`/`null`.
#[inline]
pub(crate) fn is_value_terminal(c: char) -> bool {
    matches!(c, '"' | '}' | ']' | 'e' | 'l') || c.is_ascii_digit()
}
