#[derive(Clone, Debug)]
pub struct Options {
    /// Extra characters treated as value-terminal when deciding whether to
    /// inject a comma before an object key. The base set covers `"` `}` `]`,
    /// digits and the keyword tails of true/false/null; production may add
    /// more as new model failure modes show up.
    pub extra_value_terminals: Vec<char>,
    /// Maximum characters of raw model output echoed back in failure reports.
    pub raw_text_limit: usize,
    /// Context window size used when building diagnostic context snippets.
    /// Controls how many characters are captured on both sides of the position.
    pub log_context_window: usize,
    /// Section name used when a flat ingredient list is wrapped into a single
    /// section.
    pub default_section_name: String,
    /// Maximum characters kept when deriving a step title from its action text.
    pub title_truncate_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            extra_value_terminals: Vec::new(),
            raw_text_limit: 2000,
            log_context_window: 10,
            default_section_name: "主料".to_string(),
            title_truncate_chars: 12,
        }
    }
}
