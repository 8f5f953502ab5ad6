use serde::Serialize;

/// One non-fatal heuristic decision made while repairing or normalizing.
/// Collected and returned alongside success so recovery is never silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Pipeline stage that made the guess, e.g. "commas" or "normalize".
    pub stage: &'static str,
    pub message: String,
    /// Character position in the text being scanned, when the stage has one.
    pub position: Option<usize>,
    /// Snippet around `position`, empty when not applicable.
    pub context: String,
}

#[derive(Debug, Default)]
pub struct Diags {
    entries: Vec<Diagnostic>,
}

impl Diags {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn warn(&mut self, stage: &'static str, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            stage,
            message: message.into(),
            position: None,
            context: String::new(),
        });
    }

    #[inline]
    pub(crate) fn warn_at(
        &mut self,
        stage: &'static str,
        position: usize,
        message: impl Into<String>,
        context: String,
    ) {
        self.entries.push(Diagnostic {
            stage,
            message: message.into(),
            position: Some(position),
            context,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[inline]
pub(crate) fn build_context(chars: &[char], pos: usize, win: usize) -> String {
    let start = pos.saturating_sub(win);
    let end = (pos + win).min(chars.len());
    chars[start..end].iter().collect()
}
