use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// No repair pass, including the balanced-extractor fallback, yielded
    /// parseable text.
    SyntaxRecovery,
    /// The text parsed but the normalized candidate was rejected by the
    /// validation gate.
    SchemaValidation,
}

/// Structured failure result. The pipeline never throws; every irrecoverable
/// input is converted into one of these, preserving as much signal as possible
/// for caller inspection.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct RepairFailure {
    pub kind: FailureKind,
    pub message: String,
    /// Raw model output, truncated to `Options::raw_text_limit` characters.
    pub raw_text_truncated: String,
    /// Text after the repair passes, when they ran to completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_text: Option<String>,
    /// The normalized candidate, when parsing succeeded but validation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_effort_candidate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator_issues: Option<Vec<String>>,
}

impl RepairFailure {
    pub(crate) fn syntax(message: String, raw_truncated: String, cleaned: String) -> Self {
        Self {
            kind: FailureKind::SyntaxRecovery,
            message,
            raw_text_truncated: raw_truncated,
            cleaned_text: Some(cleaned),
            best_effort_candidate: None,
            validator_issues: None,
        }
    }

    pub(crate) fn schema(
        raw_truncated: String,
        cleaned: String,
        candidate: Value,
        issues: Vec<String>,
    ) -> Self {
        Self {
            kind: FailureKind::SchemaValidation,
            message: format!("candidate rejected by validator: {}", issues.join("; ")),
            raw_text_truncated: raw_truncated,
            cleaned_text: Some(cleaned),
            best_effort_candidate: Some(candidate),
            validator_issues: Some(issues),
        }
    }
}

/// Truncate to a character limit without splitting a code point.
pub(crate) fn truncate_chars(s: &str, limit: usize) -> String {
    match s.char_indices().nth(limit) {
        Some((byte, _)) => s[..byte].to_string(),
        None => s.to_string(),
    }
}
