use crate::diag::{Diagnostic, Diags};
use crate::ensure::ensure_minimums;
use crate::error::{RepairFailure, truncate_chars};
use crate::normalize::normalize_candidate;
use crate::options::Options;
use crate::passes::commas::repair_commas;
use crate::passes::extract::extract_balanced;
use crate::passes::literals::repair_literals;
use crate::passes::preprocess::preprocess;
use crate::passes::punctuation::{escape_newlines, normalize_punctuation};
use crate::passes::quotes::{collapse_doubled_quotes, convert_single_quotes, quote_bare_keys};
use crate::record::RecipeRecord;
use crate::unwrap::unwrap_payload;
use crate::validate::{RecordValidator, SchemaValidator};
use serde_json::Value;

/// Successful pipeline result: the canonical record plus every heuristic
/// decision made on the way there.
#[derive(Debug, Clone)]
pub struct RepairedRecipe {
    pub record: RecipeRecord,
    pub warnings: Vec<Diagnostic>,
}

/// Run the text-level repair passes and return the candidate JSON text.
/// Total; every pass is a fixed-character-set scanner that cannot fail.
pub fn repair_text(input: &str, opts: &Options, diags: &mut Diags) -> String {
    let s = preprocess(input);
    let s = normalize_punctuation(&s);
    let s = escape_newlines(&s);
    let s = convert_single_quotes(&s);
    let s = quote_bare_keys(&s);
    let s = collapse_doubled_quotes(&s);
    let s = repair_commas(&s, opts, diags);
    repair_literals(&s, diags)
}

/// Repair raw model output into a canonical recipe record, validated by the
/// built-in schema validator. Never panics; irrecoverable input becomes a
/// structured [`RepairFailure`].
pub fn repair_recipe(
    input: &str,
    fallback_title: &str,
    opts: &Options,
) -> Result<RepairedRecipe, RepairFailure> {
    repair_recipe_with(input, fallback_title, opts, &SchemaValidator)
}

/// Like [`repair_recipe`], generic over the validation gate.
pub fn repair_recipe_with<V: RecordValidator>(
    input: &str,
    fallback_title: &str,
    opts: &Options,
    validator: &V,
) -> Result<RepairedRecipe, RepairFailure> {
    let mut diags = Diags::new();
    let cleaned = repair_text(input, opts, &mut diags);

    let parsed: Value = match serde_json::from_str(&cleaned) {
        Ok(v) => v,
        Err(first_err) => match extract_balanced(&cleaned) {
            Some(span) => match serde_json::from_str(span) {
                Ok(v) => {
                    diags.warn("extract", "recovered a balanced object span after parse failure");
                    v
                }
                Err(e) => return Err(syntax_failure(input, &cleaned, &e, opts)),
            },
            None => return Err(syntax_failure(input, &cleaned, &first_err, opts)),
        },
    };

    let unwrapped = unwrap_payload(parsed);
    let normalized = normalize_candidate(unwrapped, opts, &mut diags);
    let candidate = ensure_minimums(normalized, fallback_title, opts, &mut diags);

    match validator.validate(&candidate) {
        Ok(record) => Ok(RepairedRecipe {
            record,
            warnings: diags.into_entries(),
        }),
        Err(issues) => Err(RepairFailure::schema(
            truncate_chars(input, opts.raw_text_limit),
            cleaned,
            candidate,
            issues,
        )),
    }
}

fn syntax_failure(
    raw: &str,
    cleaned: &str,
    err: &serde_json::Error,
    opts: &Options,
) -> RepairFailure {
    let context = numbered_context(cleaned, err.line());
    let message = if context.is_empty() {
        format!("JSON parse failed after all repair passes: {}", err)
    } else {
        format!("JSON parse failed after all repair passes: {}\n{}", err, context)
    };
    RepairFailure::syntax(
        message,
        truncate_chars(raw, opts.raw_text_limit),
        cleaned.to_string(),
    )
}

/// Line-numbered context around the parse error position.
fn numbered_context(text: &str, err_line: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return String::new();
    }
    let line = err_line.clamp(1, lines.len());
    let lo = line.saturating_sub(2);
    let hi = (line + 1).min(lines.len());
    lines[lo..hi]
        .iter()
        .enumerate()
        .map(|(k, l)| format!("{:>4} | {}", lo + k + 1, l))
        .collect::<Vec<_>>()
        .join("\n")
}
