use crate::record::RecipeRecord;
use serde_json::Value;

/// Final accept/reject gate. The pipeline is generic over this seam so a
/// deployment can swap in its own declarative validator; overall success is
/// parse success AND acceptance here.
pub trait RecordValidator {
    fn validate(&self, candidate: &Value) -> Result<RecipeRecord, Vec<String>>;
}

/// Built-in validator: typed deserialization into [`RecipeRecord`] plus the
/// structural invariant checks the schema cannot express.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaValidator;

impl RecordValidator for SchemaValidator {
    fn validate(&self, candidate: &Value) -> Result<RecipeRecord, Vec<String>> {
        let record: RecipeRecord = match serde_json::from_value(candidate.clone()) {
            Ok(r) => r,
            Err(e) => return Err(vec![format!("schema: {}", e)]),
        };
        let mut issues = Vec::new();
        if record.title_zh.trim().is_empty() {
            issues.push("titleZh must be non-empty".to_string());
        }
        if record.ingredients.is_empty() {
            issues.push("ingredients must contain at least one section".to_string());
        }
        for (i, section) in record.ingredients.iter().enumerate() {
            if section.items.is_empty() {
                issues.push(format!("ingredients[{}] has no items", i));
            }
            for (j, item) in section.items.iter().enumerate() {
                if !item.amount.is_finite() {
                    issues.push(format!("ingredients[{}].items[{}].amount is not finite", i, j));
                }
            }
        }
        if record.steps.is_empty() {
            issues.push("steps must contain at least one step".to_string());
        }
        for (i, step) in record.steps.iter().enumerate() {
            if step.action.trim().is_empty() {
                issues.push(format!("steps[{}].action is empty", i));
            }
            if step.timer_sec.is_some_and(|t| !t.is_finite()) {
                issues.push(format!("steps[{}].timerSec is not finite", i));
            }
        }
        if record.image_shots.len() < 3 {
            issues.push(format!(
                "imageShots must contain at least 3 entries, got {}",
                record.image_shots.len()
            ));
        }
        for (name, n) in [
            ("timeTotalMin", record.summary.time_total_min),
            ("timeActiveMin", record.summary.time_active_min),
            ("servings", record.summary.servings),
        ] {
            if !n.is_finite() {
                issues.push(format!("summary.{} is not finite", name));
            }
        }
        if issues.is_empty() { Ok(record) } else { Err(issues) }
    }
}
