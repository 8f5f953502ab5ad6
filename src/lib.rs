mod classify;
pub mod cli;
mod diag;
mod ensure;
pub mod error;
mod normalize;
pub mod options;
mod passes;
mod pipeline;
pub mod record;
mod unwrap;
pub mod validate;

pub use diag::{Diagnostic, Diags};
pub use error::{FailureKind, RepairFailure};
pub use options::Options;
pub use pipeline::{RepairedRecipe, repair_recipe, repair_recipe_with, repair_text};
pub use record::{
    Difficulty, Heat, IconKey, ImageShot, IngredientItem, IngredientSection, Ratio, RecipeRecord,
    Step, Summary, TroubleshootingEntry,
};
pub use validate::{RecordValidator, SchemaValidator};

pub use ensure::ensure_minimums;
pub use normalize::normalize_candidate;
pub use passes::extract::extract_balanced;
pub use unwrap::unwrap_payload;

#[cfg(test)]
mod tests;
