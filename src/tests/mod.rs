mod normalize_core;
mod normalize_shots;
mod punctuation_newlines;
mod quotes;
mod unwrap_payload;
