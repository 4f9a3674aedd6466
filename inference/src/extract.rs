//! Best-effort JSON recovery from model completions.
//!
//! Locally hosted models frequently wrap valid JSON in explanatory prose or
//! markdown fences even when asked not to. The ladder here is an ordered list
//! of pure extraction strategies tried in sequence; the caller gets either a
//! parsed value or the stage at which recovery gave up. No strategy ever
//! substitutes a default value.

use serde_json::Value;

use crate::error::ExtractionStage;

/// Direct parse of the whole completion text.
fn parse_direct(text: &str) -> Option<Value> {
    serde_json::from_str(text.trim()).ok()
}

/// Scan backwards from the final `}` for a balanced `{...}` block and parse
/// that block on its own. Handles prose-wrapped and fenced completions.
fn parse_trailing_object(text: &str) -> Option<Value> {
    let bytes = text.as_bytes();
    let end = text.rfind('}')?;
    let mut depth = 0usize;
    for i in (0..=end).rev() {
        match bytes[i] {
            b'}' => depth += 1,
            b'{' => {
                depth -= 1;
                if depth == 0 {
                    return serde_json::from_str(&text[i..=end]).ok();
                }
            }
            _ => {}
        }
    }
    None
}

/// Run the recovery ladder over `text`. On failure the error names the last
/// stage attempted.
pub fn extract_json(text: &str) -> Result<Value, ExtractionStage> {
    let ladder: [(ExtractionStage, fn(&str) -> Option<Value>); 2] = [
        (ExtractionStage::Direct, parse_direct),
        (ExtractionStage::Relaxed, parse_trailing_object),
    ];
    let mut failed_at = ExtractionStage::Direct;
    for (stage, strategy) in ladder {
        if let Some(value) = strategy(text) {
            return Ok(value);
        }
        failed_at = stage;
    }
    Err(failed_at)
}
