// JSON export of analysis results.
//
// Serializes the full Analysis — documents, matrix, scores, best match —
// so the tool's output can be scripted against.

use anyhow::Result;

use crate::analysis::engine::Analysis;

/// Render the analysis as pretty-printed JSON.
pub fn render(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
