// src/export/json.rs

use crate::errors::AppResult;
use crate::models::TelopRow;

/// Pretty JSON array of full rows (passthrough fields included).
pub(crate) fn render_json(rows: &[TelopRow]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
