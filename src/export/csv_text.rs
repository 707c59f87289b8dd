// src/export/csv_text.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, row_to_record};
use crate::models::TelopRow;
use csv::{Terminator, WriterBuilder};

/// Render header + rows as CSV text.
///
/// Records are separated by a single `\n`; the last line has no terminator.
pub(crate) fn render_csv(rows: &[TelopRow]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(row_to_record(row))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
}
