// src/export/model.rs

use crate::models::TelopRow;
use crate::models::telop_row::HEADERS;

/// Header per CSV (etichette fisse).
pub(crate) fn get_headers() -> Vec<&'static str> {
    HEADERS.to_vec()
}

/// Replace every line break (`\r\n`, `\r`, `\n`) with a single space.
pub fn sanitize_cell(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Convert a row into the five exported cells.
pub(crate) fn row_to_record(row: &TelopRow) -> Vec<String> {
    row.cells().iter().map(|c| sanitize_cell(c)).collect()
}
