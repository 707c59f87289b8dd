//! Row-transformation pipeline: text → raw rows → duration → metrics.
//!
//! Everything here is pure: parse problems are returned as `ParseIssue`s next
//! to the rows instead of being reported from inside the computation.

use crate::core::calculator::{duration, metrics};
use crate::errors::{AppError, AppResult, ParseIssue};
use crate::models::raw_row::WhitespaceMode;
use crate::models::{RawRow, TelopRow};

/// Result of one processing run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub rows: Vec<TelopRow>,
    /// Issues in source order; each one nulled a duration.
    pub issues: Vec<ParseIssue>,
}

impl Batch {
    pub fn latest_issue(&self) -> Option<&ParseIssue> {
        self.issues.last()
    }
}

/// Split text into non-blank lines and comma-separated, cleaned fields.
pub fn split_rows(text: &str, mode: WhitespaceMode) -> Vec<RawRow> {
    text.trim()
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| RawRow::parse(line, mode))
        .collect()
}

/// Attach duration and metrics to a raw row.
///
/// The duration is passed in already resolved so this step never fails.
pub fn enrich(raw: &RawRow, duration: Option<i64>) -> TelopRow {
    let caption = raw.caption().map(str::to_string);
    let char_count = metrics::char_count(caption.as_deref());
    let rate = metrics::rate(char_count, duration);

    TelopRow {
        duration,
        time_range: raw.lead().to_string(),
        caption,
        passthrough: raw.passthrough().to_vec(),
        char_count,
        rate,
    }
}

/// Run the whole pipeline over `text`.
///
/// Blank input is the only blocking error; malformed ranges only produce
/// issues.
pub fn process_text(text: &str, mode: WhitespaceMode) -> AppResult<Batch> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let mut batch = Batch::default();

    for raw in split_rows(text, mode) {
        let minutes = match duration::compute_duration(raw.lead()) {
            Ok(m) => m,
            Err(issue) => {
                batch.issues.push(issue);
                None
            }
        };
        batch.rows.push(enrich(&raw, minutes));
    }

    Ok(batch)
}
