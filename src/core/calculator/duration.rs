//! Clock-time parsing and elapsed-minute computation for `HH:MM-HH:MM` ranges.

use crate::errors::ParseIssue;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Convert `H:MM` / `HH:MM` to minutes since midnight.
///
/// Only the first two `:`-separated parts are read and neither is range
/// checked, so `25:00` gives 1500. Values too large for `i64` minutes are
/// rejected like any other malformed token.
pub fn parse_time(s: &str) -> Result<i64, ParseIssue> {
    let mut parts = s.split(':');
    let hours = parts.next().and_then(parse_component);
    let minutes = parts.next().and_then(parse_component);

    match (hours, minutes) {
        (Some(h), Some(m)) => h
            .checked_mul(60)
            .and_then(|v| v.checked_add(m))
            .ok_or_else(|| ParseIssue::InvalidTime(s.to_string())),
        _ => Err(ParseIssue::InvalidTime(s.to_string())),
    }
}

fn parse_component(part: &str) -> Option<i64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Whether a lead field should be read as a time range at all.
pub fn looks_like_range(field: &str) -> bool {
    field.contains('-')
}

/// Elapsed minutes of a `start-end` range.
///
/// - no `-` at all → `Ok(None)`, the field is simply not a range
/// - empty start or end → `InvalidRange`
/// - end before start → the range crosses midnight once (+1440)
pub fn compute_duration(range: &str) -> Result<Option<i64>, ParseIssue> {
    if !looks_like_range(range) {
        return Ok(None);
    }

    // "a-b-c": si usano solo i primi due segmenti
    let mut segments = range.split('-');
    let start = segments.next().unwrap_or_default();
    let end = segments.next().unwrap_or_default();

    if start.is_empty() || end.is_empty() {
        return Err(ParseIssue::InvalidRange(range.to_string()));
    }

    let start_min = parse_time(start)?;
    let end_min = parse_time(end)?;

    let mut duration = end_min - start_min;
    if duration < 0 {
        duration += MINUTES_PER_DAY;
    }

    Ok(Some(duration))
}
