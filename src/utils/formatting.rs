//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Terminal columns taken by `s` (CJK characters count double).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad to `width` terminal columns; `format!("{:<w$}")` counts chars, not columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - w))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - w), s)
}

/// Parse a list of 1-based row numbers ("2, 4 5") into 0-based indices.
pub fn parse_row_numbers(input: &str) -> Result<Vec<usize>, String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| match t.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n - 1),
            _ => Err(format!("Invalid row number: {t}")),
        })
        .collect()
}
