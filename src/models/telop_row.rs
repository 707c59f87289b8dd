use serde::Serialize;

/// Column labels shared by the review table and the CSV header.
pub const HEADERS: [&str; 5] = ["経過時間", "区間", "テロップ内容", "文字数", "文字数/秒"];

/// A processed caption row.
///
/// `duration` is computed from `time_range`, but both are kept: the range text
/// is exported as-is even when it could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelopRow {
    /// Elapsed minutes, `None` when the lead field is not a usable range.
    pub duration: Option<i64>,
    pub time_range: String,
    pub caption: Option<String>,
    /// Fields after the caption, kept untouched.
    pub passthrough: Vec<String>,
    pub char_count: Option<usize>,
    /// Characters per minute, rounded to 6 decimals.
    pub rate: Option<f64>,
}

impl TelopRow {
    /// The five exported values as text; `None` becomes an empty cell.
    pub fn cells(&self) -> [String; 5] {
        [
            opt_to_string(self.duration),
            self.time_range.clone(),
            self.caption.clone().unwrap_or_default(),
            opt_to_string(self.char_count),
            opt_to_string(self.rate),
        ]
    }
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
