use serde::{Deserialize, Serialize};

/// How whitespace is removed from every field of a raw line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespaceMode {
    /// Delete every ASCII space, then trim the edges (e.g. a trailing `\r`).
    #[default]
    Remove,
    /// Only trim leading/trailing whitespace.
    Trim,
}

impl WhitespaceMode {
    pub fn clean(self, field: &str) -> String {
        match self {
            WhitespaceMode::Remove => field.replace(' ', "").trim().to_string(),
            WhitespaceMode::Trim => field.trim().to_string(),
        }
    }
}

/// One source line split on commas, fields already cleaned.
///
/// Always holds at least one field (a line without commas is a single field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<String>,
}

impl RawRow {
    pub fn parse(line: &str, mode: WhitespaceMode) -> Self {
        Self {
            fields: line.split(',').map(|f| mode.clean(f)).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// First field: the (possible) time range.
    pub fn lead(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    pub fn caption(&self) -> Option<&str> {
        self.fields.get(1).map(String::as_str)
    }

    pub fn passthrough(&self) -> &[String] {
        self.fields.get(2..).unwrap_or(&[])
    }
}
