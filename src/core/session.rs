//! Session controller: the only owner of raw text, rows, selection and the
//! user-facing message.
//!
//! Each public method is one user action. Blocking failures store their text
//! in `error_message` and are returned; a later successful action clears it.
//! Parse issues only update the message.

use crate::core::pipeline::{self, Batch};
use crate::errors::{AppError, AppResult, ParseIssue};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::TelopRow;
use crate::models::raw_row::WhitespaceMode;
use chrono::{Local, NaiveDateTime};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_PREFIX: &str = "output_with_header";

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub whitespace: WhitespaceMode,
    /// Stem of the timestamped default file name.
    pub file_prefix: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            whitespace: WhitespaceMode::default(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    options: SessionOptions,
    raw_text: String,
    rows: Vec<TelopRow>,
    selected: BTreeSet<usize>,
    warnings: Vec<ParseIssue>,
    error_message: Option<String>,
    /// Default name without extension, set by `process`.
    default_stem: String,
    file_name_input: String,
}

/// `{prefix}_YYYYMMDD_HHMMSS`
pub fn default_file_stem(prefix: &str, now: NaiveDateTime) -> String {
    format!("{prefix}_{}", now.format("%Y%m%d_%H%M%S"))
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    // ---------------------------
    // Input
    // ---------------------------

    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
    }

    /// Read a whole file and replace the raw text.
    ///
    /// On failure the previous text is kept.
    pub fn load_file(&mut self, path: &Path) -> AppResult<usize> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let len = text.len();
                self.raw_text = text;
                Ok(len)
            }
            Err(e) => self.fail(e.into()),
        }
    }

    // ---------------------------
    // Processing
    // ---------------------------

    pub fn process(&mut self) -> AppResult<usize> {
        self.process_at(Local::now().naive_local())
    }

    /// Rebuild rows from the raw text; `now` drives the default file name.
    ///
    /// Rows and selection are replaced wholesale, never merged.
    pub fn process_at(&mut self, now: NaiveDateTime) -> AppResult<usize> {
        self.error_message = None;
        self.warnings.clear();
        self.rows.clear();
        self.selected.clear();

        let Batch { rows, issues } =
            match pipeline::process_text(&self.raw_text, self.options.whitespace) {
                Ok(batch) => batch,
                Err(e) => return self.fail(e),
            };

        self.error_message = issues.last().map(|i| format!("Warning: {i}"));
        self.warnings = issues;
        self.rows = rows;

        self.default_stem = default_file_stem(&self.options.file_prefix, now);
        self.file_name_input = self.output_file_name();

        Ok(self.rows.len())
    }

    // ---------------------------
    // Selection
    // ---------------------------

    /// Flip selection of row `index` (0-based); returns the new state.
    pub fn toggle_row(&mut self, index: usize) -> AppResult<bool> {
        if index >= self.rows.len() {
            return self.fail(AppError::InvalidRow(index + 1));
        }

        self.error_message = None;
        if self.selected.remove(&index) {
            Ok(false)
        } else {
            self.selected.insert(index);
            Ok(true)
        }
    }

    pub fn select_all(&mut self, flag: bool) {
        self.error_message = None;
        if flag {
            self.selected = (0..self.rows.len()).collect();
        } else {
            self.selected.clear();
        }
    }

    /// Drop every selected row and reset the selection; returns how many
    /// rows were removed.
    pub fn delete_selected(&mut self) -> usize {
        self.error_message = None;
        let before = self.rows.len();
        let selected = std::mem::take(&mut self.selected);

        let mut index = 0;
        self.rows.retain(|_| {
            let keep = !selected.contains(&index);
            index += 1;
            keep
        });

        before - self.rows.len()
    }

    // ---------------------------
    // File name / export
    // ---------------------------

    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.error_message = None;
        self.file_name_input = name.into();
    }

    /// Default CSV name produced by the last `process`.
    pub fn output_file_name(&self) -> String {
        self.default_name(ExportFormat::Csv)
    }

    fn default_name(&self, format: ExportFormat) -> String {
        if self.default_stem.is_empty() {
            return String::new();
        }
        format!("{}.{}", self.default_stem, format.extension())
    }

    /// User input when non-blank, otherwise the timestamped default.
    ///
    /// The default follows `format`, so a JSON export of an untouched session
    /// gets a `.json` name.
    pub fn resolved_file_name(&self, format: ExportFormat) -> String {
        let input = self.file_name_input.trim();
        if input.is_empty() || (input == self.output_file_name() && format != ExportFormat::Csv)
        {
            self.default_name(format)
        } else {
            input.to_string()
        }
    }

    /// Validate and render the export without writing it.
    pub fn render(&mut self, format: ExportFormat) -> AppResult<String> {
        let name = self.resolved_file_name(format);
        let rendered = ExportLogic::validate(format, &name, &self.rows)
            .and_then(|_| ExportLogic::render(format, &self.rows));

        match rendered {
            Ok(text) => {
                self.error_message = None;
                Ok(text)
            }
            Err(e) => self.fail(e),
        }
    }

    /// Write the export into `dir` under the resolved file name.
    pub fn download(&mut self, dir: &Path, format: ExportFormat, force: bool) -> AppResult<PathBuf> {
        let name = self.resolved_file_name(format);

        match ExportLogic::export(format, &self.rows, dir, &name, force) {
            Ok(path) => {
                self.error_message = None;
                Ok(path)
            }
            Err(e) => self.fail(e),
        }
    }

    // ---------------------------
    // Accessors
    // ---------------------------

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn rows(&self) -> &[TelopRow] {
        &self.rows
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Header checkbox state: non-empty table with every row selected.
    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.selected.len() == self.rows.len()
    }

    pub fn warnings(&self) -> &[ParseIssue] {
        &self.warnings
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn file_name_input(&self) -> &str {
        &self.file_name_input
    }

    fn fail<T>(&mut self, err: AppError) -> AppResult<T> {
        self.error_message = Some(err.to_string());
        Err(err)
    }
}
