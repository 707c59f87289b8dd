// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::csv_text::render_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::render_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::TelopRow;
use crate::ui::messages::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Check name and data before anything is rendered or written.
    ///
    /// - `file_name` must end with the format extension (case-insensitive)
    /// - `rows` must not be empty
    pub fn validate(format: ExportFormat, file_name: &str, rows: &[TelopRow]) -> AppResult<()> {
        if !format.accepts(file_name) {
            return Err(AppError::Validation {
                name: file_name.to_string(),
                extension: format.extension(),
            });
        }

        if rows.is_empty() {
            return Err(AppError::EmptyData);
        }

        Ok(())
    }

    /// Render rows to text without touching the filesystem.
    pub fn render(format: ExportFormat, rows: &[TelopRow]) -> AppResult<String> {
        match format {
            ExportFormat::Csv => render_csv(rows),
            ExportFormat::Json => render_json(rows),
        }
    }

    /// Validate, render and write `dir/file_name`.
    ///
    /// Nothing is written when validation or rendering fails.
    pub fn export(
        format: ExportFormat,
        rows: &[TelopRow],
        dir: &Path,
        file_name: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        Self::validate(format, file_name, rows)?;

        let content = Self::render(format, rows)?;

        let path = dir.join(file_name);
        ensure_writable(&path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str(),
            path.display()
        ));

        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, content.as_bytes())?;

        notify_export_success(format.as_str(), &path, rows.len());
        Ok(path)
    }
}
