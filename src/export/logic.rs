// src/export/logic.rs

use crate::core::views::StatusRow;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::utils::fs::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

/// Export of the status view.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `file` in the requested format.
    /// An existing file is only replaced with `force` or after confirmation.
    pub fn export(rows: &[StatusRow], format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        if rows.is_empty() {
            warning("No rows match the selected filters; writing an empty export.");
        }

        match format {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
        }
    }
}
