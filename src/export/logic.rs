// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::models::entry::TimeEntry;
use crate::ui::messages::{info, warning};
use crate::ui::prompt::confirm_overwrite;
use std::path::Path;

/// High-level export of an (already filtered) entry list.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `entries` to `file`, oldest first.
    ///
    /// Returns the number of rows written; nothing is written for an empty list.
    pub fn export(
        entries: &[&TimeEntry],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if entries.is_empty() {
            warning("No entries found for the selected filter.");
            return Ok(0);
        }

        if path.exists() && !force {
            if !confirm_overwrite(path)? {
                return Err(AppError::Export(
                    "export cancelled: existing file not overwritten".into(),
                ));
            }
            info("Existing file will be overwritten.");
        }

        let mut rows: Vec<EntryExport> = entries.iter().map(|e| EntryExport::from(*e)).collect();
        rows.sort_by(|a, b| {
            (a.date.as_str(), a.start_time.as_str(), a.id)
                .cmp(&(b.date.as_str(), b.start_time.as_str(), b.id))
        });

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
