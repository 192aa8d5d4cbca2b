// src/export/model.rs

use crate::models::entry::TimeEntry;
use crate::utils::time::format_duration;
use serde::Serialize;

/// Flat row used by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub id: u64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub project: String,
    pub description: String,
    pub duration_minutes: i64,
    pub duration: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id(),
            date: e.date_str(),
            start_time: e.start_str(),
            end_time: e.end_str(),
            project: e.project().to_string(),
            description: e.description().to_string(),
            duration_minutes: e.duration(),
            duration: format_duration(e.duration()),
        }
    }
}
