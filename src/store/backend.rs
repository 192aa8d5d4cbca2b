//! Durable slots for the entry list.
//!
//! A backend only knows how to read and write the whole JSON array; the
//! store decides when.

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub trait EntryBackend {
    /// Read the full list. A missing slot is an empty list.
    fn load(&self) -> AppResult<Vec<TimeEntry>>;

    /// Replace the slot with `entries`. Either the new list is stored
    /// completely or the previous content is left untouched.
    fn save(&mut self, entries: &[TimeEntry]) -> AppResult<()>;

    /// Move unreadable content aside so the next save does not destroy it.
    /// Returns where it went, if anywhere.
    fn quarantine(&mut self) -> AppResult<Option<String>> {
        Ok(None)
    }
}

fn decode(raw: &str, origin: &str) -> AppResult<Vec<TimeEntry>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
        .map_err(|e| AppError::Persistence(format!("corrupt entry data in {origin}: {e}")))
}

fn encode(entries: &[TimeEntry]) -> AppResult<String> {
    serde_json::to_string(entries)
        .map_err(|e| AppError::Persistence(format!("cannot serialize entries: {e}")))
}

// ---------------------------
// In-memory
// ---------------------------

/// Keeps the serialized slot in memory. Used by tests and by callers that
/// don't want anything on disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    slot: Option<String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw slot content, e.g. JSON written by another version.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
            fail_writes: false,
        }
    }

    /// Make every following `save` fail, as a full storage quota would.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl EntryBackend for MemoryBackend {
    fn load(&self) -> AppResult<Vec<TimeEntry>> {
        match &self.slot {
            Some(raw) => decode(raw, "memory slot"),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, entries: &[TimeEntry]) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Persistence("storage quota exceeded".into()));
        }
        self.slot = Some(encode(entries)?);
        Ok(())
    }
}

// ---------------------------
// JSON file
// ---------------------------

/// One JSON file holding the whole array.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "entries.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl EntryBackend for JsonFileBackend {
    fn load(&self) -> AppResult<Vec<TimeEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::Persistence(format!(
                    "cannot read {}: {e}",
                    self.path.display()
                )));
            }
        };

        let entries = decode(&raw, &self.path.display().to_string())?;
        debug!(path = %self.path.display(), count = entries.len(), "entries loaded");
        Ok(entries)
    }

    fn save(&mut self, entries: &[TimeEntry]) -> AppResult<()> {
        let json = encode(entries)?;
        let tmp = self.temp_path();

        let write = || -> io::Result<()> {
            if let Some(parent) = self.path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&tmp, json.as_bytes())?;
            fs::rename(&tmp, &self.path)
        };

        write().map_err(|e| {
            // leave the old slot as it was
            fs::remove_file(&tmp).ok();
            AppError::Persistence(format!("cannot write {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), count = entries.len(), "entries saved");
        Ok(())
    }

    fn quarantine(&mut self) -> AppResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let stamp = Local::now().format("%Y%m%d%H%M%S%3f");
        let base = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "entries.json".into());

        // rename replaces an existing target, so never reuse a name
        let mut dest = self.path.clone();
        for n in 0u32.. {
            let mut name = base.clone();
            name.push(format!(".corrupt-{stamp}"));
            if n > 0 {
                name.push(format!("-{n}"));
            }
            dest = self.path.with_file_name(name);
            if !dest.exists() {
                break;
            }
        }

        fs::rename(&self.path, &dest)?;
        warn!(from = %self.path.display(), to = %dest.display(), "unreadable data file moved aside");
        Ok(Some(dest.display().to_string()))
    }
}
