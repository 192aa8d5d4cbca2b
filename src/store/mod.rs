//! Entry store: the ordered list of time entries (newest first) and its
//! durable slot.
//!
//! Every mutation is written through to the backend before it returns. If the
//! write fails the in-memory change is rolled back, so memory and disk never
//! disagree.

pub mod backend;

use crate::errors::{AppError, AppResult};
use crate::models::entry::{NewEntry, TimeEntry};
use backend::EntryBackend;
use chrono::Utc;
use tracing::{info, warn};

pub use backend::{JsonFileBackend, MemoryBackend};

pub struct EntryStore<B: EntryBackend> {
    backend: B,
    entries: Vec<TimeEntry>,
    load_warning: Option<String>,
}

impl<B: EntryBackend> EntryStore<B> {
    /// Load the store from `backend`.
    ///
    /// Unreadable data does not abort: the store starts empty, the bad data is
    /// moved aside when the backend supports it, and the reason is kept in
    /// [`EntryStore::load_warning`].
    pub fn open(mut backend: B) -> Self {
        let (entries, load_warning) = match backend.load() {
            Ok(entries) => (entries, None),
            Err(e) => {
                warn!(error = %e, "could not load entries, starting with an empty list");
                let mut msg = e.to_string();
                match backend.quarantine() {
                    Ok(Some(dest)) => msg.push_str(&format!(" (previous data kept in {dest})")),
                    Ok(None) => {}
                    Err(qe) => warn!(error = %qe, "could not move unreadable data aside"),
                }
                (Vec::new(), Some(msg))
            }
        };

        Self {
            backend,
            entries,
            load_warning,
        }
    }

    /// Why the initial load failed, if it did.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Current entries, newest first.
    pub fn all(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Validate `candidate`, give it a fresh id, put it in front and persist.
    pub fn add(&mut self, candidate: NewEntry) -> AppResult<TimeEntry> {
        let entry = TimeEntry::create(self.next_id(), candidate)?;

        self.entries.insert(0, entry.clone());
        if let Err(e) = self.backend.save(&self.entries) {
            self.entries.remove(0);
            return Err(into_persistence(e));
        }

        info!(
            id = entry.id(),
            project = entry.project(),
            date = %entry.date_str(),
            minutes = entry.duration(),
            "entry added"
        );
        Ok(entry)
    }

    /// Remove the entry with `id`. Returns `false` (and touches nothing) when
    /// no such entry exists, so a repeated delete is harmless.
    pub fn remove(&mut self, id: u64) -> AppResult<bool> {
        let Some(pos) = self.entries.iter().position(|e| e.id() == id) else {
            info!(id, "entry already gone, nothing to remove");
            return Ok(false);
        };

        let removed = self.entries.remove(pos);
        if let Err(e) = self.backend.save(&self.entries) {
            self.entries.insert(pos, removed);
            return Err(into_persistence(e));
        }

        info!(id, project = removed.project(), "entry removed");
        Ok(true)
    }

    /// Like [`EntryStore::remove`] but a missing id is an error.
    pub fn remove_strict(&mut self, id: u64) -> AppResult<TimeEntry> {
        let entry = self.get(id).cloned().ok_or(AppError::NotFound(id))?;
        self.remove(id)?;
        Ok(entry)
    }

    /// Milliseconds since the epoch, bumped past the highest id in use so ids
    /// stay unique and increasing even within one millisecond.
    fn next_id(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let max = self.entries.iter().map(TimeEntry::id).max().unwrap_or(0);
        now.max(max + 1)
    }
}

fn into_persistence(e: AppError) -> AppError {
    match e {
        AppError::Persistence(_) => e,
        other => AppError::Persistence(other.to_string()),
    }
}
