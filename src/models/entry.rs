use super::project::ProjectInput;
use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A recorded work interval.
///
/// Persisted as a JSON object:
/// `{ id, date: "YYYY-MM-DD", startTime: "HH:MM", endTime: "HH:MM", project, description, duration }`.
/// Entries are never edited in place; `duration` is always `end_time - start_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredEntry")]
pub struct TimeEntry {
    id: u64,
    date: NaiveDate,
    #[serde(serialize_with = "hhmm::serialize")]
    start_time: NaiveTime,
    #[serde(serialize_with = "hhmm::serialize")]
    end_time: NaiveTime,
    project: String,
    description: String,
    duration: i64,
}

/// Candidate for `EntryStore::add`: everything but the id and the duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub project: String,
    pub description: String,
}

impl NewEntry {
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        project: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            start_time,
            end_time,
            project: project.into(),
            description: description.into(),
        }
    }

    /// Build a candidate from raw user input.
    ///
    /// `start`/`end` may be 24-hour `HH:MM` or 12-hour `H:MM AM|PM`.
    pub fn from_input(
        date_str: &str,
        start: &str,
        end: &str,
        project: &ProjectInput,
        description: &str,
    ) -> AppResult<Self> {
        let d =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
        let start_time = parse_normalized(start)?;
        let end_time = parse_normalized(end)?;

        Ok(Self::new(
            d,
            start_time,
            end_time,
            project.resolve(),
            description.trim(),
        ))
    }
}

fn parse_normalized(input: &str) -> AppResult<NaiveTime> {
    let hhmm = time::parse_user_time(input)?;
    time::parse_time(&hhmm).ok_or(AppError::InvalidTime(hhmm))
}

impl TimeEntry {
    /// Validate a candidate and turn it into an entry with the given id.
    pub fn create(id: u64, candidate: NewEntry) -> AppResult<Self> {
        let project = candidate.project.trim().to_string();
        if project.is_empty() {
            return Err(AppError::Validation("project name must not be empty".into()));
        }

        // stored as HH:MM, so validate what will be stored
        let start_time = time::truncate_to_minute(candidate.start_time);
        let end_time = time::truncate_to_minute(candidate.end_time);

        if !time::is_valid_range(start_time, end_time) {
            return Err(AppError::Validation(format!(
                "end time {} must be after start time {}",
                end_time.format("%H:%M"),
                start_time.format("%H:%M")
            )));
        }

        Ok(Self {
            id,
            date: candidate.date,
            start_time,
            end_time,
            project,
            description: candidate.description,
            duration: time::duration_minutes(start_time, end_time),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }
    pub fn date(&self) -> NaiveDate {
        self.date
    }
    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }
    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }
    pub fn project(&self) -> &str {
        &self.project
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    /// Minutes between start and end.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn date_str(&self) -> String {
        date::to_iso(self.date)
    }
    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }
    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }
}

/// On-disk shape. Older or foreign writers may omit `description` or
/// `duration`, and may add fields we don't know about (ignored).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    id: u64,
    date: String,
    start_time: String,
    end_time: String,
    project: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<StoredEntry> for TimeEntry {
    type Error = AppError;

    fn try_from(raw: StoredEntry) -> AppResult<Self> {
        let d = date::parse_date(&raw.date).ok_or(AppError::InvalidDate(raw.date))?;
        let start = time::parse_time(&raw.start_time).ok_or(AppError::InvalidTime(raw.start_time))?;
        let end = time::parse_time(&raw.end_time).ok_or(AppError::InvalidTime(raw.end_time))?;

        // duration is derived: recompute instead of trusting the stored number
        TimeEntry::create(
            raw.id,
            NewEntry::new(d, start, end, raw.project, raw.description.unwrap_or_default()),
        )
    }
}

/// `NaiveTime` -> `"HH:MM"`; reading goes through `StoredEntry`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format("%H:%M").to_string())
    }
}
