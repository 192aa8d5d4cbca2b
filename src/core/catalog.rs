use crate::models::entry::TimeEntry;
use std::collections::BTreeSet;

/// Distinct project names across `entries`, ascending. Includes projects
/// that only appear in old entries.
pub fn distinct_projects<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    entries
        .into_iter()
        .map(|e| e.project())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
