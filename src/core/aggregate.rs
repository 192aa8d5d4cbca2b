use crate::models::entry::TimeEntry;
use crate::models::summary::Summary;

/// Per-project and grand totals (in minutes) over `entries`.
pub fn summarize<'a, I>(entries: I) -> Summary
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    let mut summary = Summary::default();

    for e in entries {
        *summary
            .by_project
            .entry(e.project().to_string())
            .or_insert(0) += e.duration();
        summary.total_minutes += e.duration();
    }

    summary
}
