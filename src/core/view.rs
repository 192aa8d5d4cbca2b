use crate::core::{aggregate, filter::FilterEngine};
use crate::models::entry::TimeEntry;
use crate::models::summary::Summary;

/// What the front-end renders after every change: the filtered entries, their
/// totals and a description of the active filter.
#[derive(Debug)]
pub struct View<'a> {
    pub entries: Vec<&'a TimeEntry>,
    pub summary: Summary,
    pub filter_status: Option<String>,
}

pub fn build_view<'a>(entries: &'a [TimeEntry], engine: &FilterEngine) -> View<'a> {
    let filtered = engine.apply(entries);
    let summary = aggregate::summarize(filtered.iter().copied());

    View {
        entries: filtered,
        summary,
        filter_status: engine.criteria().describe(),
    }
}
