//! Filter engine: holds the current criteria and narrows an entry list.

use crate::models::entry::TimeEntry;
use crate::models::filter::FilterCriteria;
use crate::utils::date;
use chrono::NaiveDate;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEngine {
    criteria: FilterCriteria,
}

impl FilterEngine {
    /// Engine starting on the current calendar month.
    pub fn new() -> Self {
        let mut engine = Self::default();
        engine.current_month();
        engine
    }

    /// Engine starting on the given criteria.
    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the criteria wholesale.
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        debug!(?criteria, "filter set");
        self.criteria = criteria;
    }

    /// Drop every constraint.
    pub fn clear(&mut self) {
        self.set_filter(FilterCriteria::default());
    }

    /// First to last day of today's month (local calendar), any project.
    pub fn current_month(&mut self) {
        self.month_containing(date::today());
    }

    pub fn month_containing(&mut self, day: NaiveDate) {
        self.set_filter(FilterCriteria::month_of(day));
    }

    /// Whether `entry` satisfies every active constraint.
    ///
    /// Dates compare as calendar days; for zero-padded ISO strings this is the
    /// same order as comparing the text.
    pub fn matches(&self, entry: &TimeEntry) -> bool {
        let c = &self.criteria;

        if let Some(start) = c.start_date
            && entry.date() < start
        {
            return false;
        }
        if let Some(end) = c.end_date
            && entry.date() > end
        {
            return false;
        }
        if let Some(project) = &c.project
            && entry.project() != project.as_str()
        {
            return false;
        }

        true
    }

    /// Entries that pass the filter, in their original order.
    pub fn apply<'a>(&self, entries: &'a [TimeEntry]) -> Vec<&'a TimeEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}
