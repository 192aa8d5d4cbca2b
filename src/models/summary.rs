use crate::utils::time::format_duration;
use serde::Serialize;
use std::collections::BTreeMap;

/// Totals over a set of entries. `by_project` only holds projects that had at
/// least one entry, and iterates in ascending project order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub by_project: BTreeMap<String, i64>,
    pub total_minutes: i64,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.by_project.is_empty()
    }

    /// `(project, "Xh Ym")` rows in display order.
    pub fn rows(&self) -> Vec<(String, String)> {
        self.by_project
            .iter()
            .map(|(project, mins)| (project.clone(), format_duration(*mins)))
            .collect()
    }

    pub fn total_readable(&self) -> String {
        format_duration(self.total_minutes)
    }
}
