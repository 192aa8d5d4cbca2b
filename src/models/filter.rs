use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Active constraints on the entry list. Every field is optional; `None` means
/// "no constraint on that dimension". Criteria are always replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub project: Option<String>,
}

impl FilterCriteria {
    pub fn new(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        project: Option<String>,
    ) -> Self {
        // an empty project string is the same as "any project"
        let project = project.filter(|p| !p.is_empty());
        Self {
            start_date,
            end_date,
            project,
        }
    }

    /// First to last day of the month containing `day`, any project.
    pub fn month_of(day: NaiveDate) -> Self {
        let (first, last) = date::month_bounds(day);
        Self::new(Some(first), Some(last), None)
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.project.is_none()
    }

    /// Human readable description of the active filters, `None` if there are none.
    ///
    /// `Mar 1, 2024 - Mar 31, 2024 • Project: Acme`
    pub fn describe(&self) -> Option<String> {
        let mut parts = Vec::new();

        let range = match (self.start_date, self.end_date) {
            (Some(s), Some(e)) => Some(format!(
                "{} - {}",
                date::format_display(s),
                date::format_display(e)
            )),
            (Some(s), None) => Some(format!("From {}", date::format_display(s))),
            (None, Some(e)) => Some(format!("Until {}", date::format_display(e))),
            (None, None) => None,
        };
        if let Some(r) = range {
            parts.push(r);
        }

        if let Some(p) = &self.project {
            parts.push(format!("Project: {p}"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" • "))
        }
    }
}
