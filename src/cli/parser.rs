use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::filter::FilterCriteria;
use crate::models::project::ProjectInput;
use crate::utils::date;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimeTracker
#[derive(Parser)]
#[command(
    name = "rtimetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small time tracker: log work intervals per project and review totals",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a separate log)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (config file neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Show or repair the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,
    },

    /// Record a work interval
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM, or "H:MM AM|PM")
        start: String,

        /// End time (HH:MM, or "H:MM AM|PM"), must be after the start
        end: String,

        #[command(flatten)]
        project: ProjectArgs,

        /// Free text description
        #[arg(long = "desc", short = 'd', default_value = "")]
        description: String,
    },

    /// Delete an entry by id
    Del {
        /// Entry id, as shown by `list`
        id: u64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries matching the filter (current month by default)
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Per-project and total time for the filter (current month by default)
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List every project name ever used
    Projects,

    /// Export the filtered entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Copy the data file somewhere safe
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Store the copy as a .zip archive")]
        compress: bool,
    },
}

/// Project selection: either one already in use or a new name.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ProjectArgs {
    /// Existing project name (see `projects`)
    #[arg(long = "project", short = 'p')]
    pub existing: Option<String>,

    /// A project name not used before
    #[arg(long = "new-project")]
    pub new: Option<String>,
}

impl ProjectArgs {
    pub fn to_input(&self) -> AppResult<ProjectInput> {
        match (&self.existing, &self.new) {
            (Some(name), _) => Ok(ProjectInput::Existing(name.clone())),
            (None, Some(name)) => Ok(ProjectInput::New(name.clone())),
            (None, None) => Err(AppError::Validation("a project is required".into())),
        }
    }
}

/// Filter flags shared by `list`, `summary` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long = "from")]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long = "to")]
    pub to: Option<String>,

    /// Whole month (YYYY-MM); cannot be combined with --from/--to
    #[arg(long = "month", conflicts_with_all = ["from", "to"])]
    pub month: Option<String>,

    /// Only this project (exact, case-sensitive)
    #[arg(long = "project", short = 'p')]
    pub project: Option<String>,

    /// No filter at all
    #[arg(long = "all", conflicts_with_all = ["from", "to", "month", "project"])]
    pub all: bool,
}

/// What the filter flags ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRequest {
    /// No flag given: use the configured default.
    Default,
    /// `--all`
    Clear,
    Set(FilterCriteria),
}

impl FilterArgs {
    pub fn to_request(&self) -> AppResult<FilterRequest> {
        if self.all {
            return Ok(FilterRequest::Clear);
        }

        if self.from.is_none() && self.to.is_none() && self.month.is_none() && self.project.is_none()
        {
            return Ok(FilterRequest::Default);
        }

        let (start, end) = match &self.month {
            Some(m) => {
                let first = parse_month(m)?;
                let (s, e) = date::month_bounds(first);
                (Some(s), Some(e))
            }
            None => (parse_opt_date(&self.from)?, parse_opt_date(&self.to)?),
        };

        Ok(FilterRequest::Set(FilterCriteria::new(
            start,
            end,
            self.project.clone(),
        )))
    }
}

fn parse_opt_date(s: &Option<String>) -> AppResult<Option<NaiveDate>> {
    s.as_deref()
        .map(|d| date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string())))
        .transpose()
}

fn parse_month(m: &str) -> AppResult<NaiveDate> {
    date::parse_date(&format!("{}-01", m.trim())).ok_or_else(|| AppError::InvalidDate(m.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(from: Option<&str>, to: Option<&str>, month: Option<&str>, project: Option<&str>) -> FilterArgs {
        FilterArgs {
            from: from.map(String::from),
            to: to.map(String::from),
            month: month.map(String::from),
            project: project.map(String::from),
            all: false,
        }
    }

    #[test]
    fn no_flags_means_default() {
        assert_eq!(FilterArgs::default().to_request().unwrap(), FilterRequest::Default);
    }

    #[test]
    fn month_flag_spans_the_month() {
        let req = args(None, None, Some("2024-02"), Some("Acme")).to_request().unwrap();
        assert_eq!(
            req,
            FilterRequest::Set(FilterCriteria::new(
                date::parse_date("2024-02-01"),
                date::parse_date("2024-02-29"),
                Some("Acme".into())
            ))
        );
    }

    #[test]
    fn bad_dates_are_rejected() {
        assert!(matches!(
            args(Some("2024-13-01"), None, None, None).to_request(),
            Err(AppError::InvalidDate(_))
        ));
        assert!(matches!(
            args(None, None, Some("2024"), None).to_request(),
            Err(AppError::InvalidDate(_))
        ));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
