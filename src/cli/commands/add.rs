use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::NewEntry;
use crate::ui::messages::{info, success};
use crate::utils::time::format_duration;

/// Record a new work interval.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        project,
        description,
    } = cmd
    {
        //
        // 1. Parse input (date, times, project choice)
        //
        let project_input = project.to_input()?;
        let candidate = NewEntry::from_input(date, start, end, &project_input, description)?;

        //
        // 2. Store (validates and persists)
        //
        let mut store = open_store(cfg);
        let is_known = store.all().iter().any(|e| e.project() == candidate.project.trim());
        let entry = store.add(candidate)?;

        if project_input.is_new() && is_known {
            info(format!("Project '{}' already exists, entry added to it.", entry.project()));
        }

        success(format!(
            "Entry #{} added: {} {}-{} {} ({})",
            entry.id(),
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.project(),
            format_duration(entry.duration())
        ));
    }

    Ok(())
}
