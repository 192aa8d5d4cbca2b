use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::{date, time::format_duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg);

        let Some(entry) = store.get(*id).cloned() else {
            // a repeated delete is not an error
            info(format!("Entry #{} does not exist, nothing to delete.", id));
            return Ok(());
        };

        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!(
                "Delete entry #{} ({}, {} {}-{}, {})?",
                entry.id(),
                entry.project(),
                date::format_display(entry.date()),
                entry.start_str(),
                entry.end_str(),
                format_duration(entry.duration())
            );
            if !confirm(&prompt, "Confirm")? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        if store.remove(*id)? {
            success(format!("Entry #{} has been deleted.", id));
        } else {
            info(format!("Entry #{} does not exist, nothing to delete.", id));
        }
    }

    Ok(())
}
