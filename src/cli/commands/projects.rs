use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::distinct_projects;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);
    let projects = distinct_projects(store.all());

    if projects.is_empty() {
        info("No projects yet. Add an entry with --new-project NAME.");
        return Ok(());
    }

    for p in projects {
        println!("{p}");
    }
    Ok(())
}
