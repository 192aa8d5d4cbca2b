use crate::cli::commands::{filter_engine, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{View, build_view};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use crate::utils::{date, time::format_duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let store = open_store(cfg);
        let engine = filter_engine(filter, cfg)?;
        let view = build_view(store.all(), &engine);

        print_filter_status(&view);

        if view.entries.is_empty() {
            info("No time entries found.");
            return Ok(());
        }

        println!("{}", render_entries(&view));
        println!(
            "{} entries, total {}",
            view.entries.len(),
            view.summary.total_readable()
        );
    }
    Ok(())
}

pub(crate) fn print_filter_status(view: &View<'_>) {
    match &view.filter_status {
        Some(status) => println!("Active filters: {status}"),
        None => println!("Active filters: none"),
    }
}

fn render_entries(view: &View<'_>) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Date"),
        Column::new("Time").min(11),
        Column::new("Duration"),
        Column::new("Project"),
        Column::new("Description"),
    ]);

    for e in &view.entries {
        table.add_row(vec![
            e.id().to_string(),
            date::format_display(e.date()),
            format!("{} - {}", e.start_str(), e.end_str()),
            format_duration(e.duration()),
            e.project().to_string(),
            e.description().to_string(),
        ]);
    }

    table.render()
}
