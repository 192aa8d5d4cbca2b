use crate::cli::commands::list::print_filter_status;
use crate::cli::commands::{filter_engine, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::build_view;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { filter } = cmd {
        let store = open_store(cfg);
        let engine = filter_engine(filter, cfg)?;
        let view = build_view(store.all(), &engine);

        print_filter_status(&view);
        header("Summary");

        if view.summary.is_empty() {
            info("No data to summarize.");
        } else {
            let mut table = Table::new(vec![Column::new("Project"), Column::new("Time")]);
            for (project, time) in view.summary.rows() {
                table.add_row(vec![project, time]);
            }
            print!("{}", table.render());
        }

        println!("Total: {}", view.summary.total_readable());
    }
    Ok(())
}
