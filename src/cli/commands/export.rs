use crate::cli::commands::{filter_engine, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let store = open_store(cfg);
        let engine = filter_engine(filter, cfg)?;
        let entries = engine.apply(store.all());

        ExportLogic::export(&entries, *format, file, *force)?;
    }
    Ok(())
}
