pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod projects;
pub mod summary;

use crate::cli::parser::{FilterArgs, FilterRequest};
use crate::config::{Config, DefaultFilter};
use crate::core::FilterEngine;
use crate::errors::AppResult;
use crate::store::{EntryStore, JsonFileBackend};
use crate::ui::messages::warning;

/// Open the entry store on the configured data file, telling the user when
/// existing data could not be read.
pub(crate) fn open_store(cfg: &Config) -> EntryStore<JsonFileBackend> {
    let store = EntryStore::open(JsonFileBackend::new(&cfg.data_file));
    if let Some(reason) = store.load_warning() {
        warning(format!("Stored entries could not be read, starting empty: {reason}"));
    }
    store
}

/// Filter engine for the given flags, falling back to the configured default.
pub(crate) fn filter_engine(args: &FilterArgs, cfg: &Config) -> AppResult<FilterEngine> {
    let mut engine = FilterEngine::new();

    match args.to_request()? {
        FilterRequest::Set(criteria) => engine.set_filter(criteria),
        FilterRequest::Clear => engine.clear(),
        FilterRequest::Default => match cfg.default_filter {
            DefaultFilter::CurrentMonth => engine.current_month(),
            DefaultFilter::All => engine.clear(),
        },
    }

    Ok(engine)
}
