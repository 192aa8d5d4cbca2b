pub mod entry;
pub mod filter;
pub mod period;
pub mod project;
pub mod summary;
