pub mod aggregate;
pub mod backup;
pub mod catalog;
pub mod filter;
pub mod view;

pub use aggregate::summarize;
pub use catalog::distinct_projects;
pub use filter::FilterEngine;
pub use view::{View, build_view};
