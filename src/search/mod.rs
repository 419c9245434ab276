//! Live table search: substring filtering over configured cells, a visible
//! row count and a lazily created "no results" row.

pub mod config;
pub mod filter;
pub mod table;

pub use config::TableSearchConfig;
pub use filter::{FilterPass, NoResults};
pub use table::{setup_table_search, TableSearchHandle};
