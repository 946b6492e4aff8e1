//! Monthly inflation rate tables and their loaders

mod argentina;
pub mod loader;
mod table;

pub use loader::{load_rates, load_rates_from_reader, RateRecord};
pub use table::RateTable;

use std::sync::OnceLock;

static DEFAULT_TABLE: OnceLock<RateTable> = OnceLock::new();

/// Process-wide read-only table built from the bundled Argentina dataset
pub fn default_table() -> &'static RateTable {
    DEFAULT_TABLE.get_or_init(RateTable::argentina)
}
