//! Load rate tables from CSV
//!
//! Expected columns: `year,month,rate`, one observation per row, rate in percent.

use super::RateTable;
use crate::error::Result;
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One CSV row
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RateRecord {
    pub year: i32,
    pub month: u32,
    pub rate: f64,
}

/// Load a rate table from a CSV file
pub fn load_rates<P: AsRef<Path>>(path: P) -> Result<RateTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = load_rates_from_reader(file)?;
    info!("Loaded {} monthly rates from {}", table.len(), path.display());
    Ok(table)
}

/// Load a rate table from any CSV reader
pub fn load_rates_from_reader<R: Read>(reader: R) -> Result<RateTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut observations = Vec::new();
    for record in rdr.deserialize() {
        let record: RateRecord = record?;
        if !record.rate.is_finite() {
            warn!("Skipping non-finite rate for {}-{:02}", record.year, record.month);
            continue;
        }
        observations.push((record.year, record.month, record.rate));
    }

    RateTable::from_observations(observations)
}
