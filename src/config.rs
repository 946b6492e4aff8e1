//! Calculator configuration loaded from JSON

use crate::error::Result;
use crate::format::DEFAULT_CURRENCY_SYMBOL;
use crate::rates::{default_table, load_rates, RateTable};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// CSV of `year,month,rate` rows; the bundled dataset is used when unset
    #[serde(default)]
    pub rates_csv: Option<PathBuf>,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Print the month-by-month timeline along with the result
    #[serde(default)]
    pub timeline: bool,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            rates_csv: None,
            currency_symbol: default_currency_symbol(),
            timeline: false,
        }
    }
}

impl CalculatorConfig {
    /// Read a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// The configured rate table, borrowing the bundled one when no CSV is set
    pub fn rate_table(&self) -> Result<Cow<'static, RateTable>> {
        match &self.rates_csv {
            Some(path) => Ok(Cow::Owned(load_rates(path)?)),
            None => Ok(Cow::Borrowed(default_table())),
        }
    }
}
