//! Console configuration, read from the environment at start-up.
//!
//! | variable                         | default | meaning                          |
//! |----------------------------------|---------|----------------------------------|
//! | `STOCKROOM_DEFAULT_BIN`          | `1BIN`  | id of the bin registered on start |
//! | `STOCKROOM_DEFAULT_BIN_CAPACITY` | `1000`  | capacity of that bin             |
//! | `STOCKROOM_REPORT_FORMAT`        | `text`  | `text` or `json`                 |
//!
//! Log filtering is controlled separately through `RUST_LOG`.

use core::str::FromStr;

use thiserror::Error;

use stockroom_inventory::{BinId, InventoryError};

pub const DEFAULT_BIN_VAR: &str = "STOCKROOM_DEFAULT_BIN";
pub const DEFAULT_BIN_CAPACITY_VAR: &str = "STOCKROOM_DEFAULT_BIN_CAPACITY";
pub const REPORT_FORMAT_VAR: &str = "STOCKROOM_REPORT_FORMAT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be 'text' or 'json', got '{value}'")]
    InvalidReportFormat { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidIdentifier {
        var: &'static str,
        #[source]
        source: InventoryError,
    },
}

/// How the inventory report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub default_bin: BinId,
    pub default_bin_capacity: u64,
    pub report_format: ReportFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_bin: BinId::from("1BIN"),
            default_bin_capacity: 1000,
            report_format: ReportFormat::Text,
        }
    }
}

impl CliConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`; unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match lookup(DEFAULT_BIN_VAR) {
            Some(value) => {
                config.default_bin = BinId::parse(&value).map_err(|source| {
                    ConfigError::InvalidIdentifier {
                        var: DEFAULT_BIN_VAR,
                        source,
                    }
                })?;
            }
            None => tracing::debug!("{DEFAULT_BIN_VAR} not set; using {}", config.default_bin),
        }

        if let Some(value) = lookup(DEFAULT_BIN_CAPACITY_VAR) {
            config.default_bin_capacity =
                value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                    var: DEFAULT_BIN_CAPACITY_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(REPORT_FORMAT_VAR) {
            config.report_format = value.parse().map_err(|_| ConfigError::InvalidReportFormat {
                var: REPORT_FORMAT_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}
