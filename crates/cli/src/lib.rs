//! Operator console: an interactive menu over a single in-memory warehouse.
//!
//! The console only calls the public warehouse operations. Core errors are
//! printed and the loop carries on.

pub mod config;
pub mod console;
pub mod input;

pub use config::{CliConfig, ConfigError, ReportFormat};
pub use console::Console;

use stockroom_inventory::{InventoryResult, StorageBin, Warehouse};

/// Build the warehouse the console starts with: empty apart from the
/// configured default bin.
pub fn bootstrap_warehouse(config: &CliConfig) -> InventoryResult<Warehouse> {
    let mut warehouse = Warehouse::new();
    warehouse.add_storage_bin(StorageBin::new(
        config.default_bin.clone(),
        config.default_bin_capacity,
    ))?;
    Ok(warehouse)
}
