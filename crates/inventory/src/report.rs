use serde::{Deserialize, Serialize};

use stockroom_core::{BinId, Sku};

/// One row of the inventory summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub sku: Sku,
    pub name: String,
    pub quantity: u64,
}

/// One row of the storage bin status section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinStatusLine {
    pub bin_id: BinId,
    pub capacity: u64,
    pub current_load: u64,
    pub available_space: u64,
}

/// Point-in-time snapshot of a warehouse.
///
/// Rows follow inventory insertion order and bin registration order, so the
/// rendered text is deterministic for a given sequence of operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub items: Vec<InventoryLine>,
    pub bins: Vec<BinStatusLine>,
}

impl core::fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Inventory Report:")?;
        writeln!(f)?;
        writeln!(f, "Inventory Summary:")?;
        for line in &self.items {
            writeln!(
                f,
                "  - SKU: {}, Name: {}, quantity: {}",
                line.sku, line.name, line.quantity
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Storage Bins Status:")?;
        for bin in &self.bins {
            writeln!(
                f,
                "  - Bin ID: {}, Capacity: {}, Current Load: {}, Available Space: {}",
                bin.bin_id, bin.capacity, bin.current_load, bin.available_space
            )?;
        }
        Ok(())
    }
}
