use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::{BinId, Entity, InventoryError, InventoryResult, Sku};

use crate::attributes::Attributes;
use crate::item::{Dimensions, Item};

/// Per-SKU holding inside a bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSlot {
    pub quantity: u64,
    pub name: String,
    pub dimensions: Dimensions,
}

/// Capacity-bounded storage unit.
///
/// Invariants (upheld by `add_item`/`remove_item`, the only mutators):
/// - `current_load == sum(items[*].quantity)`
/// - `current_load <= capacity`
/// - no slot holds a zero quantity
#[derive(Debug, Clone, PartialEq)]
pub struct StorageBin {
    bin_id: BinId,
    capacity: u64,
    current_load: u64,
    constraints: Attributes,
    items: IndexMap<Sku, BinSlot>,
}

impl StorageBin {
    /// Create an empty bin.
    pub fn new(bin_id: BinId, capacity: u64) -> Self {
        Self {
            bin_id,
            capacity,
            current_load: 0,
            constraints: Attributes::new(),
            items: IndexMap::new(),
        }
    }

    pub fn with_constraint(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.constraints.insert(key, value);
        self
    }

    pub fn with_constraints(mut self, constraints: Attributes) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn bin_id(&self) -> &BinId {
        &self.bin_id
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn current_load(&self) -> u64 {
        self.current_load
    }

    pub fn constraints(&self) -> &Attributes {
        &self.constraints
    }

    pub fn items(&self) -> &IndexMap<Sku, BinSlot> {
        &self.items
    }

    pub fn available_space(&self) -> u64 {
        self.capacity - self.current_load
    }

    /// Stored quantity for `sku`, zero when the bin does not hold it.
    pub fn quantity_of(&self, sku: &Sku) -> u64 {
        self.items.get(sku).map_or(0, |slot| slot.quantity)
    }

    /// Check that `item` may be placed here without mutating anything.
    ///
    /// Only requirement names the bin also constrains are compared; a
    /// requirement the bin says nothing about (and vice versa) is accepted.
    pub fn check_fits(&self, item: &Item) -> InventoryResult<()> {
        if item.quantity() == 0 {
            return Err(InventoryError::invalid_quantity(format!(
                "cannot store zero units of {}",
                item.sku()
            )));
        }

        for (requirement, actual) in item.storage_requirements().iter() {
            if let Some(expected) = self.constraints.get(requirement) {
                if expected != actual {
                    return Err(InventoryError::ConstraintViolation {
                        bin_id: self.bin_id.clone(),
                        sku: item.sku().clone(),
                        requirement: requirement.to_string(),
                        expected: expected.to_string(),
                        actual: actual.to_string(),
                    });
                }
            }
        }

        if item.quantity() > self.available_space() {
            return Err(InventoryError::CapacityExceeded {
                bin_id: self.bin_id.clone(),
                requested: item.quantity(),
                available: self.available_space(),
            });
        }

        Ok(())
    }

    /// Store `item`'s quantity in this bin, merging into an existing slot.
    pub fn add_item(&mut self, item: &Item) -> InventoryResult<()> {
        self.check_fits(item)?;

        self.items
            .entry(item.sku().clone())
            .and_modify(|slot| slot.quantity += item.quantity())
            .or_insert_with(|| BinSlot {
                quantity: item.quantity(),
                name: item.name().to_string(),
                dimensions: item.dimensions(),
            });
        self.current_load += item.quantity();
        Ok(())
    }

    /// Take `quantity` units of `sku` out of this bin.
    ///
    /// A slot that reaches zero is removed; the remaining slots keep their order.
    pub fn remove_item(&mut self, sku: &Sku, quantity: u64) -> InventoryResult<()> {
        let Some(slot) = self.items.get_mut(sku) else {
            return Err(InventoryError::ItemNotFound {
                bin_id: self.bin_id.clone(),
                sku: sku.clone(),
            });
        };

        if slot.quantity < quantity {
            return Err(InventoryError::InsufficientStock {
                bin_id: self.bin_id.clone(),
                sku: sku.clone(),
                requested: quantity,
                stored: slot.quantity,
            });
        }

        slot.quantity -= quantity;
        self.current_load -= quantity;

        if slot.quantity == 0 {
            self.items.shift_remove(sku);
        }
        Ok(())
    }

    /// Human-readable summary of the bin and its contents.
    pub fn display_bin_info(&self) -> String {
        self.to_string()
    }
}

impl Entity for StorageBin {
    type Id = BinId;

    fn id(&self) -> &Self::Id {
        &self.bin_id
    }
}

impl core::fmt::Display for StorageBin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Bin Info:")?;
        writeln!(f, "Bin ID: {}", self.bin_id)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Current Load: {}", self.current_load)?;
        writeln!(f, "Available Space: {}", self.available_space())?;
        writeln!(f, "Constraints: {}", self.constraints)?;
        writeln!(f, "Items in Bin:")?;
        for (sku, slot) in &self.items {
            writeln!(
                f,
                "  - SKU: {sku}, Name: {}, quantity: {}, Dimensions: {}",
                slot.name, slot.quantity, slot.dimensions
            )?;
        }
        Ok(())
    }
}
