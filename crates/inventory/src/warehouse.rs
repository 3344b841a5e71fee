//! Warehouse: the aggregate root tying bins, inventory and orders together.
//!
//! Two indexes are kept in step:
//! - per-bin holdings (`StorageBin::items`)
//! - the aggregate inventory (`inventory`, one authoritative `Item` per SKU)
//!
//! For every SKU, `inventory[sku].quantity` equals the sum of that SKU over
//! all bins. Every mutating operation validates completely before touching
//! either index, so a failed call leaves the warehouse exactly as it was.

use indexmap::IndexMap;

use stockroom_core::{BinId, InventoryError, InventoryResult, Sku};

use crate::item::Item;
use crate::order::{Order, OrderStatus};
use crate::report::{BinStatusLine, InventoryLine, InventoryReport};
use crate::storage_bin::StorageBin;
use crate::supplier::Supplier;

/// Bin-by-bin withdrawal computed for one SKU before anything is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RemovalPlan {
    sku: Sku,
    takes: Vec<(BinId, u64)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Warehouse {
    storage_bins: IndexMap<BinId, StorageBin>,
    inventory: IndexMap<Sku, Item>,
    orders: Vec<Order>,
    suppliers: Vec<Supplier>,
}

impl Warehouse {
    /// Create an empty warehouse.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_storage_bin(&mut self, bin: StorageBin) -> InventoryResult<()> {
        if self.storage_bins.contains_key(bin.bin_id()) {
            tracing::warn!(bin_id = %bin.bin_id(), "storage bin already registered");
            return Err(InventoryError::DuplicateBin {
                bin_id: bin.bin_id().clone(),
            });
        }

        tracing::info!(bin_id = %bin.bin_id(), capacity = bin.capacity(), "storage bin added");
        self.storage_bins.insert(bin.bin_id().clone(), bin);
        Ok(())
    }

    pub fn add_supplier(&mut self, supplier: Supplier) {
        tracing::info!(supplier = %supplier.name(), "supplier added");
        self.suppliers.push(supplier);
    }

    /// Put a shipment into `bin_id` and account for it in the aggregate
    /// inventory.
    ///
    /// The first shipment of a SKU becomes that SKU's inventory record; later
    /// shipments only add to its quantity.
    pub fn receive_shipment(&mut self, item: Item, bin_id: &BinId) -> InventoryResult<()> {
        if item.quantity() == 0 {
            return Err(InventoryError::invalid_quantity(format!(
                "shipment of {} must contain at least one unit",
                item.sku()
            )));
        }

        let bin = self
            .storage_bins
            .get_mut(bin_id)
            .ok_or_else(|| InventoryError::BinNotFound {
                bin_id: bin_id.clone(),
            })?;

        // Aggregate must be able to absorb the quantity before the bin is touched.
        if let Some(record) = self.inventory.get(item.sku()) {
            record.quantity().checked_add(item.quantity()).ok_or_else(|| {
                InventoryError::invalid_quantity(format!(
                    "quantity of {} would overflow",
                    item.sku()
                ))
            })?;
        }

        if let Err(err) = bin.add_item(&item) {
            tracing::warn!(sku = %item.sku(), bin_id = %bin_id, error = %err, "shipment rejected");
            return Err(err);
        }

        tracing::info!(
            sku = %item.sku(),
            bin_id = %bin_id,
            quantity = item.quantity(),
            "shipment received"
        );

        match self.inventory.get_mut(item.sku()) {
            Some(record) => record.increase(item.quantity())?,
            None => {
                self.inventory.insert(item.sku().clone(), item);
            }
        }
        Ok(())
    }

    /// Deduct every line of `order` from bins and inventory, all or nothing.
    ///
    /// Availability of every SKU is checked against the aggregate inventory
    /// first (the first short SKU in line order is reported), then a bin-level
    /// plan is computed for every SKU. Only when both succeed is anything
    /// mutated. On success the order is marked fulfilled and a copy is
    /// appended to the order log.
    pub fn fulfill_order(&mut self, order: &mut Order) -> InventoryResult<()> {
        order.ensure_transition(OrderStatus::Fulfilled)?;

        if let Err(err) = self.check_availability(order) {
            tracing::warn!(order_id = %order.order_id(), error = %err, "order rejected");
            return Err(err);
        }

        let plans = order
            .items()
            .iter()
            .map(|(sku, &quantity)| self.plan_removal(sku, quantity))
            .collect::<InventoryResult<Vec<_>>>()
            .inspect_err(|err| {
                tracing::warn!(order_id = %order.order_id(), error = %err, "bin stock disagrees with inventory");
            })?;

        for (plan, (sku, &quantity)) in plans.iter().zip(order.items()) {
            self.apply_removal(plan)?;
            if let Some(record) = self.inventory.get_mut(sku) {
                record.decrease(quantity)?;
            }
        }

        order.update_status(OrderStatus::Fulfilled)?;
        self.orders.push(order.clone());
        tracing::info!(
            order_id = %order.order_id(),
            lines = order.items().len(),
            "order fulfilled"
        );
        Ok(())
    }

    fn check_availability(&self, order: &Order) -> InventoryResult<()> {
        for (sku, &requested) in order.items() {
            let available = self.inventory.get(sku).map_or(0, Item::quantity);
            if available < requested {
                return Err(InventoryError::InsufficientInventory {
                    sku: sku.clone(),
                    requested,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Remove `quantity` units of `sku` from bins in registration order.
    ///
    /// Only bin holdings change: the aggregate record is not adjusted, so a
    /// caller must pair this with its own inventory bookkeeping (as
    /// [`Warehouse::fulfill_order`] does). If the bins hold less than
    /// `quantity` in total, nothing is removed.
    pub fn remove_item_from_bins(&mut self, sku: &Sku, quantity: u64) -> InventoryResult<()> {
        let plan = self.plan_removal(sku, quantity)?;
        self.apply_removal(&plan)
    }

    fn plan_removal(&self, sku: &Sku, quantity: u64) -> InventoryResult<RemovalPlan> {
        let mut remaining = quantity;
        let mut takes = Vec::new();

        for (bin_id, bin) in &self.storage_bins {
            if remaining == 0 {
                break;
            }
            let stored = bin.quantity_of(sku);
            if stored == 0 {
                continue;
            }
            let take = stored.min(remaining);
            takes.push((bin_id.clone(), take));
            remaining -= take;
        }

        if remaining > 0 {
            return Err(InventoryError::InsufficientBinStock {
                sku: sku.clone(),
                remaining,
            });
        }

        Ok(RemovalPlan {
            sku: sku.clone(),
            takes,
        })
    }

    fn apply_removal(&mut self, plan: &RemovalPlan) -> InventoryResult<()> {
        for (bin_id, take) in &plan.takes {
            let bin = self
                .storage_bins
                .get_mut(bin_id)
                .ok_or_else(|| InventoryError::BinNotFound {
                    bin_id: bin_id.clone(),
                })?;
            bin.remove_item(&plan.sku, *take)?;
            tracing::debug!(sku = %plan.sku, bin_id = %bin_id, quantity = take, "removed from bin");
        }
        Ok(())
    }

    /// Snapshot of inventory totals and bin occupancy.
    pub fn inventory_report(&self) -> InventoryReport {
        InventoryReport {
            items: self
                .inventory
                .values()
                .map(|item| InventoryLine {
                    sku: item.sku().clone(),
                    name: item.name().to_string(),
                    quantity: item.quantity(),
                })
                .collect(),
            bins: self
                .storage_bins
                .values()
                .map(|bin| BinStatusLine {
                    bin_id: bin.bin_id().clone(),
                    capacity: bin.capacity(),
                    current_load: bin.current_load(),
                    available_space: bin.available_space(),
                })
                .collect(),
        }
    }

    pub fn generate_inventory_report(&self) -> String {
        self.inventory_report().to_string()
    }

    pub fn find_item(&self, sku: &Sku) -> Option<&Item> {
        self.inventory.get(sku)
    }

    pub fn storage_bin(&self, bin_id: &BinId) -> Option<&StorageBin> {
        self.storage_bins.get(bin_id)
    }

    pub fn storage_bins(&self) -> impl Iterator<Item = &StorageBin> {
        self.storage_bins.values()
    }

    pub fn inventory(&self) -> impl Iterator<Item = &Item> {
        self.inventory.values()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Sum of `sku` over every bin.
    pub fn bin_quantity_total(&self, sku: &Sku) -> u64 {
        self.storage_bins.values().map(|bin| bin.quantity_of(sku)).sum()
    }
}
