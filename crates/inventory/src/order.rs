use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, InventoryError, InventoryResult, OrderId, Sku};

use crate::warehouse::Warehouse;

/// Order status lifecycle. Only moves forward: `Pending -> Fulfilled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Fulfilled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 2] = [OrderStatus::Pending, OrderStatus::Fulfilled];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Fulfilled => "Fulfilled",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for OrderStatus {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                InventoryError::invalid_status(format!(
                    "'{s}' is not a valid status, must be one of: Pending, Fulfilled"
                ))
            })
    }
}

/// A customer request for stock: SKU -> quantity, in the order entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: OrderId,
    items: IndexMap<Sku, u64>,
    order_date: DateTime<Utc>,
    status: OrderStatus,
}

impl Order {
    /// Build a pending order dated now.
    ///
    /// A SKU listed twice keeps its first position and its last quantity.
    pub fn new(
        order_id: OrderId,
        items: impl IntoIterator<Item = (Sku, u64)>,
    ) -> InventoryResult<Self> {
        Self::placed_at(order_id, items, Utc::now())
    }

    /// Build a pending order with an explicit order date.
    pub fn placed_at(
        order_id: OrderId,
        items: impl IntoIterator<Item = (Sku, u64)>,
        order_date: DateTime<Utc>,
    ) -> InventoryResult<Self> {
        let mut lines = IndexMap::new();
        for (sku, quantity) in items {
            if quantity == 0 {
                return Err(InventoryError::invalid_quantity(format!(
                    "order {order_id} requests zero units of {sku}"
                )));
            }
            lines.insert(sku, quantity);
        }
        if lines.is_empty() {
            return Err(InventoryError::EmptyOrder { order_id });
        }

        Ok(Self {
            order_id,
            items: lines,
            order_date,
            status: OrderStatus::Pending,
        })
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn items(&self) -> &IndexMap<Sku, u64> {
        &self.items
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_fulfilled(&self) -> bool {
        self.status == OrderStatus::Fulfilled
    }

    /// Fulfill this order against `warehouse`.
    ///
    /// Same code path as [`Warehouse::fulfill_order`]; on success the order is
    /// also recorded in the warehouse's order log.
    pub fn process_order(&mut self, warehouse: &mut Warehouse) -> InventoryResult<()> {
        warehouse.fulfill_order(self)
    }

    /// Move the order to `new_status`.
    ///
    /// A fulfilled order is final: any further transition is rejected.
    pub fn update_status(&mut self, new_status: OrderStatus) -> InventoryResult<()> {
        self.ensure_transition(new_status)?;
        self.status = new_status;
        Ok(())
    }

    pub(crate) fn ensure_transition(&self, new_status: OrderStatus) -> InventoryResult<()> {
        if self.status == OrderStatus::Fulfilled {
            return Err(InventoryError::invalid_status(format!(
                "order {} is already fulfilled and cannot become {new_status}",
                self.order_id
            )));
        }
        Ok(())
    }

    /// Human-readable summary of the order.
    pub fn display_order_info(&self) -> String {
        self.to_string()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.order_id
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Order Info:")?;
        writeln!(f, "Order ID: {}", self.order_id)?;
        writeln!(f, "Order Date: {}", self.order_date.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "Items:")?;
        for (sku, quantity) in &self.items {
            write!(f, "\n  - SKU: {sku}, quantity: {quantity}")?;
        }
        Ok(())
    }
}
