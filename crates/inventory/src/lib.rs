//! Inventory domain module.
//!
//! Business rules for storage bins, stock records, customer orders and the
//! warehouse that coordinates them, implemented purely as deterministic
//! domain logic (no IO, no persistence).

pub mod attributes;
pub mod item;
pub mod order;
pub mod report;
pub mod storage_bin;
pub mod supplier;
pub mod warehouse;

pub use attributes::Attributes;
pub use item::{Dimensions, Item};
pub use order::{Order, OrderStatus};
pub use report::{BinStatusLine, InventoryLine, InventoryReport};
pub use storage_bin::{BinSlot, StorageBin};
pub use supplier::Supplier;
pub use warehouse::Warehouse;

pub use stockroom_core::{BinId, InventoryError, InventoryResult, OrderId, Sku};
