//! Domain error model.

use thiserror::Error;

use crate::id::{BinId, OrderId, Sku};

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is a deterministic business failure raised by the operation
/// that detects it. Nothing here is recovered inside the domain; callers get
/// the error unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A bin with the same identifier is already registered.
    #[error("storage bin with ID {bin_id} already exists")]
    DuplicateBin { bin_id: BinId },

    /// No bin is registered under the identifier.
    #[error("storage bin {bin_id} not found")]
    BinNotFound { bin_id: BinId },

    /// An item requirement conflicts with a bin constraint of the same name.
    #[error("item {sku} does not meet bin {bin_id}'s {requirement} requirement (bin: {expected}, item: {actual})")]
    ConstraintViolation {
        bin_id: BinId,
        sku: Sku,
        requirement: String,
        expected: String,
        actual: String,
    },

    /// Adding the quantity would push the bin past its capacity.
    #[error("not enough space in bin {bin_id} (requested: {requested}, available: {available})")]
    CapacityExceeded {
        bin_id: BinId,
        requested: u64,
        available: u64,
    },

    /// The bin holds no stock for the SKU.
    #[error("item {sku} not found in bin {bin_id}")]
    ItemNotFound { bin_id: BinId, sku: Sku },

    /// The bin holds some, but not enough, stock for the SKU.
    #[error("not enough of item {sku} in bin {bin_id} to remove (requested: {requested}, stored: {stored})")]
    InsufficientStock {
        bin_id: BinId,
        sku: Sku,
        requested: u64,
        stored: u64,
    },

    /// Aggregate inventory cannot cover the requested quantity.
    #[error("not enough inventory for item with SKU {sku} (requested: {requested}, available: {available})")]
    InsufficientInventory {
        sku: Sku,
        requested: u64,
        available: u64,
    },

    /// Bin-level holdings disagree with the aggregate inventory.
    #[error("could not remove all of item {sku}: {remaining} units not found in bins")]
    InsufficientBinStock { sku: Sku, remaining: u64 },

    /// A quantity was zero where stock is required, or an adjustment would
    /// take a quantity below zero.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// An order status was unknown or the transition is not allowed.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// An identifier was empty or otherwise malformed.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// An order was built without any lines.
    #[error("order {order_id} has no items")]
    EmptyOrder { order_id: OrderId },
}

impl InventoryError {
    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn invalid_status(msg: impl Into<String>) -> Self {
        Self::InvalidStatus(msg.into())
    }

    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }
}
