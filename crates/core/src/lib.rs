//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory
//! model: the error taxonomy, identifier newtypes and entity markers.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{InventoryError, InventoryResult};
pub use id::{BinId, OrderId, Sku};
pub use value_object::ValueObject;
