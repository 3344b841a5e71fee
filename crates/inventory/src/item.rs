use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, InventoryError, InventoryResult, Sku, ValueObject};

use crate::attributes::Attributes;

/// Physical item dimensions. Informational only; never used for capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

impl ValueObject for Dimensions {}

impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.length, self.width, self.height)
    }
}

/// Stock record for a single SKU.
///
/// The warehouse keeps exactly one authoritative `Item` per SKU; its
/// quantity is the aggregate across all bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    sku: Sku,
    name: String,
    quantity: u64,
    dimensions: Dimensions,
    storage_requirements: Attributes,
}

impl Item {
    pub fn new(name: impl Into<String>, sku: Sku, quantity: u64) -> Self {
        Self {
            sku,
            name: name.into(),
            quantity,
            dimensions: Dimensions::default(),
            storage_requirements: Attributes::new(),
        }
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_requirement(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.storage_requirements.insert(key, value);
        self
    }

    pub fn with_requirements(mut self, requirements: Attributes) -> Self {
        self.storage_requirements = requirements;
        self
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn storage_requirements(&self) -> &Attributes {
        &self.storage_requirements
    }

    /// Apply a signed adjustment to the quantity.
    ///
    /// Fails without modifying the item if the result would be negative.
    pub fn update_quantity(&mut self, delta: i64) -> InventoryResult<()> {
        if delta >= 0 {
            self.increase(delta.unsigned_abs())
        } else {
            self.decrease(delta.unsigned_abs())
        }
    }

    pub(crate) fn increase(&mut self, amount: u64) -> InventoryResult<()> {
        self.quantity = self.quantity.checked_add(amount).ok_or_else(|| {
            InventoryError::invalid_quantity(format!("quantity of {} would overflow", self.sku))
        })?;
        Ok(())
    }

    pub(crate) fn decrease(&mut self, amount: u64) -> InventoryResult<()> {
        self.quantity = self.quantity.checked_sub(amount).ok_or_else(|| {
            InventoryError::invalid_quantity(format!(
                "quantity cannot be negative ({} has {}, adjustment -{amount})",
                self.sku, self.quantity
            ))
        })?;
        Ok(())
    }

    /// Human-readable summary of the item.
    pub fn display_info(&self) -> String {
        self.to_string()
    }
}

impl Entity for Item {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Item Info:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "SKU: {}", self.sku)?;
        writeln!(f, "quantity: {}", self.quantity)?;
        writeln!(f, "Dimensions: {}", self.dimensions)?;
        write!(f, "Storage Requirements: {}", self.storage_requirements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(quantity: u64) -> Item {
        Item::new("Widget", Sku::from("W1"), quantity)
    }

    #[test]
    fn update_quantity_applies_positive_and_negative_deltas() {
        let mut item = test_item(10);
        item.update_quantity(5).unwrap();
        assert_eq!(item.quantity(), 15);
        item.update_quantity(-15).unwrap();
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn update_quantity_rejects_negative_result() {
        let mut item = test_item(3);
        let err = item.update_quantity(-4).unwrap_err();
        match err {
            InventoryError::InvalidQuantity(msg) if msg.contains("cannot be negative") => {}
            _ => panic!("Expected InvalidQuantity for negative result"),
        }
        assert_eq!(item.quantity(), 3);
    }

    #[test]
    fn update_quantity_rejects_overflow() {
        let mut item = test_item(u64::MAX);
        assert!(matches!(
            item.update_quantity(1),
            Err(InventoryError::InvalidQuantity(_))
        ));
        assert_eq!(item.quantity(), u64::MAX);
    }

    #[test]
    fn display_info_lists_every_field() {
        let item = test_item(500)
            .with_dimensions(Dimensions::new(1.0, 2.5, 3.0))
            .with_requirement("temperature", "cold");

        assert_eq!(
            item.display_info(),
            "Item Info:\n\
             Name: Widget\n\
             SKU: W1\n\
             quantity: 500\n\
             Dimensions: (1, 2.5, 3)\n\
             Storage Requirements: {temperature=cold}"
        );
    }

    #[test]
    fn entity_id_is_the_sku() {
        let item = test_item(1);
        assert_eq!(item.id(), &Sku::from("W1"));
    }
}
