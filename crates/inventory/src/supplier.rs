use serde::{Deserialize, Serialize};

use stockroom_core::Sku;

use crate::attributes::Attributes;

/// Supplier contact record. Has no behaviour beyond its own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    name: String,
    contact_details: Attributes,
    items_supplied: Vec<Sku>,
}

impl Supplier {
    pub fn new(name: impl Into<String>, contact_details: Attributes) -> Self {
        Self {
            name: name.into(),
            contact_details,
            items_supplied: Vec::new(),
        }
    }

    pub fn with_items_supplied(mut self, items: impl IntoIterator<Item = Sku>) -> Self {
        self.items_supplied = items.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_details(&self) -> &Attributes {
        &self.contact_details
    }

    pub fn items_supplied(&self) -> &[Sku] {
        &self.items_supplied
    }

    /// Announce a replenishment request. Nothing is tracked.
    pub fn place_order(&self) {
        tracing::info!(supplier = %self.name, "order placed with supplier");
    }

    pub fn update_contact(&mut self, contact_details: Attributes) {
        self.contact_details = contact_details;
        tracing::info!(supplier = %self.name, "supplier contact details updated");
    }

    pub fn display_supplier_info(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Supplier Info:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Contact Details: {}", self.contact_details)?;
        write!(f, "Items Supplied: ")?;
        if self.items_supplied.is_empty() {
            return f.write_str("None");
        }
        for (i, sku) in self.items_supplied.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{sku}")?;
        }
        Ok(())
    }
}
