//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute
/// values. In the inventory model, item dimensions and requirement maps are
/// value objects: two items with the same dimensions are not "the same"
/// anything, they just measure the same.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Dimensions(f64, f64, f64);
///
/// impl ValueObject for Dimensions {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
