//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Items are keyed by SKU, bins by bin id and orders by order id; the
/// warehouse indexes use these identities as map keys.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
