//! Entity trait: identity that survives state changes.
//!
//! An inventory item keeps its SKU while its quantity and price move, so two
//! snapshots of the same item compare equal by identity even when their fields
//! differ.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when both values denote the same entity, regardless of state.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
