//! Capabilities an item may expose.

use stockroom_core::DomainResult;

/// Stock can be received into and issued out of the item.
pub trait StockTrackable {
    /// Add `qty` units to the quantity on hand.
    ///
    /// Fails with `InvalidArgument` when `qty <= 0`.
    fn receive(&mut self, qty: i64) -> DomainResult<()>;

    /// Remove `qty` units if enough are on hand.
    ///
    /// Returns `Ok(false)` and leaves the quantity untouched when stock is
    /// insufficient. Fails with `InvalidArgument` when `qty <= 0`.
    fn issue(&mut self, qty: i64) -> DomainResult<bool>;
}

/// The unit price can be changed by a percentage.
///
/// Adjustments compound: a discount followed by a surcharge of the same
/// percentage does not restore the original price.
pub trait PriceAdjustable {
    /// Multiply the unit price by `1 - percent/100`.
    fn apply_discount(&mut self, percent: f64) -> DomainResult<()>;

    /// Multiply the unit price by `1 + percent/100`.
    fn apply_surcharge(&mut self, percent: f64) -> DomainResult<()>;
}
