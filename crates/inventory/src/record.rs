//! Fields and rules shared by every item category.

use serde::Serialize;

use stockroom_core::validate::{
    require_non_blank, require_non_negative, require_positive, require_price,
};
use stockroom_core::{DomainError, DomainResult, Percent, Sku};

/// Base data embedded by value in each item variant.
///
/// Invariants: `quantity >= 0` and `unit_price` is finite and `>= 0`. Both are
/// only changed through the validated setters below, which leave the record
/// untouched on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    sku: Sku,
    name: String,
    unit_price: f64,
    quantity: i64,
}

impl ItemRecord {
    /// Validate and build a record with zero stock.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
    ) -> DomainResult<Self> {
        let sku = Sku::parse(sku)?;
        let name = name.into();
        require_non_blank("name", &name)?;
        require_price("unit price", unit_price)?;

        Ok(Self {
            sku,
            name,
            unit_price,
            quantity: 0,
        })
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Derived value: quantity on hand times unit price.
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        self.quantity = require_non_negative("quantity", quantity)?;
        Ok(())
    }

    pub(crate) fn set_unit_price(&mut self, unit_price: f64) -> DomainResult<()> {
        self.unit_price = require_price("unit price", unit_price)?;
        Ok(())
    }

    pub(crate) fn receive(&mut self, qty: i64) -> DomainResult<()> {
        require_positive("quantity", qty)?;
        let next = self
            .quantity
            .checked_add(qty)
            .ok_or_else(|| DomainError::invalid_argument("quantity overflow"))?;
        self.set_quantity(next)?;

        tracing::debug!(sku = %self.sku, received = qty, quantity = self.quantity, "stock received");
        Ok(())
    }

    pub(crate) fn issue(&mut self, qty: i64) -> DomainResult<bool> {
        require_positive("quantity", qty)?;
        if self.quantity < qty {
            tracing::debug!(
                sku = %self.sku,
                requested = qty,
                on_hand = self.quantity,
                "insufficient stock"
            );
            return Ok(false);
        }
        self.set_quantity(self.quantity - qty)?;

        tracing::debug!(sku = %self.sku, issued = qty, quantity = self.quantity, "stock issued");
        Ok(true)
    }

    /// Multiply the unit price by `factor`, validating the result.
    pub(crate) fn scale_price(&mut self, factor: f64) -> DomainResult<()> {
        let before = self.unit_price;
        self.set_unit_price(before * factor)?;

        tracing::debug!(sku = %self.sku, before, after = self.unit_price, "unit price adjusted");
        Ok(())
    }

    pub(crate) fn discount(&mut self, percent: f64) -> DomainResult<()> {
        let percent = Percent::new(percent).map_err(|_| {
            DomainError::invalid_argument(format!(
                "discount must be between 0 and 100 (got {percent})"
            ))
        })?;
        self.scale_price(percent.reduction_factor())
    }

    pub(crate) fn surcharge(&mut self, percent: f64) -> DomainResult<()> {
        let percent = Percent::new(percent).map_err(|_| {
            DomainError::invalid_argument(format!(
                "surcharge must be between 0 and 100 (got {percent})"
            ))
        })?;
        self.scale_price(percent.increase_factor())
    }

    /// Writes `sku/name/category/qty=../unitPrice=../value=..`.
    ///
    /// Prices use `{:?}` so whole numbers keep a trailing `.0`.
    pub(crate) fn fmt_with_category(
        &self,
        f: &mut core::fmt::Formatter<'_>,
        category: &str,
    ) -> core::fmt::Result {
        write!(
            f,
            "{}/{}/{}/qty={}/unitPrice={:?}/value={:?}",
            self.sku,
            self.name,
            category,
            self.quantity,
            self.unit_price,
            self.value()
        )
    }
}
