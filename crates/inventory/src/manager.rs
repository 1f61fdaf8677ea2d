//! Owned collection of items with lookup, aggregation and issue operations.

use serde::Serialize;

use stockroom_core::validate::require_non_blank;
use stockroom_core::{DomainError, DomainResult};

use crate::capability::StockTrackable;
use crate::item::InventoryItem;

/// Flat, insertion-ordered collection of items.
///
/// SKUs are not required to be unique; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryManager {
    items: Vec<InventoryItem>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. The manager takes ownership.
    pub fn add_item(&mut self, item: impl Into<InventoryItem>) {
        let item = item.into();
        tracing::debug!(sku = %item.sku(), category = item.category(), "item added");
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    /// First item whose SKU equals `sku` exactly (case-sensitive).
    ///
    /// An unknown SKU is `Ok(None)`; a blank one is an error.
    pub fn find_by_sku(&self, sku: &str) -> DomainResult<Option<&InventoryItem>> {
        require_non_blank("sku", sku)?;
        Ok(self.items.iter().find(|item| item.sku() == sku))
    }

    /// Mutable variant of [`find_by_sku`](Self::find_by_sku).
    pub fn find_by_sku_mut(&mut self, sku: &str) -> DomainResult<Option<&mut InventoryItem>> {
        require_non_blank("sku", sku)?;
        Ok(self.items.iter_mut().find(|item| item.sku() == sku))
    }

    /// Sum of `value()` over all items; `0.0` when empty.
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(InventoryItem::value).sum()
    }

    /// Sum of quantities over items whose category matches `category`,
    /// ignoring case. Unknown categories yield `0`; a sum that does not fit
    /// in `i64` is rejected as `quantity overflow`.
    pub fn total_quantity_by_category(&self, category: &str) -> DomainResult<i64> {
        require_non_blank("category", category)?;
        self.items
            .iter()
            .filter(|item| item.category().eq_ignore_ascii_case(category))
            .try_fold(0i64, |total, item| {
                total
                    .checked_add(item.quantity())
                    .ok_or_else(|| DomainError::invalid_argument("quantity overflow"))
            })
    }

    /// Issue `qty` units of the item with the given SKU.
    ///
    /// Returns `Ok(false)` both when the SKU is unknown and when stock is
    /// insufficient; callers that need to tell these apart should look the
    /// item up first.
    pub fn issue(&mut self, sku: &str, qty: i64) -> DomainResult<bool> {
        match self.find_by_sku_mut(sku)? {
            Some(item) => Self::issue_item(item, qty),
            None => {
                tracing::debug!(sku, "issue for unknown sku");
                Ok(false)
            }
        }
    }

    /// Issue `qty` units from an item the caller already holds.
    pub fn issue_item<T>(item: &mut T, qty: i64) -> DomainResult<bool>
    where
        T: StockTrackable + ?Sized,
    {
        item.issue(qty)
    }
}

impl<'a> IntoIterator for &'a InventoryManager {
    type Item = &'a InventoryItem;
    type IntoIter = core::slice::Iter<'a, InventoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Extend<InventoryItem> for InventoryManager {
    fn extend<I: IntoIterator<Item = InventoryItem>>(&mut self, iter: I) {
        for item in iter {
            self.add_item(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::PriceAdjustable;
    use crate::item::{ClothingItem, ElectronicItem, PerishableItem};

    fn stocked_manager() -> InventoryManager {
        let mut apple = PerishableItem::new("P1", "Apple", 0.5, 10).unwrap();
        apple.receive(40).unwrap();
        let mut phone = ElectronicItem::new("E1", "Phone", 180.0, 12).unwrap();
        phone.receive(50).unwrap();

        let mut manager = InventoryManager::new();
        manager.add_item(apple);
        manager.add_item(phone);
        manager
    }

    #[test]
    fn empty_manager_totals_zero() {
        let manager = InventoryManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.total_value(), 0.0);
        assert_eq!(manager.total_quantity_by_category("Perishable").unwrap(), 0);
    }

    #[test]
    fn total_value_sums_items() {
        assert_eq!(stocked_manager().total_value(), 9020.0);
    }

    #[test]
    fn quantity_by_category_ignores_case() {
        let manager = stocked_manager();
        assert_eq!(manager.total_quantity_by_category("Perishable").unwrap(), 40);
        assert_eq!(manager.total_quantity_by_category("perishable").unwrap(), 40);
        assert_eq!(manager.total_quantity_by_category("ELECTRONIC").unwrap(), 50);
        assert_eq!(manager.total_quantity_by_category("Clothing").unwrap(), 0);
        assert_eq!(manager.total_quantity_by_category("Toys").unwrap(), 0);
    }

    #[test]
    fn quantity_by_category_reports_overflow() {
        let mut full = PerishableItem::new("P1", "Apple", 0.5, 10).unwrap();
        full.receive(i64::MAX).unwrap();
        let mut one = PerishableItem::new("P2", "Pear", 0.5, 10).unwrap();
        one.receive(1).unwrap();

        let mut manager = InventoryManager::new();
        manager.add_item(full);
        manager.add_item(one);

        assert_eq!(
            manager.total_quantity_by_category("Perishable"),
            Err(DomainError::invalid_argument("quantity overflow"))
        );
        assert_eq!(manager.total_quantity_by_category("Clothing").unwrap(), 0);
    }

    #[test]
    fn blank_arguments_are_rejected() {
        let mut manager = stocked_manager();
        assert!(matches!(
            manager.total_quantity_by_category(" "),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(manager.find_by_sku(""), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(manager.issue("  ", 1), Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn find_by_sku_is_exact() {
        let manager = stocked_manager();
        assert_eq!(manager.find_by_sku("E1").unwrap().unwrap().name(), "Phone");
        assert!(manager.find_by_sku("e1").unwrap().is_none());
        assert!(manager.find_by_sku("E1 ").unwrap().is_none());
        assert!(manager.find_by_sku("X9").unwrap().is_none());
    }

    #[test]
    fn duplicate_skus_resolve_to_first_inserted() {
        let mut manager = InventoryManager::new();
        manager.add_item(ClothingItem::new("C1", "Shirt", 20.0, "M", "Cotton").unwrap());
        manager.add_item(ClothingItem::new("C1", "Scarf", 15.0, "One", "Wool").unwrap());
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.find_by_sku("C1").unwrap().unwrap().name(), "Shirt");
    }

    #[test]
    fn items_preserve_insertion_order() {
        let manager = stocked_manager();
        let skus: Vec<&str> = manager.items().map(|i| i.sku().as_str()).collect();
        assert_eq!(skus, ["P1", "E1"]);
        assert_eq!((&manager).into_iter().count(), 2);
    }

    #[test]
    fn issue_by_sku() {
        let mut manager = stocked_manager();
        assert!(manager.issue("P1", 30).unwrap());
        assert!(!manager.issue("P1", 11).unwrap());
        assert_eq!(manager.find_by_sku("P1").unwrap().unwrap().quantity(), 10);
        assert!(!manager.issue("missing", 1).unwrap());
    }

    #[test]
    fn issue_by_sku_propagates_quantity_error() {
        let mut manager = stocked_manager();
        assert!(matches!(manager.issue("P1", 0), Err(DomainError::InvalidArgument(_))));
        // Unknown SKU short-circuits before the quantity is looked at.
        assert!(!manager.issue("missing", 0).unwrap());
    }

    #[test]
    fn issue_item_delegates() {
        let mut shirt = ClothingItem::new("C1", "Shirt", 20.0, "M", "Cotton").unwrap();
        shirt.receive(5).unwrap();
        assert!(InventoryManager::issue_item(&mut shirt, 5).unwrap());
        assert!(!InventoryManager::issue_item(&mut shirt, 1).unwrap());
        assert!(InventoryManager::issue_item(&mut shirt, -1).is_err());

        let tracked: &mut dyn StockTrackable = &mut shirt;
        assert!(!InventoryManager::issue_item(tracked, 1).unwrap());
    }

    #[test]
    fn owned_electronics_can_be_repriced() {
        let mut manager = stocked_manager();
        manager
            .find_by_sku_mut("E1")
            .unwrap()
            .and_then(InventoryItem::as_electronic_mut)
            .unwrap()
            .apply_surcharge(50.0)
            .unwrap();
        assert_eq!(manager.total_value(), 20.0 + 50.0 * 270.0);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut manager = InventoryManager::new();
        manager.extend([
            InventoryItem::from(PerishableItem::new("P1", "Apple", 0.5, 10).unwrap()),
            InventoryItem::from(ClothingItem::new("C1", "Shirt", 20.0, "M", "Cotton").unwrap()),
        ]);
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.items().last().unwrap().category(), "Clothing");
    }
}
