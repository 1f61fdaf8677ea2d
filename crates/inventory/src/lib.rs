//! Inventory domain module.
//!
//! Items of three categories tracked by quantity on hand and unit price, and a
//! manager that owns them and answers lookups and aggregate queries. Pure
//! in-memory domain logic (no IO, no storage).
//!
//! Capabilities are expressed as traits: every item is [`StockTrackable`], only
//! [`ElectronicItem`] is [`PriceAdjustable`]. Asking a perishable or clothing
//! item for a discount does not compile.

pub mod capability;
pub mod item;
pub mod manager;
pub mod record;

pub use capability::{PriceAdjustable, StockTrackable};
pub use item::{Category, ClothingItem, ElectronicItem, InventoryItem, PerishableItem};
pub use manager::InventoryManager;
pub use record::ItemRecord;

pub use stockroom_core::{DomainError, DomainResult, Sku};
