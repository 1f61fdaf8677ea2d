use serde::Serialize;

use stockroom_core::validate::{require_non_blank, require_non_negative};
use stockroom_core::{DomainResult, Entity, Sku};

use crate::capability::{PriceAdjustable, StockTrackable};
use crate::record::ItemRecord;

/// Item category. Fixed per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Perishable,
    Electronic,
    Clothing,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Perishable,
        Category::Electronic,
        Category::Clothing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Perishable => "Perishable",
            Category::Electronic => "Electronic",
            Category::Clothing => "Clothing",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accessors, identity and stock tracking shared by every variant; all of them
/// delegate to the embedded [`ItemRecord`].
macro_rules! impl_item_variant {
    ($t:ty, $category:expr) => {
        impl $t {
            pub fn record(&self) -> &ItemRecord {
                &self.record
            }

            pub fn sku(&self) -> &Sku {
                self.record.sku()
            }

            pub fn name(&self) -> &str {
                self.record.name()
            }

            pub fn quantity(&self) -> i64 {
                self.record.quantity()
            }

            pub fn unit_price(&self) -> f64 {
                self.record.unit_price()
            }

            pub fn value(&self) -> f64 {
                self.record.value()
            }

            pub fn category(&self) -> &'static str {
                $category.as_str()
            }
        }

        impl Entity for $t {
            type Id = Sku;

            fn id(&self) -> &Self::Id {
                self.record.sku()
            }
        }

        impl StockTrackable for $t {
            fn receive(&mut self, qty: i64) -> DomainResult<()> {
                self.record.receive(qty)
            }

            fn issue(&mut self, qty: i64) -> DomainResult<bool> {
                self.record.issue(qty)
            }
        }
    };
}

/// Perishable goods, tracked with a shelf life.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerishableItem {
    #[serde(flatten)]
    record: ItemRecord,
    shelf_life_days: i64,
}

impl PerishableItem {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        shelf_life_days: i64,
    ) -> DomainResult<Self> {
        let record = ItemRecord::new(sku, name, unit_price)?;
        let shelf_life_days = require_non_negative("shelf life days", shelf_life_days)?;
        Ok(Self {
            record,
            shelf_life_days,
        })
    }

    pub fn shelf_life_days(&self) -> i64 {
        self.shelf_life_days
    }
}

impl_item_variant!(PerishableItem, Category::Perishable);

impl core::fmt::Display for PerishableItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.record.fmt_with_category(f, self.category())?;
        write!(f, "/shelfLifeDays={}", self.shelf_life_days)
    }
}

/// Electronics carry a warranty and are the only category whose price can be
/// adjusted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicItem {
    #[serde(flatten)]
    record: ItemRecord,
    warranty_months: i64,
}

impl ElectronicItem {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        warranty_months: i64,
    ) -> DomainResult<Self> {
        let record = ItemRecord::new(sku, name, unit_price)?;
        let warranty_months = require_non_negative("warranty months", warranty_months)?;
        Ok(Self {
            record,
            warranty_months,
        })
    }

    pub fn warranty_months(&self) -> i64 {
        self.warranty_months
    }
}

impl_item_variant!(ElectronicItem, Category::Electronic);

impl PriceAdjustable for ElectronicItem {
    fn apply_discount(&mut self, percent: f64) -> DomainResult<()> {
        self.record.discount(percent)
    }

    fn apply_surcharge(&mut self, percent: f64) -> DomainResult<()> {
        self.record.surcharge(percent)
    }
}

impl core::fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.record.fmt_with_category(f, self.category())?;
        write!(f, "/warrantyMonths={}", self.warranty_months)
    }
}

/// Apparel with a size and material.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    #[serde(flatten)]
    record: ItemRecord,
    size: String,
    material: String,
}

impl ClothingItem {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> DomainResult<Self> {
        let record = ItemRecord::new(sku, name, unit_price)?;
        let size = size.into();
        let material = material.into();
        require_non_blank("size", &size)?;
        require_non_blank("material", &material)?;
        Ok(Self {
            record,
            size,
            material,
        })
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn material(&self) -> &str {
        &self.material
    }
}

impl_item_variant!(ClothingItem, Category::Clothing);

impl core::fmt::Display for ClothingItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.record.fmt_with_category(f, self.category())?;
        write!(f, "/size={}/material={}", self.size, self.material)
    }
}

/// Any inventory item.
///
/// The set of categories is closed. Code that needs a category-specific
/// capability matches on the variant (or uses [`InventoryItem::as_electronic_mut`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category")]
pub enum InventoryItem {
    Perishable(PerishableItem),
    Electronic(ElectronicItem),
    Clothing(ClothingItem),
}

impl InventoryItem {
    pub fn record(&self) -> &ItemRecord {
        match self {
            InventoryItem::Perishable(i) => &i.record,
            InventoryItem::Electronic(i) => &i.record,
            InventoryItem::Clothing(i) => &i.record,
        }
    }

    fn record_mut(&mut self) -> &mut ItemRecord {
        match self {
            InventoryItem::Perishable(i) => &mut i.record,
            InventoryItem::Electronic(i) => &mut i.record,
            InventoryItem::Clothing(i) => &mut i.record,
        }
    }

    pub fn kind(&self) -> Category {
        match self {
            InventoryItem::Perishable(_) => Category::Perishable,
            InventoryItem::Electronic(_) => Category::Electronic,
            InventoryItem::Clothing(_) => Category::Clothing,
        }
    }

    pub fn category(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn sku(&self) -> &Sku {
        self.record().sku()
    }

    pub fn name(&self) -> &str {
        self.record().name()
    }

    pub fn quantity(&self) -> i64 {
        self.record().quantity()
    }

    pub fn unit_price(&self) -> f64 {
        self.record().unit_price()
    }

    pub fn value(&self) -> f64 {
        self.record().value()
    }

    pub fn as_electronic(&self) -> Option<&ElectronicItem> {
        match self {
            InventoryItem::Electronic(e) => Some(e),
            _ => None,
        }
    }

    /// Price-adjustable view of the item, if its category supports it.
    pub fn as_electronic_mut(&mut self) -> Option<&mut ElectronicItem> {
        match self {
            InventoryItem::Electronic(e) => Some(e),
            _ => None,
        }
    }
}

impl Entity for InventoryItem {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        self.sku()
    }
}

impl StockTrackable for InventoryItem {
    fn receive(&mut self, qty: i64) -> DomainResult<()> {
        self.record_mut().receive(qty)
    }

    fn issue(&mut self, qty: i64) -> DomainResult<bool> {
        self.record_mut().issue(qty)
    }
}

impl core::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventoryItem::Perishable(i) => core::fmt::Display::fmt(i, f),
            InventoryItem::Electronic(i) => core::fmt::Display::fmt(i, f),
            InventoryItem::Clothing(i) => core::fmt::Display::fmt(i, f),
        }
    }
}

impl From<PerishableItem> for InventoryItem {
    fn from(value: PerishableItem) -> Self {
        InventoryItem::Perishable(value)
    }
}

impl From<ElectronicItem> for InventoryItem {
    fn from(value: ElectronicItem) -> Self {
        InventoryItem::Electronic(value)
    }
}

impl From<ClothingItem> for InventoryItem {
    fn from(value: ClothingItem) -> Self {
        InventoryItem::Clothing(value)
    }
}
