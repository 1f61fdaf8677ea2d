//! Demonstration run: builds a small inventory, adjusts it, and prints a report.

mod config;

use anyhow::Context;
use serde::Serialize;

use stockroom_inventory::{
    ClothingItem, ElectronicItem, InventoryItem, InventoryManager, PerishableItem,
    PriceAdjustable, StockTrackable,
};

use crate::config::{DemoConfig, ReportFormat};

/// Outcome of one issue attempt.
#[derive(Debug, Serialize, PartialEq)]
struct IssueOutcome {
    sku: String,
    quantity: i64,
    issued: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    items: Vec<String>,
    total_value: f64,
    perishable_quantity: i64,
    issues: Vec<IssueOutcome>,
}

impl Report {
    fn render_text(&self) -> String {
        let mut out = String::from("Items:\n");
        for line in &self.items {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!("Total Value: {:?}\n", self.total_value));
        out.push_str(&format!(
            "Total Quantity by Perishable: {}\n",
            self.perishable_quantity
        ));
        for issue in &self.issues {
            out.push_str(&format!(
                "Issue {} from {}: {}\n",
                issue.quantity, issue.sku, issue.issued
            ));
        }
        out
    }
}

fn run() -> anyhow::Result<Report> {
    let mut manager = InventoryManager::new();

    let mut apple = PerishableItem::new("P1", "Apple", 0.5, 10).context("creating P1")?;
    let mut phone = ElectronicItem::new("E1", "Phone", 200.0, 12).context("creating E1")?;
    let mut shirt =
        ClothingItem::new("C1", "Shirt", 20.0, "M", "Cotton").context("creating C1")?;

    apple.receive(100)?;
    phone.receive(50)?;
    shirt.receive(30)?;

    manager.add_item(apple);
    manager.add_item(phone);
    manager.add_item(shirt);

    manager
        .find_by_sku_mut("E1")?
        .and_then(InventoryItem::as_electronic_mut)
        .context("E1 is not a price-adjustable item")?
        .apply_discount(10.0)?;

    let items = manager.items().map(ToString::to_string).collect();
    let total_value = manager.total_value();
    let perishable_quantity = manager.total_quantity_by_category("Perishable")?;

    let mut issues = Vec::new();
    for quantity in [60, 20, 21] {
        let issued = manager
            .issue("P1", quantity)
            .with_context(|| format!("issuing {quantity} from P1"))?;
        tracing::info!(sku = "P1", quantity, issued, "issue attempted");
        issues.push(IssueOutcome {
            sku: "P1".to_string(),
            quantity,
            issued,
        });
    }

    Ok(Report {
        items,
        total_value,
        perishable_quantity,
        issues,
    })
}

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();
    let config = DemoConfig::from_env();

    let report = run()?;
    match config.report {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
