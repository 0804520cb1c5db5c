//! Demonstration run of the inventory store.

mod config;

use anyhow::Context;

use stockbook_infra::InventoryStore;

use crate::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(
        path = %config.inventory_path.display(),
        threshold = config.low_stock_threshold,
        "starting inventory demo"
    );

    let mut store = InventoryStore::new();
    store.add("apple", 10);
    store.add("banana", -2);
    store.add("orange", 5);
    store.remove("apple", 3);
    store.remove("grapes", 1);

    println!("Apple stock: {}", store.get_quantity("apple"));
    println!(
        "Low stock items: {:?}",
        store.list_low_stock(config.low_stock_threshold)
    );

    store
        .save(&config.inventory_path)
        .context("failed to save inventory")?;
    store
        .load(&config.inventory_path)
        .context("failed to load inventory")?;
    store.print_report().context("failed to print report")?;

    for entry in store.log().entries() {
        tracing::debug!("{entry}");
    }

    Ok(())
}
