use std::io;

use anyhow::Context;

use stocktrack_console::{AppConfig, Console, menu};
use stocktrack_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    stocktrack_observability::init();

    let config = AppConfig::from_env();
    tracing::debug!(?config, "starting stock tracker");

    let mut inventory = Inventory::with_threshold(config.low_stock_threshold);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    menu::run(&mut inventory, &mut console).context("console session failed")?;

    tracing::debug!(products = inventory.len(), "session ended");
    Ok(())
}
