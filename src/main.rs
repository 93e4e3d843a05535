// src/main.rs
//
// Inspector: prints the tooltip and the disguised view of an item stack
// stored as JSON.

use anyhow::{Context, Result};
use biome_compass::core::config::Config;
use biome_compass::core::item_manager::ItemRegistry;
use biome_compass::core::stack::ItemStack;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: biome-compass <item.json> [--privileged]";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context(USAGE)?;
    let privileged = args.any(|a| a == "--privileged");

    let config = Config::load().context("Loading application configuration")?;
    let registry = ItemRegistry::load(&config);

    let raw = fs::read_to_string(&path).with_context(|| format!("Reading item file {path}"))?;
    let stack: ItemStack =
        serde_json::from_str(&raw).with_context(|| format!("Parsing item stack in {path}"))?;
    info!(item = %stack.item, count = stack.count, privileged, "Inspecting stack");

    let item = registry
        .get(&stack.item)
        .with_context(|| format!("{} is not a registered item", stack.item))?;

    println!("{} x{}", stack.item, stack.count);
    let mut tooltip = Vec::new();
    item.append_tooltip(&stack, &mut tooltip);
    for line in &tooltip {
        println!("  {line}");
    }

    let view = item.disguised_view(&stack, privileged)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
