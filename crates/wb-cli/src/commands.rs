use std::collections::HashMap;
use std::fs;

use anyhow::Context;
use colored::Colorize;
use wb_store::{LoadOutcome, SaveStore, StoreConfig};
use wb_types::{FixedClock, ItemId, StaticCatalog, Tick, WorldId};

use crate::cli::{Cli, Command, InspectArgs, OutputFormat};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = SaveStore::new(StoreConfig::new(&cli.root, &cli.prefix));
    match cli.command {
        Command::Inspect(ref args) => cmd_inspect(&store, args, &cli.format),
        Command::Worlds => cmd_worlds(&store, &cli.format),
    }
}

fn cmd_inspect(store: &SaveStore, args: &InspectArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let world = WorldId(args.world);
    let path = store.config().path_for(world);
    if !path.exists() {
        anyhow::bail!("no save file for world {world} at {}", path.display());
    }

    let catalog = match &args.catalog {
        Some(file) => load_catalog(file)?,
        None => StaticCatalog::new(),
    };
    let tick = Tick(args.tick.unwrap_or(0));

    let (ledger, outcome) = store.load(world, &catalog, &FixedClock(tick));
    if outcome == LoadOutcome::RecoveredEmpty {
        eprintln!(
            "{} save file for world {world} is unreadable; showing an empty ledger",
            "warning:".yellow().bold()
        );
    }

    match format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = ledger
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "item_id": e.item_id,
                        "item_name": e.item_name,
                        "count": e.count,
                        "last_updated": e.last_updated,
                        "age_seconds": args.tick.map(|t| e.age_in_seconds(Tick(t))),
                    })
                })
                .collect();
            let doc = serde_json::json!({
                "world": ledger.seed(),
                "version": ledger.version(),
                "entries": entries,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            println!(
                "world {} — version {}, {} entries",
                ledger.seed().to_string().bold(),
                ledger.version(),
                ledger.len()
            );
            for entry in ledger.iter() {
                let name = if entry.item_name.is_empty() {
                    "?".dimmed().to_string()
                } else {
                    entry.item_name.clone()
                };
                let age = match args.tick {
                    Some(t) => format!("  age {}s", entry.age_in_seconds(Tick(t))),
                    None => String::new(),
                };
                println!(
                    "  {:>8}  {:<24} x{:<8} updated@{}{}",
                    entry.item_id.to_string().yellow(),
                    name,
                    entry.count,
                    entry.last_updated,
                    age
                );
            }
        }
    }
    Ok(())
}

fn cmd_worlds(store: &SaveStore, format: &OutputFormat) -> anyhow::Result<()> {
    let worlds = store
        .worlds()
        .with_context(|| format!("cannot list {}", store.config().root.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&worlds)?),
        OutputFormat::Text => {
            if worlds.is_empty() {
                println!("no save files under {}", store.config().root.display());
            }
            for world in worlds {
                println!("{world}");
            }
        }
    }
    Ok(())
}

/// Read a JSON object of item id → display name.
fn load_catalog(path: &std::path::Path) -> anyhow::Result<StaticCatalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read catalog {}", path.display()))?;
    let raw: HashMap<String, String> =
        serde_json::from_str(&text).context("catalog must be a JSON object of id to name")?;

    let mut catalog = StaticCatalog::new();
    for (key, name) in raw {
        let id: i32 = key
            .parse()
            .with_context(|| format!("catalog key {key:?} is not an item id"))?;
        catalog.insert(ItemId(id), name);
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use wb_types::ItemCatalog;

    use super::*;

    #[test]
    fn catalog_files_are_id_to_name_objects() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"1101": "iron ingot", "1102": "copper ingot"}}"#).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(
            catalog.item_name(ItemId(1101)).as_deref(),
            Some("iron ingot")
        );
    }

    #[test]
    fn non_numeric_catalog_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"iron": "iron ingot"}}"#).unwrap();

        assert!(load_catalog(file.path()).is_err());
    }
}
