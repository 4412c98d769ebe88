//! Cities command
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use rutier_core::error::Result;
use rutier_core::graph::Network;

#[derive(Debug, Serialize)]
struct CityEntry {
    name: String,
    roads: usize,
}

/// Execute the cities command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    let entries: Vec<CityEntry> = network
        .cities()
        .into_iter()
        .map(|name| CityEntry {
            roads: network.neighbors(name).len(),
            name: name.to_string(),
        })
        .collect();

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Human => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No cities on the map");
                }
                return Ok(());
            }
            for entry in &entries {
                let unit = if entry.roads == 1 { "road" } else { "roads" };
                println!("{} ({} {})", entry.name, entry.roads, unit);
            }
        }
        OutputFormat::Records => {
            for entry in &entries {
                println!("C \"{}\" roads={}", entry.name, entry.roads);
            }
        }
    }

    Ok(())
}
