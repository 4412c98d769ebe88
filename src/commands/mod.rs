//! Command dispatch for the rutier CLI

mod cities;
mod route;

use std::time::Instant;

use crate::cli::{Cli, Commands};
use rutier_core::error::Result;
use rutier_core::graph::Network;
use rutier_core::{mapfile, romania};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let network = load_network(cli)?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        cities = network.node_count(),
        roads = network.road_count(),
        "load_network"
    );

    match &cli.command {
        Commands::Route { from, to } => route::execute(cli, &network, from, to),
        Commands::Cities => cities::execute(cli, &network),
    }
}

fn load_network(cli: &Cli) -> Result<Network> {
    match &cli.map {
        Some(path) => mapfile::load_network(path),
        None => Ok(romania::network()?),
    }
}
