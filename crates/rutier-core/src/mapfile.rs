//! TOML map files
//!
//! Lets the CLI run against a road network other than the built-in one.
//! A map file is a list of undirected road declarations:
//!
//! ```toml
//! [[road]]
//! from = "Arad"
//! to = "Zerind"
//! distance = 75
//! ```
//!
//! File-supplied maps go through [`Network::builder`], so they get the
//! same validation as built-in data.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RutierError};
use crate::graph::network::Network;

#[derive(Debug, Deserialize)]
struct MapFile {
    #[serde(default)]
    road: Vec<RoadSpec>,
}

#[derive(Debug, Deserialize)]
struct RoadSpec {
    from: String,
    to: String,
    distance: f64,
}

/// Load and validate a road network from a TOML map file.
pub fn load_network(path: &Path) -> Result<Network> {
    let raw = fs::read_to_string(path).map_err(|e| RutierError::InvalidMapFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let map: MapFile = toml::from_str(&raw).map_err(|e| RutierError::InvalidMapFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), roads = map.road.len(), "parsed_map_file");

    let mut builder = Network::builder();
    for road in map.road {
        builder = builder.road(road.from, road.to, road.distance);
    }
    Ok(builder.build()?)
}
