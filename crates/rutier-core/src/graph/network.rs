use std::collections::HashMap;

use thiserror::Error;

use crate::graph::types::Cost;

/// Construction-time validation failure.
///
/// The store validates eagerly so the search engine can assume a
/// well-formed network: symmetric adjacency, non-negative finite weights.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedGraphError {
    #[error("negative weight {weight} on road {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("non-finite weight on road {from} -> {to}")]
    NonFiniteWeight { from: String, to: String },

    #[error("asymmetric road {from} -> {to}: forward weight {forward}, reverse weight {reverse}")]
    AsymmetricWeight {
        from: String,
        to: String,
        forward: f64,
        reverse: f64,
    },

    #[error("missing reverse road {to} -> {from} (forward weight {forward})")]
    MissingReverse {
        from: String,
        to: String,
        forward: f64,
    },

    #[error("conflicting declarations for road {a} <-> {b}: {first} and {second}")]
    ConflictingRoad {
        a: String,
        b: String,
        first: f64,
        second: f64,
    },
}

/// Immutable weighted undirected road network.
///
/// Built once via [`Network::builder`] or [`Network::from_adjacency`] and
/// never mutated afterwards; shared references are safe across threads and
/// across concurrent searches.
#[derive(Debug, Clone)]
pub struct Network {
    adjacency: HashMap<String, HashMap<String, Cost>>,
}

impl Network {
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::default()
    }

    /// Build a network from a full adjacency mapping, validating that
    /// every edge is symmetric and every weight non-negative and finite.
    pub fn from_adjacency(
        adjacency: HashMap<String, HashMap<String, f64>>,
    ) -> Result<Self, MalformedGraphError> {
        for (from, roads) in &adjacency {
            for (to, &weight) in roads {
                check_weight(from, to, weight)?;
                match adjacency.get(to).and_then(|reverse| reverse.get(from)) {
                    Some(&reverse) if reverse == weight => {}
                    Some(&reverse) => {
                        return Err(MalformedGraphError::AsymmetricWeight {
                            from: from.clone(),
                            to: to.clone(),
                            forward: weight,
                            reverse,
                        })
                    }
                    None => {
                        return Err(MalformedGraphError::MissingReverse {
                            from: from.clone(),
                            to: to.clone(),
                            forward: weight,
                        })
                    }
                }
            }
        }

        let adjacency = adjacency
            .into_iter()
            .map(|(city, roads)| {
                let roads = roads
                    .into_iter()
                    .map(|(to, weight)| (to, Cost::new(weight)))
                    .collect();
                (city, roads)
            })
            .collect();

        Ok(Network { adjacency })
    }

    pub fn contains(&self, city: &str) -> bool {
        self.adjacency.contains_key(city)
    }

    /// Adjacent cities and road weights, sorted by city name.
    ///
    /// Unknown cities have no roads; the result is empty, never an error.
    /// The sorted order is what keeps repeated searches deterministic
    /// regardless of hash seeding.
    pub fn neighbors(&self, city: &str) -> Vec<(&str, Cost)> {
        let mut neighbors: Vec<(&str, Cost)> = self
            .adjacency
            .get(city)
            .map(|roads| {
                roads
                    .iter()
                    .map(|(to, &weight)| (to.as_str(), weight))
                    .collect()
            })
            .unwrap_or_default();
        neighbors.sort_by(|a, b| a.0.cmp(b.0));
        neighbors
    }

    /// Weight of the direct road between two cities, if one exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<Cost> {
        self.adjacency
            .get(from)
            .and_then(|roads| roads.get(to))
            .copied()
    }

    /// All city names, sorted.
    pub fn cities(&self) -> Vec<&str> {
        let mut cities: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        cities.sort_unstable();
        cities
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected roads.
    pub fn road_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }
}

fn check_weight(from: &str, to: &str, weight: f64) -> Result<(), MalformedGraphError> {
    if !weight.is_finite() {
        return Err(MalformedGraphError::NonFiniteWeight {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    if weight < 0.0 {
        return Err(MalformedGraphError::NegativeWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
    }
    Ok(())
}

/// Collects undirected road declarations and validates them on build.
///
/// Declaring a road inserts both directions, so builder-constructed
/// networks are symmetric by construction; the same road declared twice
/// with different weights is rejected.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    roads: Vec<(String, String, f64)>,
}

impl NetworkBuilder {
    /// Declare an undirected road between two cities.
    pub fn road(mut self, a: impl Into<String>, b: impl Into<String>, weight: f64) -> Self {
        self.roads.push((a.into(), b.into(), weight));
        self
    }

    pub fn build(self) -> Result<Network, MalformedGraphError> {
        let mut adjacency: HashMap<String, HashMap<String, Cost>> = HashMap::new();

        for (a, b, weight) in self.roads {
            check_weight(&a, &b, weight)?;

            if let Some(existing) = adjacency.get(&a).and_then(|roads| roads.get(&b)) {
                if existing.value() != weight {
                    return Err(MalformedGraphError::ConflictingRoad {
                        a,
                        b,
                        first: existing.value(),
                        second: weight,
                    });
                }
                continue;
            }

            adjacency
                .entry(a.clone())
                .or_default()
                .insert(b.clone(), Cost::new(weight));
            adjacency.entry(b).or_default().insert(a, Cost::new(weight));
        }

        Ok(Network { adjacency })
    }
}
