use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Result, RutierError};
use crate::graph::network::Network;
use crate::graph::types::{Cost, Route};

/// Frontier entry for the uniform-cost search min-heap.
///
/// Ordered by accumulated cost, ascending; ties fall back to the
/// insertion sequence number, so the first-discovered entry at a given
/// cost is expanded first. Each entry owns the path that reached it.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    cost: Cost,
    seq: u64,
    city: String,
    path: Vec<String>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Weights are validated finite at construction, so comparing
        // accumulated costs cannot fail.
        self.cost
            .value()
            .partial_cmp(&other.cost.value())
            .unwrap()
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Find a minimum-cost route between two cities.
///
/// Returns `None` when no route exists: the cities lie in disconnected
/// components, or either city is not on the map at all (an unknown city
/// simply has no roads). `start == goal` yields the trivial one-stop
/// route with cost zero.
pub fn shortest_route(network: &Network, start: &str, goal: &str) -> Option<Route> {
    let never = AtomicBool::new(false);
    shortest_route_interruptible(network, start, goal, &never).unwrap_or_default()
}

/// [`shortest_route`] with a cooperative interruption flag.
///
/// The flag is checked once per frontier pop; raising it makes the
/// search return `Err(RutierError::Interrupted)` instead of running the
/// frontier dry on a large network.
#[tracing::instrument(skip(network, interrupted), fields(start = %start, goal = %goal))]
pub fn shortest_route_interruptible(
    network: &Network,
    start: &str,
    goal: &str,
    interrupted: &AtomicBool,
) -> Result<Option<Route>> {
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut seq: u64 = 0;

    frontier.push(Reverse(FrontierEntry {
        cost: Cost::ZERO,
        seq,
        city: start.to_string(),
        path: Vec::new(),
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        if interrupted.load(Ordering::SeqCst) {
            return Err(RutierError::Interrupted);
        }

        // Stale entry: a cheaper route to this city was already finalized.
        if visited.contains(&entry.city) {
            continue;
        }

        let mut path = entry.path;
        path.push(entry.city.clone());
        visited.insert(entry.city.clone());

        if entry.city == goal {
            tracing::debug!(
                cost = entry.cost.value(),
                hops = path.len() - 1,
                "route_found"
            );
            return Ok(Some(Route {
                stops: path,
                cost: entry.cost,
            }));
        }

        for (neighbor, weight) in network.neighbors(&entry.city) {
            if visited.contains(neighbor) {
                continue;
            }
            seq += 1;
            frontier.push(Reverse(FrontierEntry {
                cost: entry.cost + weight,
                seq,
                city: neighbor.to_string(),
                path: path.clone(),
            }));
        }
    }

    tracing::debug!(expanded = visited.len(), "no_route");
    Ok(None)
}

#[cfg(test)]
mod tests;
