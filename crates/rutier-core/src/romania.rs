//! Built-in Romania road network
//!
//! Twenty cities and twenty-three roads with the classic integer
//! distances. This is the CLI's default map; callers build it once and
//! share it by reference for the life of the process.

use crate::graph::network::{MalformedGraphError, Network};

/// Build the Romania road network.
pub fn network() -> Result<Network, MalformedGraphError> {
    Network::builder()
        .road("Arad", "Zerind", 75.0)
        .road("Arad", "Timisoara", 118.0)
        .road("Arad", "Sibiu", 140.0)
        .road("Zerind", "Oradea", 71.0)
        .road("Oradea", "Sibiu", 151.0)
        .road("Timisoara", "Lugoj", 111.0)
        .road("Lugoj", "Mehadia", 70.0)
        .road("Mehadia", "Dobreta", 75.0)
        .road("Dobreta", "Craiova", 120.0)
        .road("Craiova", "Rimnicu Vilcea", 146.0)
        .road("Craiova", "Pitesti", 138.0)
        .road("Sibiu", "Fagaras", 99.0)
        .road("Sibiu", "Rimnicu Vilcea", 80.0)
        .road("Fagaras", "Bucharest", 211.0)
        .road("Rimnicu Vilcea", "Pitesti", 97.0)
        .road("Pitesti", "Bucharest", 101.0)
        .road("Bucharest", "Giurgiu", 90.0)
        .road("Bucharest", "Urziceni", 85.0)
        .road("Urziceni", "Vaslui", 142.0)
        .road("Urziceni", "Hirsova", 98.0)
        .road("Hirsova", "Eforie", 86.0)
        .road("Vaslui", "Iasi", 92.0)
        .road("Iasi", "Neamt", 87.0)
        .build()
}
