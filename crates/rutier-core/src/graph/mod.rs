//! Road-network model and route search
//!
//! - `network`: immutable weighted undirected graph store with eager
//!   construction-time validation
//! - `ucs`: uniform-cost route search over a network
//! - `types`: cost and route values shared by both

pub mod network;
pub mod types;
pub mod ucs;

pub use network::{MalformedGraphError, Network, NetworkBuilder};
pub use types::{Cost, Route};
pub use ucs::{shortest_route, shortest_route_interruptible};
