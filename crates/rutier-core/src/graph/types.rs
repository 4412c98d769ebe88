use std::fmt;

use serde::Serialize;

/// Accumulated cost of traversing one or more roads.
///
/// Costs are non-negative and finite; network construction rejects
/// anything else, so comparing two costs is always well defined.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(value: f64) -> Self {
        Cost(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(distance: u32) -> Self {
        Cost(f64::from(distance))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole-number distances print without a trailing ".0"
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A minimum-cost route between two cities, start and goal inclusive.
///
/// A route with a single stop is the trivial zero-cost route from a city
/// to itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Cities along the route, in travel order
    pub stops: Vec<String>,
    /// Sum of the traversed road weights
    pub cost: Cost,
}

impl Route {
    /// Number of roads traversed.
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}
