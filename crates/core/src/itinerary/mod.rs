//! Cheapest-itinerary engine.
//!
//! Given an unordered collection of directed, priced legs, finds the
//! minimum-total-price path between two location codes:
//!
//! 1. [`graph::AdjacencyMap::build`] groups legs by origin (rebuilt per query).
//! 2. [`search::find_cheapest`] runs a Dijkstra search whose frontier is
//!    ordered by accumulated price, then by location code, so equal-cost
//!    alternatives always resolve the same way.
//!
//! Prices are assumed non-negative. The engine does not check this; the
//! store and HTTP layers reject negative prices before they get here.

pub mod graph;
pub mod search;

pub use graph::{AdjacencyMap, Leg};
pub use search::{find_cheapest, find_cheapest_route, Itinerary, PathResult};
