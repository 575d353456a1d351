//! Constructive heuristics for building an initial tour.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor tour from city 0, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_tour;
