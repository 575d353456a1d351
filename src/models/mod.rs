//! Domain model types for the traveling salesman problem.
//!
//! Provides the cost oracle trait, a planar city, a seeded instance
//! generator, and the complete tour type the solver returns.

mod city;
mod tour;

pub use city::{random_cities, City, Location};
pub use tour::{tour_cost, Tour};
