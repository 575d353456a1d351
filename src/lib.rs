//! # u-tsp-bnb
//!
//! Traveling salesman tours by best-first branch-and-bound over reduced
//! cost matrices, seeded with a greedy nearest-neighbor tour. The search is
//! anytime: it returns the best tour found when its time budget runs out.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Location trait, Tour)
//! - [`distance`] — Cost matrix and row/column reduction
//! - [`constructive`] — Nearest-neighbor seed tour
//! - [`bnb`] — Search states, agenda, deadline, and the search engine
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use u_tsp_bnb::models::City;
//!
//! let cities = vec![
//!     City::new(0, 0.0, 0.0),
//!     City::new(1, 0.0, 1.0),
//!     City::new(2, 1.0, 1.0),
//!     City::new(3, 1.0, 0.0),
//! ];
//! let result = u_tsp_bnb::solve(&cities, 5).unwrap();
//! assert!((result.best.cost() - 4.0).abs() < 1e-10);
//! ```

pub mod bnb;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bnb::solve;
pub use error::{Result, TspError};
