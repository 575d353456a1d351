//! Best-first branch-and-bound over reduced cost matrices.
//!
//! - [`SearchState`] — Tree node: reduced matrix, partial path, lower bound
//! - [`Agenda`] — Min-priority queue of pending states
//! - [`Deadline`] — Timer that raises a shared cancellation flag
//! - [`BnbRunner`] — Search loop with pruning and anytime termination
//!
//! # Reference
//!
//! Little, J.D.C., Murty, K.G., Sweeney, D.W., Karel, C. (1963). "An
//! algorithm for the traveling salesman problem", *Operations Research*
//! 11(6), 972-989.

mod agenda;
mod config;
mod deadline;
mod runner;
mod state;

pub use agenda::Agenda;
pub use config::{BnbConfig, PriorityStrategy};
pub use deadline::Deadline;
pub use runner::{solve, BnbResult, BnbRunner, SearchStats, Termination};
pub use state::SearchState;
