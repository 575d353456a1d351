//! Cost matrices and their reduction.
//!
//! Provides a dense cost matrix with an infinite "forbidden edge" sentinel
//! and the row/column reduction that yields branch-and-bound lower bounds.

mod matrix;
mod reduce;

pub use matrix::CostMatrix;
pub use reduce::reduce;
