//! Error types for instance validation and tour construction.

use thiserror::Error;

/// Errors reported by the solver.
///
/// Pruning, branching, timeouts and optimality proofs are normal control
/// flow and never show up here; only inputs that admit no tour do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// The instance has no cities.
    #[error("instance has no cities")]
    EmptyInstance,

    /// No finite edge leaves `from` towards an unvisited city, or the
    /// closing edge back to the start is missing.
    #[error("no feasible tour: no edge out of city {from} after visiting {visited} cities")]
    Disconnected {
        /// City the construction got stuck at.
        from: usize,
        /// Number of cities visited when it got stuck.
        visited: usize,
    },

    /// Raw matrix data does not have `n * n` entries.
    #[error("cost matrix expects {expected} entries, got {actual}")]
    DimensionMismatch {
        /// `n * n`.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },

    /// A cost is NaN or negative.
    #[error("invalid cost {value} on edge {from} -> {to}")]
    InvalidCost {
        /// Source city.
        from: usize,
        /// Destination city.
        to: usize,
        /// Offending value.
        value: f64,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(TspError::EmptyInstance.to_string(), "instance has no cities");
        let e = TspError::Disconnected {
            from: 3,
            visited: 2,
        };
        assert!(e.to_string().contains("city 3"));
        let e = TspError::DimensionMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(e.to_string(), "cost matrix expects 4 entries, got 3");
    }
}
