//! Branch-and-bound configuration.

use serde::{Deserialize, Serialize};

/// How agenda priorities are derived from a search state.
///
/// Lower priorities are expanded first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriorityStrategy {
    /// `bound / depth`. Favors deeper states among similar bounds, which
    /// reaches complete tours (and tighter upper bounds) sooner.
    #[default]
    BoundPerDepth,
    /// Raw lower bound (classic best-first).
    Bound,
}

impl PriorityStrategy {
    /// Priority key for a state with the given bound and depth.
    ///
    /// `depth` is at least 1 for every state the engine creates.
    pub fn key(self, bound: f64, depth: usize) -> f64 {
        match self {
            PriorityStrategy::BoundPerDepth => bound / depth.max(1) as f64,
            PriorityStrategy::Bound => bound,
        }
    }
}

/// Configuration parameters for branch-and-bound search.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::bnb::{BnbConfig, PriorityStrategy};
///
/// let config = BnbConfig::default()
///     .with_time_limit_secs(30)
///     .with_priority(PriorityStrategy::Bound);
/// assert_eq!(config.time_limit_ms, Some(30_000));
/// assert_eq!(config.priority, PriorityStrategy::Bound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BnbConfig {
    /// Optional wall-clock time limit in milliseconds.
    ///
    /// When it expires the search stops and returns the best tour found so
    /// far. The flag is checked between dequeues and between successors,
    /// so the run may overshoot by one reduction. `Some(0)` stops before
    /// the first expansion and returns the greedy tour.
    ///
    /// `None` runs until the agenda is exhausted or optimality is proven.
    pub time_limit_ms: Option<u64>,

    /// Agenda ordering.
    pub priority: PriorityStrategy,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: Some(60_000),
            priority: PriorityStrategy::default(),
        }
    }
}

impl BnbConfig {
    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the wall-clock time limit in whole seconds.
    pub fn with_time_limit_secs(mut self, secs: u64) -> Self {
        self.time_limit_ms = Some(secs.saturating_mul(1000));
        self
    }

    /// Removes the time limit.
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit_ms = None;
        self
    }

    /// Sets the agenda ordering.
    pub fn with_priority(mut self, priority: PriorityStrategy) -> Self {
        self.priority = priority;
        self
    }
}
