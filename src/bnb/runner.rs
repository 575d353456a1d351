//! Best-first branch-and-bound execution engine.
//!
//! # Algorithm
//!
//! 1. Reduce the full cost matrix into the root state (path `[0]`)
//! 2. Seed the best solution so far (BSSF) with a nearest-neighbor tour
//! 3. While the agenda is non-empty and time remains:
//!    a. If the head's bound already reaches the BSSF cost, sweep every
//!       entry that cannot improve it; an emptied agenda proves optimality
//!    b. Dequeue the lowest-priority state and expand it
//!    c. Prune children whose bound reaches the BSSF cost, replace the BSSF
//!       with cheaper complete tours, enqueue the rest
//! 4. Return the BSSF
//!
//! The search is anytime: when the deadline fires it returns the best tour
//! found so far, which is never worse than the greedy seed.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::agenda::Agenda;
use super::config::BnbConfig;
use super::deadline::Deadline;
use super::state::SearchState;
use crate::constructive::nearest_neighbor_tour;
use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::models::{Location, Tour};

/// Relative tolerance when comparing a lower bound against a tour cost.
const BOUND_EPSILON: f64 = 1e-9;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Every state was expanded or pruned.
    Exhausted,
    /// No remaining state could beat the best tour; it is optimal.
    Optimal,
    /// The deadline (or an external cancel) stopped the search.
    TimedOut,
}

/// Counters collected during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Why the search stopped.
    pub termination: Termination,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
    /// Largest number of states held by the agenda at once.
    pub max_agenda_size: usize,
    /// Cost of the greedy seed tour.
    pub greedy_cost: f64,
    /// States built, including the root.
    pub states_created: usize,
    /// States whose successors were generated.
    pub states_expanded: usize,
    /// States discarded because their bound reached the BSSF cost.
    pub states_pruned: usize,
    /// Number of times a complete tour replaced the BSSF.
    pub bssf_updates: usize,
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BnbResult {
    /// Best tour found.
    pub best: Tour,
    /// Run statistics.
    pub stats: SearchStats,
}

/// Branch-and-bound runner.
pub struct BnbRunner;

impl BnbRunner {
    /// Searches for a cheapest tour over `costs`.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyInstance`] if `costs` has no cities.
    /// - [`TspError::InvalidCost`] if `costs` holds a NaN or negative entry.
    /// - [`TspError::Disconnected`] if the greedy seed cannot build a tour.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp_bnb::models::City;
    /// use u_tsp_bnb::distance::CostMatrix;
    /// use u_tsp_bnb::bnb::{BnbConfig, BnbRunner, Termination};
    ///
    /// let cities = vec![
    ///     City::new(0, 0.0, 0.0),
    ///     City::new(1, 0.0, 1.0),
    ///     City::new(2, 1.0, 1.0),
    ///     City::new(3, 1.0, 0.0),
    /// ];
    /// let cm = CostMatrix::from_locations(&cities);
    /// let result = BnbRunner::run(&cm, &BnbConfig::default()).unwrap();
    /// assert!((result.best.cost() - 4.0).abs() < 1e-10);
    /// assert_ne!(result.stats.termination, Termination::TimedOut);
    /// ```
    pub fn run(costs: &CostMatrix, config: &BnbConfig) -> Result<BnbResult> {
        Self::run_with_cancel(costs, config, None)
    }

    /// Runs the search with an optional shared cancellation flag.
    ///
    /// The configured time limit writes to the same flag, so setting it
    /// from another thread is equivalent to the deadline firing.
    pub fn run_with_cancel(
        costs: &CostMatrix,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BnbResult> {
        let n = costs.size();
        if n == 0 {
            return Err(TspError::EmptyInstance);
        }
        costs.validate()?;

        let start = Instant::now();
        let flag = cancel.unwrap_or_else(|| Arc::new(AtomicBool::new(false)));
        let deadline = match config.time_limit_ms {
            Some(ms) => Deadline::arm(Duration::from_millis(ms), Arc::clone(&flag)),
            None => Deadline::never(Arc::clone(&flag)),
        };

        info!(
            "bnb: start n={} time_limit_ms={:?} priority={:?} symmetric={}",
            n,
            config.time_limit_ms,
            config.priority,
            costs.is_symmetric(BOUND_EPSILON)
        );

        let root = SearchState::root(costs);
        trace!("bnb: root bound={:.6} matrix=\n{}", root.bound(), root.matrix());

        let bssf = nearest_neighbor_tour(costs)?;
        let greedy_cost = bssf.cost();
        debug!(
            "bnb: greedy seed cost={:.6} root_bound={:.6}",
            greedy_cost,
            root.bound()
        );

        let mut search = Search::new(costs, config, root, bssf);
        let termination = search.run(|| deadline.is_expired());

        let stats = SearchStats {
            termination,
            elapsed: start.elapsed(),
            max_agenda_size: search.agenda.peak_len(),
            greedy_cost,
            states_created: search.states_created,
            states_expanded: search.states_expanded,
            states_pruned: search.states_pruned,
            bssf_updates: search.bssf_updates,
        };
        info!(
            "bnb: done termination={:?} cost={:.6} elapsed_ms={} expanded={} pruned={} max_agenda={}",
            stats.termination,
            search.bssf.cost(),
            stats.elapsed.as_millis(),
            stats.states_expanded,
            stats.states_pruned,
            stats.max_agenda_size
        );

        Ok(BnbResult {
            best: search.bssf,
            stats,
        })
    }
}

/// Agenda, BSSF and counters of one run.
struct Search<'a> {
    costs: &'a CostMatrix,
    config: &'a BnbConfig,
    agenda: Agenda<SearchState>,
    bssf: Tour,
    states_created: usize,
    states_expanded: usize,
    states_pruned: usize,
    bssf_updates: usize,
}

impl<'a> Search<'a> {
    fn new(costs: &'a CostMatrix, config: &'a BnbConfig, root: SearchState, bssf: Tour) -> Self {
        let mut agenda = Agenda::new();
        agenda.enqueue(config.priority.key(root.bound(), root.depth()), root);
        Self {
            costs,
            config,
            agenda,
            bssf,
            states_created: 1,
            states_expanded: 0,
            states_pruned: 0,
            bssf_updates: 0,
        }
    }

    /// Runs the best-first loop until the agenda empties, optimality is
    /// proven or `expired` returns `true`.
    ///
    /// `expired` is polled before each dequeue and before each successor.
    fn run<F>(&mut self, mut expired: F) -> Termination
    where
        F: FnMut() -> bool,
    {
        loop {
            let head_bound = match self.agenda.peek_min() {
                Some((_, state)) => state.bound(),
                None => return Termination::Exhausted,
            };
            if expired() {
                return Termination::TimedOut;
            }

            if cannot_improve(head_bound, self.bssf.cost()) {
                let swept = sweep(&mut self.agenda, self.bssf.cost());
                self.states_pruned += swept;
                debug!(
                    "bnb: sweep removed={} remaining={} bssf={:.6}",
                    swept,
                    self.agenda.len(),
                    self.bssf.cost()
                );
                if self.agenda.is_empty() {
                    return Termination::Optimal;
                }
                continue;
            }

            let Some((_, state)) = self.agenda.dequeue_min() else {
                return Termination::Exhausted;
            };
            if cannot_improve(state.bound(), self.bssf.cost()) {
                self.states_pruned += 1;
                continue;
            }

            self.states_expanded += 1;
            for child in state.successors() {
                // Unvisited siblings are dropped along with the rest of the agenda.
                if expired() {
                    return Termination::TimedOut;
                }
                self.consider(child);
            }
        }
    }

    /// Prunes `child`, takes it as the new BSSF, or queues it.
    fn consider(&mut self, child: SearchState) {
        self.states_created += 1;

        if cannot_improve(child.bound(), self.bssf.cost()) {
            self.states_pruned += 1;
        } else if child.is_solution() {
            let tour = Tour::from_matrix(child.path().to_vec(), self.costs);
            if tour.cost() < self.bssf.cost() {
                debug!(
                    "bnb: bssf improved old={:.6} new={:.6} expanded={}",
                    self.bssf.cost(),
                    tour.cost(),
                    self.states_expanded
                );
                self.bssf = tour;
                self.bssf_updates += 1;
            }
        } else {
            let key = self.config.priority.key(child.bound(), child.depth());
            self.agenda.enqueue(key, child);
        }
    }
}

/// Solves a city list with the default configuration and the given time
/// budget in seconds.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::models::random_cities;
///
/// let cities = random_cities(8, 3);
/// let result = u_tsp_bnb::solve(&cities, 10).unwrap();
/// assert_eq!(result.best.len(), 8);
/// assert!(result.best.cost() <= result.stats.greedy_cost);
/// ```
pub fn solve<L: Location>(cities: &[L], time_budget_secs: u64) -> Result<BnbResult> {
    let costs = CostMatrix::from_locations(cities);
    let config = BnbConfig::default().with_time_limit_secs(time_budget_secs);
    BnbRunner::run(&costs, &config)
}

/// `true` if a state with this bound cannot lead to a tour cheaper than `cost`.
fn cannot_improve(bound: f64, cost: f64) -> bool {
    bound >= cost - BOUND_EPSILON * cost.abs().max(1.0)
}

/// Drops every agenda entry that cannot beat `cost` and returns how many
/// were dropped. An empty agenda afterwards means `cost` is optimal.
fn sweep(agenda: &mut Agenda<SearchState>, cost: f64) -> usize {
    agenda.retain(|state| !cannot_improve(state.bound(), cost))
}
