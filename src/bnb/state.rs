//! Search tree nodes and their expansion.
//!
//! # Expansion rule
//!
//! A state holds a partial path starting at city 0 and a reduced matrix of
//! the edges still usable. Extending the path from `last` to `i`:
//!
//! 1. forbids every other edge leaving `last` and entering `i`,
//! 2. forbids every edge from `i` back to a city already on the path, which
//!    would close a sub-tour before all cities are visited,
//! 3. reduces the child matrix.
//!
//! The child bound is the parent bound plus the consumed edge's reduced
//! cost plus the new reduction, so bounds never decrease along a path.

use crate::distance::{reduce, CostMatrix};

/// A node of the branch-and-bound tree.
///
/// Each state owns its matrix outright; expansion clones it before any
/// mutation, so siblings and parents never alias.
#[derive(Debug, Clone)]
pub struct SearchState {
    matrix: CostMatrix,
    path: Vec<usize>,
    bound: f64,
}

impl SearchState {
    /// Builds the root state: path `[0]`, bound = reduction of `costs`.
    ///
    /// # Panics
    ///
    /// Panics if `costs` has no cities.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp_bnb::models::City;
    /// use u_tsp_bnb::distance::CostMatrix;
    /// use u_tsp_bnb::bnb::SearchState;
    ///
    /// let cities = vec![
    ///     City::new(0, 0.0, 0.0),
    ///     City::new(1, 0.0, 1.0),
    ///     City::new(2, 1.0, 1.0),
    ///     City::new(3, 1.0, 0.0),
    /// ];
    /// let root = SearchState::root(&CostMatrix::from_locations(&cities));
    /// assert_eq!(root.path(), &[0]);
    /// assert!((root.bound() - 4.0).abs() < 1e-10);
    /// assert_eq!(root.successors().len(), 3);
    /// ```
    pub fn root(costs: &CostMatrix) -> Self {
        assert!(costs.size() > 0, "root state needs at least one city");
        let mut matrix = costs.clone();
        let bound = reduce(&mut matrix);
        Self {
            matrix,
            path: vec![0],
            bound,
        }
    }

    /// Lower bound on the cost of any tour completing this path.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Cities visited so far, in order, starting with city 0.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Number of cities on the path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// The reduced matrix owned by this state.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// The city the path currently ends at.
    pub fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Returns `true` if every city is on the path.
    pub fn is_solution(&self) -> bool {
        self.path.len() == self.matrix.size()
    }

    /// Expands this state into one child per usable edge out of
    /// [`last`](Self::last), in ascending city order.
    ///
    /// Complete states and dead ends (no finite edge out of `last`) yield
    /// no children.
    pub fn successors(&self) -> Vec<SearchState> {
        if self.is_solution() {
            return Vec::new();
        }
        let n = self.matrix.size();
        let last = self.last();

        (0..n)
            .filter(|&i| i != last && self.matrix.is_finite(last, i))
            .map(|i| self.child(last, i))
            .collect()
    }

    fn child(&self, last: usize, next: usize) -> SearchState {
        debug_assert!(!self.path.contains(&next), "city {next} already visited");
        let edge = self.matrix.get(last, next);

        let mut matrix = self.matrix.clone();
        matrix.forbid_row(last);
        matrix.forbid_col(next);

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);

        for &city in &path {
            matrix.forbid(next, city);
        }

        let reduction = reduce(&mut matrix);
        SearchState {
            matrix,
            path,
            bound: self.bound + edge + reduction,
        }
    }
}
