//! Complete tours and their cost.

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;

/// Total cost of visiting `order` and returning to its first city.
///
/// Sums the consecutive edges plus the wrap-around edge from the last
/// city back to the first. Tours of zero or one city cost nothing.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::models::tour_cost;
///
/// let cost = tour_cost(&[0, 1, 2], |a, b| (a as f64 - b as f64).abs());
/// assert_eq!(cost, 1.0 + 1.0 + 2.0);
/// ```
pub fn tour_cost<F>(order: &[usize], cost: F) -> f64
where
    F: Fn(usize, usize) -> f64,
{
    if order.len() < 2 {
        return 0.0;
    }
    let inner: f64 = order.windows(2).map(|w| cost(w[0], w[1])).sum();
    inner + cost(order[order.len() - 1], order[0])
}

/// A complete tour: every city exactly once, closed back to the start.
///
/// The cost is computed once at construction and never changes.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::models::{City, Tour};
/// use u_tsp_bnb::distance::CostMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 1.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 1.0, 0.0),
/// ];
/// let cm = CostMatrix::from_locations(&cities);
/// let tour = Tour::from_matrix(vec![0, 1, 2, 3], &cm);
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// assert_eq!(tour.cities(&cities)[2].id(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Builds a tour from a city order, pricing it with `matrix`.
    pub fn from_matrix(order: Vec<usize>, matrix: &CostMatrix) -> Self {
        let cost = tour_cost(&order, |a, b| matrix.get(a, b));
        Self { order, cost }
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total cost, including the closing edge.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cities on the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves the city indices against the caller's city list.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds for `cities`.
    pub fn cities<'a, C>(&self, cities: &'a [C]) -> Vec<&'a C> {
        self.order.iter().map(|&i| &cities[i]).collect()
    }

    /// Returns `true` if the order is a permutation of `0..n`.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.order {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }
}
