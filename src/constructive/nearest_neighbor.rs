//! Nearest-neighbor constructive heuristic.
//!
//! Builds one complete tour greedily: starting from city 0, always move to
//! the nearest unvisited city. The result seeds branch-and-bound with a
//! finite upper bound before any node is expanded.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.

use log::debug;

use crate::distance::CostMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// `matrix` must hold real (unreduced) costs. Ties go to the lowest city
/// index.
///
/// # Errors
///
/// - [`TspError::EmptyInstance`] if the matrix has no cities.
/// - [`TspError::Disconnected`] if every unvisited city is unreachable from
///   the current one, or the closing edge back to city 0 is infinite.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::models::City;
/// use u_tsp_bnb::distance::CostMatrix;
/// use u_tsp_bnb::constructive::nearest_neighbor_tour;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 2.0, 0.0),
///     City::new(3, 3.0, 0.0),
/// ];
/// let cm = CostMatrix::from_locations(&cities);
/// let tour = nearest_neighbor_tour(&cm).unwrap();
/// assert_eq!(tour.order(), &[0, 1, 2, 3]);
/// assert!((tour.cost() - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor_tour(matrix: &CostMatrix) -> Result<Tour> {
    let n = matrix.size();
    if n == 0 {
        return Err(TspError::EmptyInstance);
    }

    let mut order = Vec::with_capacity(n);
    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut current = 0;
    order.push(current);

    while !unvisited.is_empty() {
        let next = matrix
            .nearest_neighbor(current, &unvisited)
            .ok_or(TspError::Disconnected {
                from: current,
                visited: order.len(),
            })?;
        unvisited.retain(|&c| c != next);
        order.push(next);
        current = next;
    }

    if n > 1 && !matrix.is_finite(current, 0) {
        return Err(TspError::Disconnected {
            from: current,
            visited: n,
        });
    }

    let tour = Tour::from_matrix(order, matrix);
    debug!("greedy: tour built n={} cost={:.6}", n, tour.cost());
    Ok(tour)
}
