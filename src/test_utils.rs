//! Shared fixtures for unit tests.

use crate::distance::CostMatrix;
use crate::models::{tour_cost, City};

/// The unit square, listed around its perimeter.
pub fn unit_square() -> Vec<City> {
    vec![
        City::new(0, 0.0, 0.0),
        City::new(1, 0.0, 1.0),
        City::new(2, 1.0, 1.0),
        City::new(3, 1.0, 0.0),
    ]
}

/// Cheapest tour cost by enumerating every permutation that starts at city 0.
pub fn brute_force_cost(costs: &CostMatrix) -> f64 {
    fn permute(rest: &mut Vec<usize>, k: usize, costs: &CostMatrix, best: &mut f64) {
        if k == rest.len() {
            let mut order = vec![0];
            order.extend_from_slice(rest);
            let c = tour_cost(&order, |a, b| costs.get(a, b));
            if c < *best {
                *best = c;
            }
            return;
        }
        for i in k..rest.len() {
            rest.swap(k, i);
            permute(rest, k + 1, costs, best);
            rest.swap(k, i);
        }
    }

    if costs.size() < 2 {
        return 0.0;
    }
    let mut rest: Vec<usize> = (1..costs.size()).collect();
    let mut best = f64::INFINITY;
    permute(&mut rest, 0, costs, &mut best);
    best
}
