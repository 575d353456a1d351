//! City type and the pairwise cost oracle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Anything that can report the cost of travelling to another location.
///
/// Costs must be non-negative and not NaN. `f64::INFINITY` is allowed and
/// means there is no edge. Symmetry is not required; the cost of a
/// location to itself is never queried.
pub trait Location {
    /// Cost of travelling from `self` to `other`.
    fn cost_to(&self, other: &Self) -> f64;
}

/// A city on the plane.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::models::{City, Location};
///
/// let a = City::new(0, 0.0, 0.0);
/// let b = City::new(1, 3.0, 4.0);
/// assert_eq!(b.id(), 1);
/// assert!((a.cost_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// City ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Location for City {
    fn cost_to(&self, other: &Self) -> f64 {
        self.distance_to(other)
    }
}

/// Generates `n` cities uniformly in the unit square.
///
/// The same seed always yields the same instance. IDs are `0..n` in order.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::models::random_cities;
///
/// let a = random_cities(10, 7);
/// let b = random_cities(10, 7);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|c| (0.0..1.0).contains(&c.x())));
/// ```
pub fn random_cities(n: usize, seed: u64) -> Vec<City> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|id| {
            let x = rng.random_range(0.0..1.0);
            let y = rng.random_range(0.0..1.0);
            City::new(id, x, y)
        })
        .collect()
}
