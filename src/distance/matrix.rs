//! Dense cost matrix with a forbidden-edge sentinel.

use std::fmt;

use crate::error::{Result, TspError};
use crate::models::Location;

/// A dense n×n cost matrix stored in row-major order.
///
/// `f64::INFINITY` marks an edge that is forbidden or already consumed.
/// The diagonal is always infinite, and an infinite entry never becomes
/// finite again: the only mutations are [`forbid`](Self::forbid) and its
/// row/column variants, plus the reducer, which only touches finite entries.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::models::City;
/// use u_tsp_bnb::distance::CostMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
///     City::new(2, 6.0, 8.0),
/// ];
/// let cm = CostMatrix::from_locations(&cities);
/// assert!((cm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!(cm.get(1, 1).is_infinite());
/// assert_eq!(cm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with every edge forbidden.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![f64::INFINITY; size * size],
            size,
        }
    }

    /// Builds the matrix from any cost oracle.
    ///
    /// Oracle values are stored as returned; see [`validate`](Self::validate).
    pub fn from_locations<L: Location>(locations: &[L]) -> Self {
        Self::from_fn(locations.len(), |i, j| locations[i].cost_to(&locations[j]))
    }

    /// Builds the matrix from a cost function over index pairs.
    ///
    /// `cost` is never called with `i == j`. Values are not checked here;
    /// the search engine rejects NaN or negative entries through
    /// [`validate`](Self::validate) before it starts.
    pub fn from_fn<F>(size: usize, cost: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let mut cm = Self::new(size);
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    cm.set(i, j, cost(i, j));
                }
            }
        }
        cm
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    ///
    /// Diagonal entries are overwritten with infinity. Off-diagonal entries
    /// must be non-negative; infinity is accepted as "no edge".
    ///
    /// # Errors
    ///
    /// [`TspError::DimensionMismatch`] if `data.len() != size * size`,
    /// [`TspError::InvalidCost`] for NaN or negative entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(TspError::DimensionMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        let mut cm = Self { data, size };
        for i in 0..size {
            cm.forbid(i, i);
        }
        cm.validate()?;
        Ok(cm)
    }

    /// Checks that every entry is a non-negative number or infinity.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidCost`] for the first NaN or negative entry in
    /// row-major order.
    pub fn validate(&self) -> Result<()> {
        for (idx, &value) in self.data.iter().enumerate() {
            if value.is_nan() || value < 0.0 {
                return Err(TspError::InvalidCost {
                    from: idx / self.size,
                    to: idx % self.size,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Returns the cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub(crate) fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the edge `from -> to` is still available.
    pub fn is_finite(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Forbids a single edge.
    pub fn forbid(&mut self, from: usize, to: usize) {
        self.set(from, to, f64::INFINITY);
    }

    /// Forbids every edge leaving `row`.
    pub fn forbid_row(&mut self, row: usize) {
        let start = row * self.size;
        self.data[start..start + self.size].fill(f64::INFINITY);
    }

    /// Forbids every edge entering `col`.
    pub fn forbid_col(&mut self, col: usize) {
        for row in 0..self.size {
            self.set(row, col, f64::INFINITY);
        }
    }

    /// Row `row` as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.size;
        &mut self.data[start..start + self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two infinite entries compare equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a.is_infinite() || b.is_infinite() {
                    if a != b {
                        return false;
                    }
                } else if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest reachable candidate from `from`.
    ///
    /// Candidates behind an infinite edge are skipped. Ties go to the
    /// earliest candidate. Returns `None` if no candidate is reachable.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if !d.is_finite() {
                continue;
            }
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}

impl fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            for (j, v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if v.is_finite() {
                    write!(f, "{v:>8.3}")?;
                } else {
                    write!(f, "{:>8}", "inf")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
