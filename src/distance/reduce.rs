//! Row-then-column matrix reduction.
//!
//! # Algorithm
//!
//! Subtract each row's smallest finite entry from every finite entry of
//! that row, then do the same for each column of the row-reduced matrix.
//! The sum of everything subtracted is a lower bound on the cost of any
//! assignment (and hence any tour) that uses only finite edges.
//!
//! Rows or columns with no finite entry are left alone and contribute 0.
//! The order is fixed: columns are reduced after rows.
//!
//! # Complexity
//!
//! O(n²).
//!
//! # Reference
//!
//! Little, J.D.C., Murty, K.G., Sweeney, D.W., Karel, C. (1963). "An
//! algorithm for the traveling salesman problem", *Operations Research*
//! 11(6), 972-989.

use super::CostMatrix;

/// Reduces `matrix` in place and returns the total amount subtracted.
///
/// # Examples
///
/// ```
/// use u_tsp_bnb::distance::{reduce, CostMatrix};
///
/// let mut cm = CostMatrix::from_data(3, vec![
///     0.0, 4.0, 6.0,
///     3.0, 0.0, 5.0,
///     2.0, 9.0, 0.0,
/// ]).unwrap();
/// // rows: 4 + 3 + 2 = 9, then column 2 still has min 2
/// assert_eq!(reduce(&mut cm), 11.0);
/// assert_eq!(reduce(&mut cm), 0.0);
/// ```
pub fn reduce(matrix: &mut CostMatrix) -> f64 {
    let n = matrix.size();
    let mut total = 0.0;

    for row in 0..n {
        let min = finite_min(matrix.row(row).iter().copied());
        if let Some(min) = min {
            for v in matrix.row_mut(row).iter_mut().filter(|v| v.is_finite()) {
                *v -= min;
            }
            total += min;
        }
    }

    for col in 0..n {
        let min = finite_min((0..n).map(|row| matrix.get(row, col)));
        if let Some(min) = min {
            for row in 0..n {
                let v = matrix.get(row, col);
                if v.is_finite() {
                    matrix.set(row, col, v - min);
                }
            }
            total += min;
        }
    }

    total
}

fn finite_min<I: Iterator<Item = f64>>(values: I) -> Option<f64> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reduce_known_matrix() {
        // Classic 5-city example
        let mut cm = CostMatrix::from_data(
            5,
            vec![
                0.0, 2.0, 3.0, 4.0, 2.0, //
                0.0, 0.0, 1.0, 6.0, 7.0, //
                8.0, 2.0, 0.0, 3.0, 5.0, //
                9.0, 1.0, 2.0, 0.0, 5.0, //
                4.0, 3.0, 2.0, 1.0, 0.0, //
            ],
        )
        .expect("valid");
        // Row minima: 2, 0, 2, 1, 1 = 6, then column 2 keeps a minimum of 1
        let total = reduce(&mut cm);
        assert_eq!(total, 7.0);
        for row in 0..5 {
            let has_zero = cm.row(row).iter().any(|&v| v == 0.0);
            assert!(has_zero, "row {row} should contain a zero");
        }
    }

    #[test]
    fn test_reduce_two_cities() {
        let mut cm = CostMatrix::from_data(2, vec![0.0, 3.0, 7.0, 0.0]).expect("valid");
        assert_eq!(reduce(&mut cm), 10.0);
        assert_eq!(cm.get(0, 1), 0.0);
        assert_eq!(cm.get(1, 0), 0.0);
    }

    #[test]
    fn test_reduce_skips_infinite_rows_and_columns() {
        let mut cm = CostMatrix::from_fn(3, |_, _| 2.0);
        cm.forbid_row(0);
        cm.forbid_col(1);
        let total = reduce(&mut cm);
        // Rows 1 and 2 reduce by 2 each; row 0 is all infinite
        assert_eq!(total, 4.0);
        assert!(cm.row(0).iter().all(|v| v.is_infinite()));
        assert!(!total.is_nan());
    }

    #[test]
    fn test_reduce_all_infinite() {
        let mut cm = CostMatrix::new(4);
        assert_eq!(reduce(&mut cm), 0.0);
        assert!(cm.row(2).iter().all(|v| v.is_infinite()));
    }

    #[test]
    fn test_reduce_keeps_forbidden_entries() {
        let mut cm = CostMatrix::from_fn(4, |i, j| (i * 4 + j) as f64);
        cm.forbid(2, 3);
        reduce(&mut cm);
        assert!(cm.get(2, 3).is_infinite());
        for i in 0..4 {
            assert!(cm.get(i, i).is_infinite());
        }
    }

    fn arb_matrix() -> impl Strategy<Value = CostMatrix> {
        (2usize..7).prop_flat_map(|n| {
            prop::collection::vec(prop::option::weighted(0.85, 0.0f64..100.0), n * n).prop_map(
                move |cells| {
                    let data = cells
                        .into_iter()
                        .map(|c| c.unwrap_or(f64::INFINITY))
                        .collect();
                    CostMatrix::from_data(n, data).expect("generated data is valid")
                },
            )
        })
    }

    proptest! {
        #[test]
        fn prop_second_reduction_is_zero(mut cm in arb_matrix()) {
            let first = reduce(&mut cm);
            prop_assert!(first >= 0.0);
            let second = reduce(&mut cm);
            prop_assert_eq!(second, 0.0);
        }

        #[test]
        fn prop_reduced_entries_non_negative(mut cm in arb_matrix()) {
            let before = cm.clone();
            reduce(&mut cm);
            let n = cm.size();
            for i in 0..n {
                for j in 0..n {
                    let v = cm.get(i, j);
                    prop_assert_eq!(v.is_finite(), before.get(i, j).is_finite());
                    if v.is_finite() {
                        prop_assert!(v >= 0.0);
                    }
                }
            }
        }
    }
}
