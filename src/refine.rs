/**
 * File: ./src/refine.rs
 * Created Date: Monday, June 9th 2025
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 10th June 2025 11:29:54 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
**/

use std::cmp::Ordering;

use crate::matrix::Matrix;

/// The k rows with the largest sums over the fixed column set.
///
/// One greedy conditional-maximization step, not an exhaustive search. Ties
/// go to the smaller row index so repeated runs are reproducible; the result
/// is sorted ascending.
pub fn best_rows(k: usize, cols: &[usize], matrix: &Matrix) -> Vec<usize> {
    let sums: Vec<f64> = (0..matrix.rows)
        .map(|i| cols.iter().map(|&j| matrix.data[[i, j]]).sum())
        .collect();
    top_indices(k, &sums)
}

/// The l columns with the largest sums over the fixed row set. Mirror of
/// `best_rows`.
pub fn best_cols(l: usize, rows: &[usize], matrix: &Matrix) -> Vec<usize> {
    let sums: Vec<f64> = (0..matrix.cols)
        .map(|j| rows.iter().map(|&i| matrix.data[[i, j]]).sum())
        .collect();
    top_indices(l, &sums)
}

// descending sum, ties broken by ascending index
fn top_indices(count: usize, sums: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sums.len()).collect();
    order.sort_by(|&a, &b| {
        sums[b]
            .partial_cmp(&sums[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });
    order.truncate(count);
    order.sort_unstable();
    order
}
