/**
 * File: ./src/bicluster.rs
 * Created Date: Monday, June 9th 2025
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 12th June 2025 4:17:02 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
**/

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One accepted winner of a deflation round: a row index set, a column index
/// set and the significance score the pair achieved when it was extracted.
///
/// Index sets are kept sorted ascending and refer to positions in the matrix
/// the search ran on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bicluster {
    pub row_indices: Vec<usize>,
    pub col_indices: Vec<usize>,
    pub score: f64,
}

impl Bicluster {
    pub fn shape(&self) -> (usize, usize) {
        (self.row_indices.len(), self.col_indices.len())
    }

    /// Zero-elsewhere view of the bicluster: a matrix shaped like `data`
    /// carrying `data`'s values at the bicluster cells and zero everywhere
    /// else. Callers that only need the values can gather directly instead.
    pub fn wrapper(&self, data: &Array2<f64>) -> Array2<f64> {
        let mut wrapper = Array2::<f64>::zeros(data.raw_dim());
        for &i in &self.row_indices {
            for &j in &self.col_indices {
                wrapper[[i, j]] = data[[i, j]];
            }
        }
        wrapper
    }
}

impl fmt::Display for Bicluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} bicluster (score {:.4}), rows {:?}, cols {:?}",
            self.row_indices.len(),
            self.col_indices.len(),
            self.score,
            self.row_indices,
            self.col_indices
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_gathers_current_values() {
        let data =
            Array2::from_shape_vec((3, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
                .unwrap();
        let cluster = Bicluster {
            row_indices: vec![0, 2],
            col_indices: vec![1],
            score: 1.0,
        };
        let wrapper = cluster.wrapper(&data);
        assert_eq!(wrapper[[0, 1]], 2.0);
        assert_eq!(wrapper[[2, 1]], 8.0);
        assert_eq!(wrapper.sum(), 10.0);
    }

    #[test]
    fn test_shape_and_display() {
        let cluster = Bicluster {
            row_indices: vec![1, 2, 3],
            col_indices: vec![0, 4],
            score: 2.5,
        };
        assert_eq!(cluster.shape(), (3, 2));
        let text = format!("{}", cluster);
        assert!(text.contains("3x2"));
        assert!(text.contains("2.5"));
    }
}
