/**
 * File: ./src/submatrix.rs
 * Created Date: Friday, June 6th 2025
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 11th June 2025 10:05:33 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
**/

/// Extend the usage of slice for ndarray
/// struct Submatrix and impl
use ndarray::{Array2, ArrayView2};
use std::ops::Index;

///
/// # Example
/// ```
/// use las_bicluster::submatrix::Submatrix;
/// use ndarray::Array2;
/// let a = Array2::from_shape_vec((3, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
/// let b = Submatrix::from_indices(&a, &[0, 2], &[1, 2]).unwrap();
///
/// assert_eq!(b[(1, 1)], 9.0);
/// assert_eq!(b[(0, 0)], 2.0);
/// ```
/// b = [[2, 3],
///     [8, 9]]
pub struct Submatrix<'a, T> {
    data: ArrayView2<'a, T>,
    pub row_indices: Vec<usize>,
    pub col_indices: Vec<usize>,
}

impl<'a, T> Submatrix<'a, T> {
    fn new(
        matrix: &'a Array2<T>,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
    ) -> Option<Self> {
        let data = matrix.view();

        // check if row_indices and col_indices are valid
        let row_max = matrix.shape()[0];
        let col_max = matrix.shape()[1];

        let rm = row_indices.iter().max()?;
        let cm = col_indices.iter().max()?;

        if rm >= &row_max || cm >= &col_max {
            None
        } else {
            Some(Submatrix {
                data,
                row_indices,
                col_indices,
            })
        }
    }

    // give `new` a nick name: from_indices to pub
    pub fn from_indices(
        matrix: &'a Array2<T>,
        row_indices: &[usize],
        col_indices: &[usize],
    ) -> Option<Self> {
        let row_indices = row_indices.to_vec();
        let col_indices = col_indices.to_vec();
        Self::new(matrix, row_indices, col_indices)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.row_indices.get(row).and_then(|&r| {
            self.col_indices
                .get(col)
                .and_then(|&c| self.data.get((r, c)))
        })
    }

    pub fn nrows(&self) -> usize {
        self.row_indices.len()
    }

    pub fn ncols(&self) -> usize {
        self.col_indices.len()
    }
}

impl<'a> Submatrix<'a, f64> {
    pub fn sum(&self) -> f64 {
        let mut total = 0.0;
        for &r in &self.row_indices {
            for &c in &self.col_indices {
                total += self.data[(r, c)];
            }
        }
        total
    }

    /// Mean over the selected intersection cells only; cells outside the
    /// index sets never enter the average.
    pub fn mean(&self) -> f64 {
        let count = self.nrows() * self.ncols();
        if count == 0 {
            return 0.0;
        }
        self.sum() / count as f64
    }

    pub fn has_nonzero(&self) -> bool {
        for &r in &self.row_indices {
            for &c in &self.col_indices {
                if self.data[(r, c)] != 0.0 {
                    return true;
                }
            }
        }
        false
    }
}

impl<'a, T> Index<(usize, usize)> for Submatrix<'a, T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        self.get(index.0, index.1).unwrap()
    }
}

// impl Display
/// # Example
/// ```log
/// [2, 3]
/// [8, 9]
/// ```
impl<'a, T> std::fmt::Display for Submatrix<'a, T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        for i in 0..self.row_indices.len() {
            s.push_str("[");
            for j in 0..self.col_indices.len() {
                s.push_str(&format!("{}, ", &self[(i, j)]));
            }
            s.push_str("]\n");
        }

        write!(f, "{}", s)
    }
}
