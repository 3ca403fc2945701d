/**
 * File: ./src/matrix.rs
 * Created Date: Friday, June 6th 2025
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 10th June 2025 3:42:18 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
**/

use std::ops::{Index, IndexMut};
// Array2
use ndarray::Array2;

/// Owned dense matrix plus its shape, threaded explicitly through the search
/// instead of module-level state.
pub struct Matrix {
    pub data: Array2<f64>,
    pub rows: usize,
    pub cols: usize,
}

impl Matrix {
    // constructor with Array2<f64>
    pub fn new(data: Array2<f64>) -> Matrix {
        let rows = data.shape()[0];
        let cols = data.shape()[1];
        Matrix { data, rows, cols }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            Some(&self.data[(row, col)])
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        if row >= self.rows || col >= self.cols {
            None
        } else {
            Some(&mut self.data[(row, col)])
        }
    }

    /// Same-shape array holding `value` at the (rows × cols) intersection and
    /// zero elsewhere. Pure; the caller decides whether to subtract it.
    pub fn filled(&self, rows: &[usize], cols: &[usize], value: f64) -> Array2<f64> {
        let mut wrapper = Array2::<f64>::zeros((self.rows, self.cols));
        for &i in rows {
            for &j in cols {
                wrapper[[i, j]] = value;
            }
        }
        wrapper
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        &self.data[(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        &mut self.data[(row, col)]
    }
}
