/*
 * File: ./src/lib.rs
 * Created Date: Friday, June 6th 2025
 * Author: Zihan
 * -----
 * Last Modified: Friday, 13th June 2025 2:54:09 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

//! Large Average Submatrix (LAS) biclustering.
//!
//! Feed [`find_biclusters`] a dense `f64` matrix and it returns an ordered
//! catalog of biclusters: row/column index-set pairs whose intersection has
//! an unusually large average value. Each accepted winner is deflated out of
//! the matrix (its mean subtracted from its cells) before the next search
//! round, so later biclusters describe the residual.

pub mod bicluster;
pub mod config;
pub mod las;
pub mod matrix;
pub mod refine;
pub mod sampling;
pub mod scoring;
pub mod submatrix;

use ndarray::Array2;

pub use bicluster::Bicluster;
pub use config::LasConfig;
pub use las::{LasBiclusterer, LasError};

/// One-call entry point: search `data` with `config` and return the catalog.
///
/// Takes the matrix by value because the search deflates it round by round;
/// keep a clone if the original values are still needed (for example to
/// gather a [`Bicluster::wrapper`] view).
pub fn find_biclusters(data: Array2<f64>, config: LasConfig) -> Result<Vec<Bicluster>, LasError> {
    let biclusterer = LasBiclusterer::new(config)?;
    let mut matrix = matrix::Matrix::new(data);
    biclusterer.run(&mut matrix)
}
