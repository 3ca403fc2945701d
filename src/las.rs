//! # LAS: Large Average Submatrix search
//!
//! Alternating-maximization local search with random restarts, the LAS
//! significance score to rank candidates, and an outer deflation loop that
//! extracts several biclusters from one matrix.
//!
//! ## Algorithm Overview
//!
//! One `run` call repeats three nested phases:
//! 1. **Local search**: from a random column set, alternate best-rows /
//!    best-cols refinement until the index pair stops changing.
//! 2. **Restart driver**: repeat the local search for a restart budget with
//!    fresh random (k, l) and starting columns, keep the best-scoring pair.
//! 3. **Deflation**: subtract the winner's mean from its cells so the next
//!    round searches the residual; stop on the noise floor or the catalog cap.

/**
 * File: ./src/las.rs
 * Created Date: Tuesday, June 10th 2025
 * Author: Zihan
 * -----
 * Last Modified: Friday, 13th June 2025 11:31:46 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2025-06-13		Zihan	Deterministic parallel restart evaluation
 */

use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;

use crate::bicluster::Bicluster;
use crate::config::LasConfig;
use crate::matrix::Matrix;
use crate::refine::{best_cols, best_rows};
use crate::sampling::{Draw, RestartSampler};
use crate::scoring::{LasScorer, Scorer};
use crate::submatrix::Submatrix;

#[derive(Debug)]
pub enum LasError {
    /// m or n < 2; there is no valid (k, l) to draw
    MatrixTooSmall { rows: usize, cols: usize },
    /// Rejected by `LasConfig::validate`
    InvalidConfig(&'static str),
}

impl fmt::Display for LasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LasError::MatrixTooSmall { rows, cols } => write!(
                f,
                "matrix of shape {}x{} is too small to search, both dimensions must be at least 2",
                rows, cols
            ),
            LasError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl Error for LasError {}

/// Biclusterer running the LAS search.
pub struct LasBiclusterer {
    // 字段定义
    config: LasConfig,
    scorer: LasScorer,
}

impl LasBiclusterer {
    pub fn new(config: LasConfig) -> Result<LasBiclusterer, LasError> {
        config.validate()?;
        Ok(LasBiclusterer {
            config,
            scorer: LasScorer,
        })
    }

    /// Extract up to `max_biclusters` biclusters from `matrix`.
    ///
    /// The matrix is mutated in place: every accepted winner's mean is
    /// subtracted from its cells before the next round. Callers that need
    /// the original values keep their own copy. An empty catalog is a valid
    /// result, not an error.
    pub fn run(&self, matrix: &mut Matrix) -> Result<Vec<Bicluster>, LasError> {
        if matrix.rows < 2 || matrix.cols < 2 {
            return Err(LasError::MatrixTooSmall {
                rows: matrix.rows,
                cols: matrix.cols,
            });
        }

        let mut sampler = RestartSampler::new(&self.config);
        let mut catalog: Vec<Bicluster> = Vec::new();
        let mut initial_winning_score = 0.0;

        for round in 0.. {
            let round_start = Instant::now();
            let winner = match self.best_of_restarts(matrix, &mut sampler) {
                Some(winner) => winner,
                None => {
                    info!("round {}: no candidate scored above zero, stopping", round);
                    break;
                }
            };

            if round == 0 {
                initial_winning_score = winner.score;
            }
            let noise_floor = self.config.stop_threshold_fraction * initial_winning_score;
            if winner.score < noise_floor {
                info!(
                    "round {}: score {:.4} is under the noise floor {:.4}, stopping",
                    round, winner.score, noise_floor
                );
                break;
            }
            if catalog.len() >= self.config.max_biclusters {
                info!(
                    "round {}: catalog is full ({} biclusters), stopping",
                    round,
                    catalog.len()
                );
                break;
            }

            // The winner's values are read back from the current matrix
            // state, not from anything cached during the restarts.
            let mut sum = 0.0;
            let mut any_nonzero = false;
            for &i in &winner.row_indices {
                for &j in &winner.col_indices {
                    let value = matrix.data[[i, j]];
                    sum += value;
                    if value != 0.0 {
                        any_nonzero = true;
                    }
                }
            }
            let cells = winner.row_indices.len() * winner.col_indices.len();
            let mean = sum / cells as f64;

            info!(
                "round {}: {}x{} winner, score {:.4}, mean {:.4}, elapsed {:?}",
                round,
                winner.row_indices.len(),
                winner.col_indices.len(),
                winner.score,
                mean,
                round_start.elapsed()
            );

            let deflation = matrix.filled(&winner.row_indices, &winner.col_indices, mean);
            if any_nonzero {
                catalog.push(winner);
            }
            matrix.data -= &deflation;
        }

        Ok(catalog)
    }

    /// One restart-driver pass: draw, search, score, keep the maximum.
    ///
    /// The running best starts at score 0, so a candidate scoring <= 0 is
    /// never selected and `None` reports a round without a winner. The
    /// matrix is read-only here.
    fn best_of_restarts(&self, matrix: &Matrix, sampler: &mut RestartSampler) -> Option<Bicluster> {
        sampler.reset();
        // Randomness is consumed serially up front; evaluating the draws is
        // pure, so the parallel path returns the same winner as the serial
        // one for a fixed seed.
        let draws: Vec<Draw> = (0..self.config.iterations)
            .map(|_| sampler.draw(matrix.rows, matrix.cols))
            .collect();

        let best = if self.config.parallel {
            draws
                .par_iter()
                .enumerate()
                .map(|(restart, draw)| (restart, self.evaluate(draw, matrix)))
                .reduce_with(better)
        } else {
            draws
                .iter()
                .enumerate()
                .map(|(restart, draw)| (restart, self.evaluate(draw, matrix)))
                .reduce(better)
        };

        match best {
            Some((_, candidate)) if candidate.score > 0.0 => Some(candidate),
            _ => None,
        }
    }

    fn evaluate(&self, draw: &Draw, matrix: &Matrix) -> Bicluster {
        let (rows, cols) = self.search_one(draw, matrix);
        let score = match Submatrix::from_indices(&matrix.data, &rows, &cols) {
            Some(sub) => self.scorer.score(matrix, &sub),
            None => f64::NEG_INFINITY,
        };
        Bicluster {
            row_indices: rows,
            col_indices: cols,
            score,
        }
    }

    /// Alternating maximization from one random start until the (rows, cols)
    /// pair reaches a fixed point.
    ///
    /// Index sets are sorted, so vector equality is set equality. Exceeding
    /// `max_refine_rounds` is a recoverable non-convergence: the last pair is
    /// returned as a best-effort candidate.
    fn search_one(&self, draw: &Draw, matrix: &Matrix) -> (Vec<usize>, Vec<usize>) {
        let mut cols = draw.cols.clone();
        let mut last_rows: Vec<usize> = Vec::new();
        let mut last_cols: Vec<usize> = Vec::new();

        for _ in 0..self.config.max_refine_rounds {
            let rows = best_rows(draw.k, &cols, matrix);
            cols = best_cols(draw.l, &rows, matrix);
            if rows == last_rows && cols == last_cols {
                return (rows, cols);
            }
            last_rows = rows;
            last_cols = cols.clone();
        }

        warn!(
            "local search for a {}x{} submatrix did not settle within {} rounds, keeping the last candidate",
            draw.k, draw.l, self.config.max_refine_rounds
        );
        (last_rows, last_cols)
    }
}

// higher score wins; equal scores go to the earlier restart so serial and
// parallel reductions agree
fn better(a: (usize, Bicluster), b: (usize, Bicluster)) -> (usize, Bicluster) {
    if b.1.score > a.1.score || (b.1.score == a.1.score && b.0 < a.0) {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn planted_block_matrix() -> Matrix {
        // rows 0..3 are [4, 5, 6, 0, 0, 0]; block mean is exactly 5.0
        let mut data = Array2::<f64>::zeros((6, 6));
        for i in 0..3 {
            for (j, value) in [4.0, 5.0, 6.0].iter().enumerate() {
                data[[i, j]] = *value;
            }
        }
        Matrix::new(data)
    }

    fn seeded_config() -> LasConfig {
        LasConfig {
            iterations: 400,
            seed: Some(42),
            ..LasConfig::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = LasConfig::default();
        config.iterations = 0;
        assert!(LasBiclusterer::new(config).is_err());
    }

    #[test]
    fn test_run_rejects_degenerate_dimensions() {
        let biclusterer = LasBiclusterer::new(seeded_config()).unwrap();
        let mut thin = Matrix::new(Array2::<f64>::zeros((1, 6)));
        assert!(matches!(
            biclusterer.run(&mut thin),
            Err(LasError::MatrixTooSmall { .. })
        ));
    }

    #[test]
    fn test_search_one_is_idempotent_at_fixed_point() {
        let matrix = planted_block_matrix();
        let biclusterer = LasBiclusterer::new(seeded_config()).unwrap();
        let draw = Draw {
            k: 3,
            l: 3,
            cols: vec![5, 1, 4],
        };

        let (rows, cols) = biclusterer.search_one(&draw, &matrix);
        // re-running one refinement round on the converged pair changes nothing
        assert_eq!(best_rows(draw.k, &cols, &matrix), rows);
        assert_eq!(best_cols(draw.l, &rows, &matrix), cols);
    }

    #[test]
    fn test_recovers_planted_block() {
        let mut matrix = planted_block_matrix();
        let biclusterer = LasBiclusterer::new(seeded_config()).unwrap();
        let catalog = biclusterer.run(&mut matrix).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].row_indices, vec![0, 1, 2]);
        assert_eq!(catalog[0].col_indices, vec![0, 1, 2]);
        assert!(catalog[0].score > 0.0);
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let mut serial_config = seeded_config();
        serial_config.parallel = false;
        let mut parallel_config = seeded_config();
        parallel_config.parallel = true;

        let mut first = planted_block_matrix();
        let mut second = planted_block_matrix();
        let serial = LasBiclusterer::new(serial_config)
            .unwrap()
            .run(&mut first)
            .unwrap();
        let parallel = LasBiclusterer::new(parallel_config)
            .unwrap()
            .run(&mut second)
            .unwrap();

        assert_eq!(serial.len(), parallel.len());
        for (a, b) in serial.iter().zip(parallel.iter()) {
            assert_eq!(a.row_indices, b.row_indices);
            assert_eq!(a.col_indices, b.col_indices);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_all_zero_matrix_yields_empty_catalog() {
        let mut matrix = Matrix::new(Array2::<f64>::zeros((2, 2)));
        let biclusterer = LasBiclusterer::new(seeded_config()).unwrap();
        let catalog = biclusterer.run(&mut matrix).unwrap();
        assert!(catalog.is_empty());
    }
}
