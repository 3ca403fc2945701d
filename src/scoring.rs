use crate::matrix::Matrix;
use crate::submatrix::Submatrix;
/**
 * File: ./src/scoring.rs
 * Created Date: Monday, June 9th 2025
 * Author: Zihan
 * -----
 * Last Modified: Friday, 13th June 2025 9:48:27 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
**/
// src/scoring.rs
use statrs::function::gamma::ln_gamma;

/// 评分器trait，所有评分方法都需要实现这个trait
pub trait Scorer: Send + Sync {
    fn score<'a>(&self, matrix: &'a Matrix, submatrix: &Submatrix<'a, f64>) -> f64;

    fn score_all<'a>(&self, matrix: &'a Matrix, submatrices: &[Submatrix<'a, f64>]) -> Vec<f64> {
        submatrices
            .iter()
            .map(|sub| self.score(matrix, sub))
            .collect()
    }
}

/// ln C(a, b), or `None` when the coefficient is undefined (a <= b).
///
/// Computed through `ln_gamma`: a factorial of anything past 170 overflows
/// f64, and C(m, k) for realistic matrix shapes is far beyond that.
pub fn ln_binomial(a: usize, b: usize) -> Option<f64> {
    if a > b {
        Some(
            ln_gamma(a as f64 + 1.0) - ln_gamma(b as f64 + 1.0) - ln_gamma((a - b) as f64 + 1.0),
        )
    } else {
        None
    }
}

/// LAS significance scorer.
///
/// For a k×l submatrix of an m×n matrix with intersection mean τ, the score
/// in nats is
///
///   −ln C(m,k) − ln C(n,l) + τ²kl/2 − ln(τ²kl)/2
///
/// The combinatorial terms penalize index pairs with a large search space of
/// same-shape rivals, the τ²kl term rewards average-value excess. Degenerate
/// candidates (undefined binomial, τ²kl <= 0) score negative infinity and
/// drop out of the running instead of aborting the search.
pub struct LasScorer;

impl Scorer for LasScorer {
    fn score<'a>(&self, matrix: &'a Matrix, submatrix: &Submatrix<'a, f64>) -> f64 {
        let k = submatrix.nrows();
        let l = submatrix.ncols();

        let search_space = match (ln_binomial(matrix.rows, k), ln_binomial(matrix.cols, l)) {
            (Some(row_term), Some(col_term)) => row_term + col_term,
            _ => return f64::NEG_INFINITY,
        };

        let tau = submatrix.mean();
        let excess = tau * tau * (k * l) as f64;
        if !(excess > 0.0) {
            return f64::NEG_INFINITY;
        }

        -search_space + excess / 2.0 - excess.ln() / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn matrix_of(data: Array2<f64>) -> Matrix {
        Matrix::new(data)
    }

    #[test]
    fn test_ln_binomial_known_values() {
        // C(10, 5) = 252, C(6, 3) = 20
        assert!((ln_binomial(10, 5).unwrap() - 252.0_f64.ln()).abs() < 1e-10);
        assert!((ln_binomial(6, 3).unwrap() - 20.0_f64.ln()).abs() < 1e-10);
        // C(a, 0) = 1
        assert!((ln_binomial(4, 0).unwrap() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_ln_binomial_undefined_when_a_not_larger() {
        assert!(ln_binomial(5, 5).is_none());
        assert!(ln_binomial(3, 7).is_none());
    }

    #[test]
    fn test_ln_binomial_large_shape_stays_finite() {
        let value = ln_binomial(2000, 500).unwrap();
        assert!(value.is_finite());
        assert!(value > 0.0);
    }

    #[test]
    fn test_score_matches_closed_form() {
        // 4x4 matrix, 2x2 block of 3.0
        let mut data = Array2::<f64>::zeros((4, 4));
        for i in 0..2 {
            for j in 0..2 {
                data[[i, j]] = 3.0;
            }
        }
        let matrix = matrix_of(data);
        let sub = Submatrix::from_indices(&matrix.data, &[0, 1], &[0, 1]).unwrap();

        let tau = 3.0;
        let excess = tau * tau * 4.0;
        let expected =
            -2.0 * 6.0_f64.ln() + excess / 2.0 - excess.ln() / 2.0; // C(4,2) = 6 twice
        let got = LasScorer.score(&matrix, &sub);
        assert!((got - expected).abs() < 1e-10, "got {}", got);
    }

    #[test]
    fn test_score_invariant_to_index_order() {
        let data = Array2::from_shape_vec(
            (4, 4),
            vec![
                1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
                16.0,
            ],
        )
        .unwrap();
        let matrix = matrix_of(data);

        let forward = Submatrix::from_indices(&matrix.data, &[0, 2], &[1, 3]).unwrap();
        let shuffled = Submatrix::from_indices(&matrix.data, &[2, 0], &[3, 1]).unwrap();
        assert_eq!(
            LasScorer.score(&matrix, &forward),
            LasScorer.score(&matrix, &shuffled)
        );
    }

    #[test]
    fn test_degenerate_candidates_score_negative_infinity() {
        let matrix = matrix_of(Array2::<f64>::zeros((4, 4)));

        // zero mean
        let zeros = Submatrix::from_indices(&matrix.data, &[0, 1], &[0, 1]).unwrap();
        assert_eq!(LasScorer.score(&matrix, &zeros), f64::NEG_INFINITY);

        // k == m makes C(m, k) undefined
        let full = Submatrix::from_indices(&matrix.data, &[0, 1, 2, 3], &[0]).unwrap();
        assert_eq!(LasScorer.score(&matrix, &full), f64::NEG_INFINITY);
    }

    #[test]
    fn test_planted_block_scores_positive() {
        let mut data = Array2::<f64>::zeros((10, 10));
        for i in 0..5 {
            for j in 0..5 {
                data[[i, j]] = 5.0;
            }
        }
        let matrix = matrix_of(data);
        let block = Submatrix::from_indices(
            &matrix.data,
            &[0, 1, 2, 3, 4],
            &[0, 1, 2, 3, 4],
        )
        .unwrap();
        assert!(LasScorer.score(&matrix, &block) > 0.0);
    }
}
