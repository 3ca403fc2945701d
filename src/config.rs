use std::fs::File;

/**
 * File: ./src/config.rs
 * Created Date: Wednesday, June 11th 2025
 * Author: Zihan
 * -----
 * Last Modified: Friday, 13th June 2025 10:12:45 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
use ndarray::Array2;
use ndarray_npy::ReadNpyExt;
use serde::{Deserialize, Serialize};

use crate::las::LasError;

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LasConfig {
    /// 每轮重启次数
    pub iterations: usize,
    /// 最大双聚类数量
    pub max_biclusters: usize,
    /// Fraction of the first round's winning score under which the
    /// deflation loop stops
    pub stop_threshold_fraction: f64,
    /// Safety cap on alternating-refinement rounds per local search
    pub max_refine_rounds: usize,
    /// Skip restart starts already tried this round (bounded retries)
    pub dedup_restarts: bool,
    /// Evaluate restarts on the rayon pool
    pub parallel: bool,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for LasConfig {
    fn default() -> Self {
        Self {
            iterations: 2000,
            max_biclusters: 5,
            stop_threshold_fraction: 0.01,
            max_refine_rounds: 200,
            dedup_restarts: false,
            parallel: true,
            seed: None,
        }
    }
}

impl LasConfig {
    /// Structural misconfiguration is rejected here, at the call boundary,
    /// before any search runs.
    pub fn validate(&self) -> Result<(), LasError> {
        if self.iterations == 0 {
            return Err(LasError::InvalidConfig("iterations must be at least 1"));
        }
        if self.max_biclusters == 0 {
            return Err(LasError::InvalidConfig("max_biclusters must be at least 1"));
        }
        if self.max_refine_rounds == 0 {
            return Err(LasError::InvalidConfig(
                "max_refine_rounds must be at least 1",
            ));
        }
        if !self.stop_threshold_fraction.is_finite() || self.stop_threshold_fraction < 0.0 {
            return Err(LasError::InvalidConfig(
                "stop_threshold_fraction must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Command-line configuration for the binary.
pub struct Config {
    matrix: Array2<f64>,
    las: LasConfig,
}

impl Config {
    /// constructor
    ///
    /// # Examples
    /// ```bash
    /// $ cargo run -- "data/matrix.npy" 2000 5 0.01
    /// ```
    pub fn new(
        mut args: impl Iterator<Item = String>,
    ) -> Result<Config, Box<dyn std::error::Error>> {
        // read args
        // args:
        // 0: program name
        // 1: matrix path (.npy)
        // 2: iterations (optional)
        // 3: max_biclusters (optional)
        // 4: stop_threshold_fraction (optional)
        args.next();
        let path = args
            .next()
            .ok_or("usage: las_bicluster <matrix.npy> [iterations] [max_biclusters] [stop_threshold]")?;
        let reader = File::open(path)?;
        let matrix = Array2::<f64>::read_npy(reader)?;

        let mut las = LasConfig::default();
        if let Some(arg) = args.next() {
            las.iterations = arg.parse::<usize>()?;
        }
        if let Some(arg) = args.next() {
            las.max_biclusters = arg.parse::<usize>()?;
        }
        if let Some(arg) = args.next() {
            las.stop_threshold_fraction = arg.parse::<f64>()?;
        }

        Ok(Config { matrix, las })
    }

    pub fn get_matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    pub fn get_las(&self) -> &LasConfig {
        &self.las
    }

    pub fn into_parts(self) -> (Array2<f64>, LasConfig) {
        (self.matrix, self.las)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LasConfig::default();
        assert_eq!(config.iterations, 2000);
        assert_eq!(config.max_biclusters, 5);
        assert_eq!(config.stop_threshold_fraction, 0.01);
        assert_eq!(config.max_refine_rounds, 200);
        assert!(!config.dedup_restarts);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_budgets() {
        let mut config = LasConfig::default();
        config.iterations = 0;
        assert!(config.validate().is_err());

        let mut config = LasConfig::default();
        config.max_biclusters = 0;
        assert!(config.validate().is_err());

        let mut config = LasConfig::default();
        config.max_refine_rounds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = LasConfig::default();
        config.stop_threshold_fraction = -0.5;
        assert!(config.validate().is_err());

        config.stop_threshold_fraction = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_binary_config_requires_matrix_path() {
        let args = vec!["target/debug/las_bicluster".to_string()];
        assert!(Config::new(args.into_iter()).is_err());
    }
}
