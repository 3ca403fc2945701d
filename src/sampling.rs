/**
 * File: ./src/sampling.rs
 * Created Date: Tuesday, June 10th 2025
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 12th June 2025 2:38:11 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
**/

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::LasConfig;

/// Retries per draw before a duplicate start is accepted anyway.
const DEDUP_RETRIES: usize = 8;

/// The random ingredients of one restart: submatrix dimensions and the
/// initial column set.
#[derive(Debug, Clone)]
pub struct Draw {
    pub k: usize,
    pub l: usize,
    pub cols: Vec<usize>,
}

/// Owns the RNG for a whole `run` call and produces restart draws.
///
/// k and l are uniform on [1, m/2] and [1, n/2]; the initial columns are
/// sampled without replacement from [0, n). With `dedup_restarts` a seen-set
/// of (k, sorted columns) keys filters repeated starts, bounded by
/// `DEDUP_RETRIES`; exhausting the budget hands back the last draw instead
/// of spinning.
pub struct RestartSampler {
    rng: StdRng,
    dedup: bool,
    seen: HashSet<(usize, Vec<usize>)>,
}

impl RestartSampler {
    pub fn new(config: &LasConfig) -> RestartSampler {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        RestartSampler {
            rng,
            dedup: config.dedup_restarts,
            seen: HashSet::new(),
        }
    }

    /// Forget the seen-set. Called between deflation rounds: the matrix has
    /// changed, so an already-tried start is worth trying again.
    pub fn reset(&mut self) {
        self.seen.clear();
    }

    pub fn draw(&mut self, rows: usize, cols: usize) -> Draw {
        let mut draw = self.draw_once(rows, cols);
        if !self.dedup {
            return draw;
        }

        for _ in 0..DEDUP_RETRIES {
            let mut key_cols = draw.cols.clone();
            key_cols.sort_unstable();
            if self.seen.insert((draw.k, key_cols)) {
                return draw;
            }
            draw = self.draw_once(rows, cols);
        }
        draw
    }

    fn draw_once(&mut self, rows: usize, cols: usize) -> Draw {
        let k = self.rng.random_range(1..=rows / 2);
        let l = self.rng.random_range(1..=cols / 2);
        let start = rand::seq::index::sample(&mut self.rng, cols, l).into_vec();
        Draw { k, l, cols: start }
    }
}
