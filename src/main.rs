/*
 * File: ./src/main.rs
 * Created Date: Thursday, June 12th 2025
 * Author: Zihan
 * -----
 * Last Modified: Friday, 13th June 2025 3:20:31 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

use std::env;
use std::process;

use chrono::Local;
use log::{info, LevelFilter};
use ndarray::Array2;
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;

use las_bicluster::config::Config;
use las_bicluster::{find_biclusters, LasConfig};

fn timestamp() -> String {
    // Get the current time
    Local::now().format("%H:%M:%S").to_string()
}

/// |N(0, 1)| noise rescaled into [0, 1] by its peak, plus a 5x5 block of
/// +2.0 in the top-left corner for the search to find.
fn demo_matrix() -> Array2<f64> {
    let size = 10;
    let mut noise = Array2::random((size, size), Normal::new(0.0, 1.0).unwrap()).mapv(f64::abs);
    let peak = noise.fold(0.0_f64, |acc, &v| acc.max(v));
    if peak > 0.0 {
        noise.mapv_inplace(|v| v / peak);
    }
    for i in 0..size / 2 {
        for j in 0..size / 2 {
            noise[[i, j]] += 2.0;
        }
    }
    noise
}

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let args: Vec<String> = env::args().collect();
    let (matrix, las_config) = if args.len() > 1 {
        let config = Config::new(args.into_iter()).unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
        config.into_parts()
    } else {
        info!(
            "[las] [{}] no matrix given, searching the synthetic demo matrix",
            timestamp()
        );
        (demo_matrix(), LasConfig::default())
    };

    info!(
        "[las] [{}] searching a {}x{} matrix, {} restarts per round",
        timestamp(),
        matrix.nrows(),
        matrix.ncols(),
        las_config.iterations
    );

    // the search deflates its copy; keep the original for the wrapper views
    let source = matrix.clone();
    let clusters = find_biclusters(matrix, las_config).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    info!(
        "[las] [{}] found {} bicluster(s)",
        timestamp(),
        clusters.len()
    );
    for cluster in &clusters {
        println!("{}", cluster);
        println!("{}", cluster.wrapper(&source));
    }
}
