//! `nsc`: compare Normalized Spectral Clustering with K-means on generated
//! Gaussian blobs.
//!
//! ```bash
//! nsc 200 4                       # N = 200 points from 4 blobs, k = 4
//! nsc 0 0 --rand --seed 7         # N, k drawn; k used comes from the eigengap
//! nsc 150 3 --output-dir out --report-json out/report.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::error;
use nsc_pipeline::config::{DEFAULT_EPSILON, DEFAULT_MAX_ITER, MAX_K_2D, MAX_K_3D, MAX_N_2D, MAX_N_3D};
use nsc_pipeline::{run, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "nsc",
    version,
    about = "Normalized Spectral Clustering vs K-means on Gaussian blobs",
    long_about = None
)]
struct Args {
    /// Number of points (n > k).
    n: usize,

    /// Number of clusters (k >= 1).
    k: usize,

    /// Draw n and k at random and pick the k used with the eigengap heuristic.
    #[arg(long = "rand", default_value_t = false)]
    random: bool,

    /// Point dimension. Drawn from {2, 3} when omitted.
    #[arg(long)]
    dimension: Option<usize>,

    /// Seed for data generation and K-means++.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Lloyd iteration cap.
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Eigensolver convergence threshold.
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Eigensolver iteration cap (defaults to N).
    #[arg(long)]
    eigen_max_iter: Option<usize>,

    /// Directory for data.txt and clusters.txt.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Write the run report as JSON.
    #[arg(long, value_name = "FILE")]
    report_json: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    println!(
        "Maximum capacity for dimension 2: n = {}, k = {}\n\
         Maximum capacity for dimension 3: n = {}, k = {}\n",
        MAX_N_2D, MAX_K_2D, MAX_N_3D, MAX_K_3D
    );

    let config = RunConfig {
        n: args.n,
        k: args.k,
        dimension: args.dimension,
        random: args.random,
        seed: args.seed,
        max_iter: args.max_iter,
        epsilon: args.epsilon,
        eigen_max_iterations: args.eigen_max_iter,
        output_dir: args.output_dir,
        report_json: args.report_json,
    };

    match run(&config) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            error!("{}", e);
            eprintln!("nsc: {}", e);
            std::process::exit(1);
        }
    }
}
