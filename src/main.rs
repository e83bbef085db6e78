use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use seqneff_core::{FeatureSet, FeatureStore, Mode};
use seqneff_weighting::{compute_weights, LogSink, WeightingConfig};

/// Effective-sample-size reweighting for sequence feature sets
#[derive(Parser, Debug)]
#[command(name = "seqneff")]
#[command(about = "Compute per-record redundancy weights and Neff", long_about = None)]
struct Args {
    /// Path to the input feature store (JSON with tr/s/p or data columns)
    #[arg(short, long)]
    input: PathBuf,

    /// Path for the output weight report
    #[arg(short, long)]
    output: PathBuf,

    /// Feature encoding mode: cm, c, or g
    #[arg(short, long, default_value = "cm")]
    mode: String,

    /// Neighbor threshold as a fraction of the feature width
    #[arg(long, default_value_t = 0.1)]
    threshold: f64,

    /// Datasets below this size are compared exhaustively
    #[arg(long, default_value_t = 10_000)]
    sampling_threshold: usize,

    /// Per-record sample ratio once the sampling threshold is exceeded
    #[arg(long, default_value_t = 0.05)]
    sample_ratio: f64,

    /// Worker threads for the distance fan-out
    #[arg(long, default_value_t = 4)]
    workers: usize,

    /// Emit a progress line every N records
    #[arg(long, default_value_t = 500)]
    print_every: usize,

    /// Seed for the subsampling RNG
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Weight column plus summary statistics, persisted alongside the dataset
#[derive(Debug, Serialize)]
struct WeightReport {
    weight: Vec<f64>,
    n_total: usize,
    n_effective: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting seqneff v{}", env!("CARGO_PKG_VERSION"));

    // Reject an unknown mode tag before touching the input at all.
    let mode: Mode = args.mode.parse()?;

    let reader = BufReader::new(File::open(&args.input)?);
    let store: FeatureStore = serde_json::from_reader(reader)?;
    let features = FeatureSet::load(store, mode)?;

    match mode {
        Mode::Cm => info!("CM mode."),
        Mode::Char | Mode::Gram => info!("Char/Gram mode."),
    }
    info!("Records: {}", features.len());
    info!("Feature width: {}", features.column_count());

    let config = WeightingConfig {
        threshold_fraction: args.threshold,
        sample_size_threshold: args.sampling_threshold,
        sample_ratio_over_threshold: args.sample_ratio,
        worker_count: args.workers,
        progress_interval: args.print_every,
        random_seed: args.seed,
    };

    let mut sink = LogSink;
    let summary = compute_weights(&features, &config, &mut sink)?;

    info!(
        "Done: n_total = {}, n_effective = {:.4}",
        summary.n_total, summary.n_effective
    );

    let report = WeightReport {
        weight: summary.weights,
        n_total: summary.n_total,
        n_effective: summary.n_effective,
    };
    let writer = BufWriter::new(File::create(&args.output)?);
    serde_json::to_writer(writer, &report)?;

    info!("Weights written to {:?}", args.output);
    Ok(())
}
