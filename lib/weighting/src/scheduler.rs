use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use seqneff_core::{Error, FeatureSet, FeatureStore, Mode, Result};

use crate::config::WeightingConfig;
use crate::progress::{Progress, ProgressSink};

/// Output of one weighting run
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSummary {
    /// One weight per record, in record order; `0 < weight <= 1`
    pub weights: Vec<f64>,
    /// Record count of the input dataset
    pub n_total: usize,
    /// Effective sample size: the sum of all weights, accumulated in
    /// record-index order
    pub n_effective: f64,
}

/// Parse the mode tag, load the feature set, and compute weights.
///
/// The mode is validated before the store is touched, so an unknown tag
/// fails without any loading or distance work. Mirrors the upstream
/// operation boundary: callers hand in the columnar store and a raw tag.
pub fn generate_weights(
    store: FeatureStore,
    mode: &str,
    config: &WeightingConfig,
    sink: &mut dyn ProgressSink,
) -> Result<WeightSummary> {
    let mode: Mode = mode.parse()?;
    let features = FeatureSet::load(store, mode)?;
    compute_weights(&features, config, sink)
}

/// Compute one weight per record and the aggregate effective count.
///
/// For each record the scheduler samples candidate neighbors, fans the
/// distance computations out over a worker pool built once for the whole
/// run, counts near-duplicates under a strict `<` threshold, and writes
/// `1 / n_neighbor` to the output slot before moving on. Only the neighbor
/// count for the in-flight record is ever held, never a distance list.
///
/// Exact runs (`sample_size == n_total`) compare against every other record
/// and never consume the RNG; subsampled runs draw from a single seeded
/// generator in record order, so a fixed seed reproduces the run.
pub fn compute_weights(
    features: &FeatureSet,
    config: &WeightingConfig,
    sink: &mut dyn ProgressSink,
) -> Result<WeightSummary> {
    let n_total = features.len();
    if n_total == 0 {
        return Ok(WeightSummary {
            weights: Vec::new(),
            n_total: 0,
            n_effective: 0.0,
        });
    }

    let threshold_abs = features.column_count() as f64 * config.threshold_fraction;
    let sample_size = if n_total < config.sample_size_threshold {
        n_total
    } else {
        ((n_total as f64 * config.sample_ratio_over_threshold).round() as usize).max(1)
    };
    // Clamping would silently change the statistical semantics, so an
    // oversized sample is an error instead.
    if sample_size > n_total {
        return Err(Error::Sampling {
            requested: sample_size,
            available: n_total,
        });
    }
    let exact = sample_size == n_total;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_count)
        .build()
        .map_err(|e| Error::WorkerPool(e.to_string()))?;

    let mut rng = StdRng::seed_from_u64(config.random_seed);
    let mut weights = Vec::with_capacity(n_total);
    let mut n_effective = 0.0f64;
    let mut candidates: Vec<usize> = Vec::with_capacity(sample_size.saturating_sub(1));
    let mut window_start = Instant::now();

    for i in 0..n_total {
        candidates.clear();
        if exact {
            candidates.extend((0..n_total).filter(|&j| j != i));
        } else {
            // Draw without replacement from {0..n_total-1} \ {i}: sample
            // over a range one short, then shift indices at or above i.
            let draw = rand::seq::index::sample(&mut rng, n_total - 1, sample_size - 1);
            candidates.extend(draw.iter().map(|j| if j >= i { j + 1 } else { j }));
        }

        let near = pool.install(|| {
            candidates
                .par_iter()
                .filter(|&&j| features.distance(i, j) < threshold_abs)
                .count()
        });

        // The record is always its own neighbor.
        let n_neighbor = 1 + near;
        let weight = 1.0 / n_neighbor as f64;
        weights.push(weight);
        n_effective += weight;

        if config.progress_interval > 0 && i > 0 && i % config.progress_interval == 0 {
            let window = window_start.elapsed().as_secs_f64();
            let remaining = (n_total - i) as f64 * window / config.progress_interval as f64;
            sink.report(&Progress {
                processed: i,
                total: n_total,
                sample_size,
                estimated_remaining: Duration::from_secs_f64(remaining),
            });
            window_start = Instant::now();
        }
    }

    Ok(WeightSummary {
        weights,
        n_total,
        n_effective,
    })
}
