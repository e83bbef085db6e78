use serde::{Deserialize, Serialize};

/// Configuration for one weighting run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightingConfig {
    /// Fraction of the feature width below which two records count as
    /// neighbors: `threshold_abs = column_count * threshold_fraction`
    pub threshold_fraction: f64,

    /// Datasets smaller than this are compared exhaustively; larger ones
    /// fall back to uniform subsampling
    pub sample_size_threshold: usize,

    /// Fraction of the dataset sampled per record once the threshold is
    /// exceeded
    pub sample_ratio_over_threshold: f64,

    /// Worker threads for the per-record distance fan-out
    pub worker_count: usize,

    /// Emit a progress observation every this many records (0 disables)
    pub progress_interval: usize,

    /// Seed for the subsampling RNG; exact (non-sampled) runs never touch it
    pub random_seed: u64,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            threshold_fraction: 0.1,
            sample_size_threshold: 10_000,
            sample_ratio_over_threshold: 0.05,
            worker_count: 4,
            progress_interval: 500,
            random_seed: 42,
        }
    }
}
