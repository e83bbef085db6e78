//! # seqneff Weighting
//!
//! Weighting scheduler for the seqneff sample-weighting engine.
//!
//! For every record in a [`FeatureSet`](seqneff_core::FeatureSet) the
//! scheduler samples candidate neighbors, counts near-duplicates under an
//! L1 threshold via a parallel worker pool, and derives
//! `weight = 1 / n_neighbor`. The sum of all weights is the dataset's
//! effective sample size (Neff), the bias-corrected count of independent
//! observations.
//!
//! ## Example
//!
//! ```rust
//! use seqneff_core::{FeatureSet, FeatureStore, Mode};
//! use seqneff_weighting::{compute_weights, VecSink, WeightingConfig};
//!
//! let store = FeatureStore {
//!     data: Some(vec![
//!         vec![vec![0.0, 0.0]],
//!         vec![vec![0.0, 0.0]],
//!         vec![vec![5.0, 5.0]],
//!     ]),
//!     ..Default::default()
//! };
//! let features = FeatureSet::load(store, Mode::Char).unwrap();
//!
//! let mut sink = VecSink::new();
//! let summary = compute_weights(&features, &WeightingConfig::default(), &mut sink).unwrap();
//! assert_eq!(summary.weights, vec![0.5, 0.5, 1.0]);
//! assert_eq!(summary.n_effective, 2.0);
//! ```

pub mod config;
pub mod progress;
pub mod scheduler;

pub use config::WeightingConfig;
pub use progress::{LogSink, Progress, ProgressSink, VecSink};
pub use scheduler::{compute_weights, generate_weights, WeightSummary};
