//! # seqneff
//!
//! Effective-sample-size reweighting for biological sequence feature sets.
//!
//! Redundant or near-duplicate records bias downstream statistical training.
//! seqneff assigns every record a weight inversely proportional to the local
//! density of similar records, so that a cluster of near-duplicates counts as
//! partial evidence rather than as independent observations. The sum of all
//! weights is the dataset's effective sample size (Neff).
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install seqneff
//! seqneff --input features.json --output weights.json --mode cm
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use seqneff::prelude::*;
//!
//! // Two near-duplicate records and one distinct record, flat encoding
//! let store = FeatureStore {
//!     data: Some(vec![
//!         vec![vec![0.0, 0.0]],
//!         vec![vec![0.0, 0.0]],
//!         vec![vec![5.0, 5.0]],
//!     ]),
//!     ..Default::default()
//! };
//!
//! let mut sink = VecSink::new();
//! let summary = generate_weights(store, "c", &WeightingConfig::default(), &mut sink).unwrap();
//! assert_eq!(summary.weights, vec![0.5, 0.5, 1.0]);
//! assert_eq!(summary.n_effective, 2.0);
//! ```
//!
//! ## Crate Structure
//!
//! seqneff is composed of two internal crates:
//!
//! - [`seqneff-core`](https://docs.rs/seqneff-core) - Feature tensors, the
//!   columnar store contract, and the L1 distance engine
//! - [`seqneff-weighting`](https://docs.rs/seqneff-weighting) - The weighting
//!   scheduler: neighbor sampling, parallel distance fan-out, progress and
//!   Neff accounting

// Re-export core types
pub use seqneff_core::{
    Error, FeatureSet, FeatureStore, Mode, RawTensor, Result, Tensor,
};

// Re-export the weighting engine
pub use seqneff_weighting::{
    compute_weights, generate_weights, LogSink, Progress, ProgressSink, VecSink, WeightSummary,
    WeightingConfig,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compute_weights, generate_weights, Error, FeatureSet, FeatureStore, LogSink, Mode,
        Progress, ProgressSink, Result, Tensor, VecSink, WeightSummary, WeightingConfig,
    };
}
