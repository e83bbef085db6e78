//! # seqneff Core
//!
//! Core library for the seqneff sample-weighting engine.
//!
//! This crate provides the data model and the distance engine:
//!
//! - [`Tensor`] - Dense 2-D feature tensor with L1 distance
//! - [`FeatureStore`] - Columnar numeric store handed in by the dataset pipeline
//! - [`FeatureSet`] - Shape-validated dataset in structural or flat layout
//! - [`Mode`] - Feature encoding tag (`cm`, `c`, `g`)
//!
//! ## Example
//!
//! ```rust
//! use seqneff_core::{FeatureSet, FeatureStore, Mode};
//!
//! let store = FeatureStore {
//!     data: Some(vec![
//!         vec![vec![0.0, 1.0]],
//!         vec![vec![1.0, 0.0]],
//!     ]),
//!     ..Default::default()
//! };
//!
//! let features = FeatureSet::load(store, Mode::Char).unwrap();
//! assert_eq!(features.len(), 2);
//! assert_eq!(features.distance(0, 1), 2.0);
//! ```

pub mod error;
pub mod features;
pub mod store;
pub mod tensor;

pub use error::{Error, Result};
pub use features::{FeatureSet, Mode};
pub use store::{FeatureStore, RawTensor};
pub use tensor::Tensor;
