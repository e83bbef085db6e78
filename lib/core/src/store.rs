use serde::{Deserialize, Serialize};

/// Raw per-record tensor as nested rows, before shape validation
pub type RawTensor = Vec<Vec<f32>>;

/// Columnar feature store handed to the loader by the dataset-preparation
/// pipeline.
///
/// Structural ("cm") datasets populate `tr`/`s`/`p` with three equal-length
/// arrays of per-record tensors (traceback states, emission scores, pairing
/// probabilities). Flat ("c"/"g") datasets populate `data` with a single
/// array of one-hot or n-gram tensors. The core does not care how the store
/// was produced, only that the columns are present and shape-consistent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureStore {
    /// Traceback-state tensors, NaN allowed (replaced with 0 at load)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tr: Option<Vec<RawTensor>>,

    /// Emission-score tensors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<Vec<RawTensor>>,

    /// Pairing-probability tensors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<Vec<RawTensor>>,

    /// Flat-mode tensors (one-hot / n-gram encoding)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<RawTensor>>,
}
