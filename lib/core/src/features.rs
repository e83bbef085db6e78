use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{FeatureStore, RawTensor};
use crate::tensor::Tensor;

/// Feature encoding mode
///
/// `Char` and `Gram` share the flat single-tensor layout; `Cm` carries the
/// structural triple-tensor layout derived from a covariance-model alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "c")]
    Char,
    #[serde(rename = "g")]
    Gram,
}

impl Mode {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cm => "cm",
            Mode::Char => "c",
            Mode::Gram => "g",
        }
    }

    /// True for the structural triple-tensor layout
    #[inline]
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Mode::Cm)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cm" => Ok(Mode::Cm),
            "c" => Ok(Mode::Char),
            "g" => Ok(Mode::Gram),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loaded, shape-validated dataset in one of the two feature layouts
///
/// Records are identified by index only. All records share identical tensor
/// shapes; this is enforced at load time so the distance engine can stay
/// infallible.
#[derive(Debug, Clone)]
pub enum FeatureSet {
    /// Structural ("cm") layout: traceback states, emission scores,
    /// pairing probabilities
    Structural {
        tr: Vec<Tensor>,
        s: Vec<Tensor>,
        p: Vec<Tensor>,
    },
    /// Flat ("c"/"g") layout: one tensor per record
    Flat { data: Vec<Tensor> },
}

impl FeatureSet {
    /// Load a feature set from a columnar store under the given mode.
    ///
    /// Validates column presence, per-column record counts, and shape
    /// consistency across records. NaN values in the traceback column are
    /// replaced with zero; the other columns are taken as-is.
    pub fn load(store: FeatureStore, mode: Mode) -> Result<Self> {
        match mode {
            Mode::Cm => {
                let tr_raw = store.tr.ok_or_else(|| Error::MissingColumn("tr".into()))?;
                let s_raw = store.s.ok_or_else(|| Error::MissingColumn("s".into()))?;
                let p_raw = store.p.ok_or_else(|| Error::MissingColumn("p".into()))?;

                let n = tr_raw.len();
                for (name, len) in [("s", s_raw.len()), ("p", p_raw.len())] {
                    if len != n {
                        return Err(Error::ColumnLength {
                            column: name.to_string(),
                            expected: n,
                            actual: len,
                        });
                    }
                }

                let mut tr = load_column(tr_raw)?;
                for t in &mut tr {
                    t.nan_to_zero();
                }
                let s = load_column(s_raw)?;
                let p = load_column(p_raw)?;
                Ok(FeatureSet::Structural { tr, s, p })
            }
            Mode::Char | Mode::Gram => {
                let raw = store
                    .data
                    .ok_or_else(|| Error::MissingColumn("data".into()))?;
                let data = load_column(raw)?;
                Ok(FeatureSet::Flat { data })
            }
        }
    }

    /// Number of records in the dataset
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            FeatureSet::Structural { tr, .. } => tr.len(),
            FeatureSet::Flat { data } => data.len(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total feature width used to normalize the neighbor threshold:
    /// the sum of the three tensor widths in structural mode, or the single
    /// tensor width in flat mode.
    #[must_use]
    pub fn column_count(&self) -> usize {
        match self {
            FeatureSet::Structural { tr, s, p } => {
                let tr_cols = tr.first().map_or(0, Tensor::cols);
                let s_cols = s.first().map_or(0, Tensor::cols);
                let p_cols = p.first().map_or(0, Tensor::cols);
                tr_cols + s_cols + p_cols
            }
            FeatureSet::Flat { data } => data.first().map_or(0, Tensor::cols),
        }
    }

    /// L1 distance between two records
    ///
    /// Structural mode sums the element-wise absolute differences across the
    /// three tensor pairs; flat mode uses the single tensor. No normalization
    /// happens here, the threshold carries it.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        match self {
            FeatureSet::Structural { tr, s, p } => {
                tr[i].l1_distance(&tr[j]) + s[i].l1_distance(&s[j]) + p[i].l1_distance(&p[j])
            }
            FeatureSet::Flat { data } => data[i].l1_distance(&data[j]),
        }
    }
}

/// Convert one raw column into validated tensors sharing a single shape
fn load_column(raw: Vec<RawTensor>) -> Result<Vec<Tensor>> {
    let mut tensors = Vec::with_capacity(raw.len());
    let mut reference: Option<(usize, usize)> = None;
    for rows in raw {
        let tensor = Tensor::from_rows(rows)?;
        match reference {
            None => reference = Some(tensor.shape()),
            Some((ref_rows, ref_cols)) if tensor.shape() != (ref_rows, ref_cols) => {
                return Err(Error::ShapeMismatch {
                    expected_rows: ref_rows,
                    expected_cols: ref_cols,
                    actual_rows: tensor.rows(),
                    actual_cols: tensor.cols(),
                });
            }
            Some(_) => {}
        }
        tensors.push(tensor);
    }
    Ok(tensors)
}
