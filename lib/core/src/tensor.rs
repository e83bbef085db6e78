use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A dense 2-D tensor of floating point numbers, stored row-major
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tensor {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Tensor {
    /// Create a tensor from row-major data, validating the element count
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::ShapeMismatch {
                expected_rows: rows,
                expected_cols: cols,
                actual_rows: 1,
                actual_cols: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a tensor from nested rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(Error::ShapeMismatch {
                    expected_rows: n_rows,
                    expected_cols: n_cols,
                    actual_rows: n_rows,
                    actual_cols: row.len(),
                });
            }
            data.extend_from_slice(&row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Feature width of this tensor (columns contribute to the
    /// threshold normalization, rows do not)
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Replace every NaN element with zero, in place
    pub fn nan_to_zero(&mut self) {
        for x in &mut self.data {
            if x.is_nan() {
                *x = 0.0;
            }
        }
    }

    /// L1 (Manhattan) distance over the flattened elements
    ///
    /// Accumulates in f64 so wide tensors do not lose mass to rounding.
    /// Shapes are validated at load time; mismatched shapes here are a bug.
    #[inline]
    pub fn l1_distance(&self, other: &Tensor) -> f64 {
        debug_assert_eq!(self.shape(), other.shape());
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs() as f64)
            .sum()
    }
}
