use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid mode: {0} (select mode from c/g/cm)")]
    InvalidMode(String),

    #[error("Shape mismatch: expected {expected_rows}x{expected_cols}, got {actual_rows}x{actual_cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("Missing column in feature store: {0}")]
    MissingColumn(String),

    #[error("Column {column} has {actual} records, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Sample size {requested} exceeds available records {available}")]
    Sampling { requested: usize, available: usize },

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}
