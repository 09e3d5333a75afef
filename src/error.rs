use std::error::Error;
use std::fmt;

/// Custom error type for estimator and evaluation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// `predict`/`predict_proba` called before `fit`
    NotFitted,
    /// Feature matrix with zero rows or zero columns
    EmptyInput,
    /// Label (or prediction) vector length does not match the sample count
    LengthMismatch { expected: usize, found: usize },
    /// Feature-matrix width does not match the fitted weight vector
    ShapeMismatch { expected: usize, found: usize },
    /// Label outside the {0, 1} alphabet
    InvalidLabel(u8),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::NotFitted => {
                write!(f, "model is not trained: call fit before predicting")
            }
            ModelError::EmptyInput => {
                write!(f, "feature matrix must have at least one row and one column")
            }
            ModelError::LengthMismatch { expected, found } => write!(
                f,
                "label vector length {} does not match sample count {}",
                found, expected
            ),
            ModelError::ShapeMismatch { expected, found } => write!(
                f,
                "feature matrix has {} columns but the model was fitted with {}",
                found, expected
            ),
            ModelError::InvalidLabel(label) => {
                write!(f, "labels must be 0 or 1, found {}", label)
            }
        }
    }
}

impl Error for ModelError {}
