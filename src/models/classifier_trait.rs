use ndarray::Array2;

use crate::error::ModelError;

/// A small trait abstraction for binary classifiers. This centralizes the
/// train/score contract in the `models` module so implementations can live
/// next to model code, and lets callers hold a `Box<dyn BinaryClassifier>`
/// without naming a concrete model.
pub trait BinaryClassifier {
    /// Fit the model. `y` uses the crate convention (1 for positive, 0 for
    /// negative); one label per row of `x`.
    fn fit(&mut self, x: &Array2<f32>, y: &[u8]) -> Result<(), ModelError>;

    /// Predict probabilities of the positive class, one per row of `x`,
    /// each in `[0, 1]`.
    fn predict_proba(&self, x: &Array2<f32>) -> Result<Vec<f32>, ModelError>;

    /// Predict hard {0, 1} labels, one per row of `x`.
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<u8>, ModelError>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
