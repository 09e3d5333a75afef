use serde::{Deserialize, Serialize};

/// Hyperparameters for the logistic-regression estimator.
///
/// Both values are fixed for the life of a model instance. Training runs
/// for exactly `n_iters` full-batch gradient steps; there is no
/// convergence check or early stopping.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    /// Step size applied to the gradient on every iteration.
    pub learning_rate: f32,
    /// Number of full-batch gradient-descent iterations.
    pub n_iters: usize,
}

impl TrainConfig {
    pub fn new(learning_rate: f32, n_iters: usize) -> Self {
        Self {
            learning_rate,
            n_iters,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.005,
            n_iters: 3000,
        }
    }
}
