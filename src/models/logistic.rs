use log::{debug, info};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::config::TrainConfig;
use crate::error::ModelError;
use crate::models::classifier_trait::BinaryClassifier;

/// Bounds applied to the linear score before exponentiation.
const SCORE_CLIP: f32 = 20.0;

/// Logistic link with the input clipped to `[-SCORE_CLIP, SCORE_CLIP]` so
/// `exp` cannot overflow. Clipping also keeps every output strictly inside
/// (0, 1).
fn sigmoid(score: f32) -> f32 {
    let score = score.clamp(-SCORE_CLIP, SCORE_CLIP);
    1.0 / ((-score).exp() + 1.0)
}

/// Weight vector and bias of a trained model. Present only after `fit`;
/// immutable between `fit` calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedParams {
    pub weights: Array1<f32>,
    pub bias: f32,
}

/// Logistic regression trained by full-batch gradient descent.
///
/// Parameters start at zero and are updated for exactly
/// `config.n_iters` iterations, so training is deterministic given fixed
/// data and hyperparameters. There is no regularization, shuffling, or
/// mini-batching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    config: TrainConfig,
    params: Option<FittedParams>,
}

impl LogisticRegression {
    pub fn new(config: TrainConfig) -> Self {
        LogisticRegression {
            config,
            params: None,
        }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Fitted weights and bias, or `None` before training.
    pub fn params(&self) -> Option<&FittedParams> {
        self.params.as_ref()
    }

    fn validate_training_input(x: &Array2<f32>, y: &[u8]) -> Result<(), ModelError> {
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(ModelError::EmptyInput);
        }
        if y.len() != x.nrows() {
            return Err(ModelError::LengthMismatch {
                expected: x.nrows(),
                found: y.len(),
            });
        }
        if let Some(&label) = y.iter().find(|&&label| label > 1) {
            return Err(ModelError::InvalidLabel(label));
        }
        Ok(())
    }

    /// Mean binary cross-entropy of `probabilities` against `targets`.
    /// Clipped sigmoid output is strictly inside (0, 1), so the logs are
    /// finite.
    fn mean_log_loss(probabilities: &Array1<f32>, targets: &Array1<f32>) -> f32 {
        let total: f32 = probabilities
            .iter()
            .zip(targets.iter())
            .map(|(&p, &t)| -(t * p.ln() + (1.0 - t) * (1.0 - p).ln()))
            .sum();
        total / probabilities.len() as f32
    }
}

impl BinaryClassifier for LogisticRegression {
    fn fit(&mut self, x: &Array2<f32>, y: &[u8]) -> Result<(), ModelError> {
        Self::validate_training_input(x, y)?;

        let n_samples = x.nrows();
        let n_features = x.ncols();
        let learning_rate = self.config.learning_rate;
        info!(
            "training logistic regression: {} samples, {} features, lr={}, iters={}",
            n_samples, n_features, learning_rate, self.config.n_iters
        );

        let targets: Array1<f32> = y.iter().map(|&label| label as f32).collect();
        let mut weights = Array1::<f32>::zeros(n_features);
        let mut bias = 0.0f32;
        let scale = 1.0 / n_samples as f32;

        for _ in 0..self.config.n_iters {
            let scores = x.dot(&weights) + bias;
            let probabilities = scores.mapv_into(sigmoid);
            let residuals = probabilities - &targets;

            // dw = X^T (p - y) / N, db = sum(p - y) / N
            let weight_gradient = x.t().dot(&residuals) * scale;
            let bias_gradient = residuals.sum() * scale;

            weights.scaled_add(-learning_rate, &weight_gradient);
            bias -= learning_rate * bias_gradient;
        }

        let final_probabilities = (x.dot(&weights) + bias).mapv_into(sigmoid);
        debug!(
            "training finished: final log loss {:.6}",
            Self::mean_log_loss(&final_probabilities, &targets)
        );

        self.params = Some(FittedParams { weights, bias });
        Ok(())
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Result<Vec<f32>, ModelError> {
        let params = self.params.as_ref().ok_or(ModelError::NotFitted)?;
        if x.ncols() != params.weights.len() {
            return Err(ModelError::ShapeMismatch {
                expected: params.weights.len(),
                found: x.ncols(),
            });
        }
        let scores = x.dot(&params.weights) + params.bias;
        Ok(scores.mapv_into(sigmoid).to_vec())
    }

    fn predict(&self, x: &Array2<f32>) -> Result<Vec<u8>, ModelError> {
        let probabilities = self.predict_proba(x)?;
        Ok(probabilities
            .iter()
            .map(|&p| if p >= 0.5 { 1 } else { 0 })
            .collect())
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}
