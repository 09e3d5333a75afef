//! Threshold-based classification metrics.
//!
//! All functions take a true-label slice and a predicted-label slice of
//! equal length. Metrics with a zero denominator (no positive predictions,
//! no positive labels, and so on) return 0.0 rather than failing; that is
//! the documented edge-case policy, not an error condition.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::metrics::roc::roc_auc;

/// Counts of prediction outcomes. The four counts always sum to the
/// number of evaluated samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_positives: u64,
    pub true_negatives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
}

impl ConfusionMatrix {
    pub fn total(&self) -> u64 {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }
}

/// All classification metrics for one evaluation pass.
///
/// `roc_auc` is present only when probabilities were supplied to
/// [`classification_report`]; the hard-label metrics need none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub accuracy: f32,
    pub precision: f32,
    pub recall: f32,
    pub f1_score: f32,
    pub specificity: f32,
    pub roc_auc: Option<f32>,
    pub confusion_matrix: ConfusionMatrix,
}

fn assert_equal_lengths(y_true: &[u8], y_pred: &[u8]) {
    assert_eq!(
        y_true.len(),
        y_pred.len(),
        "label and prediction arrays must have equal lengths"
    );
}

/// Fraction of predictions equal to ground truth.
pub fn accuracy(y_true: &[u8], y_pred: &[u8]) -> f32 {
    assert_equal_lengths(y_true, y_pred);
    if y_true.is_empty() {
        return 0.0;
    }
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(truth, prediction)| truth == prediction)
        .count();
    correct as f32 / y_true.len() as f32
}

/// Count TP/TN/FP/FN for {0, 1} labels and predictions.
pub fn confusion_matrix(y_true: &[u8], y_pred: &[u8]) -> ConfusionMatrix {
    assert_equal_lengths(y_true, y_pred);
    let mut matrix = ConfusionMatrix {
        true_positives: 0,
        true_negatives: 0,
        false_positives: 0,
        false_negatives: 0,
    };
    for (&truth, &prediction) in y_true.iter().zip(y_pred.iter()) {
        match (truth, prediction) {
            (1, 1) => matrix.true_positives += 1,
            (0, 0) => matrix.true_negatives += 1,
            (0, 1) => matrix.false_positives += 1,
            _ => matrix.false_negatives += 1,
        }
    }
    matrix
}

/// Ratio of two counts, with the 0/0 case defined as 0.0.
fn safe_ratio(numerator: u64, denominator: u64) -> f32 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f32 / denominator as f32
    }
}

/// TP / (TP + FP); 0.0 when the model made no positive predictions.
pub fn precision(y_true: &[u8], y_pred: &[u8]) -> f32 {
    let matrix = confusion_matrix(y_true, y_pred);
    safe_ratio(
        matrix.true_positives,
        matrix.true_positives + matrix.false_positives,
    )
}

/// TP / (TP + FN); 0.0 when there are no positive labels.
pub fn recall(y_true: &[u8], y_pred: &[u8]) -> f32 {
    let matrix = confusion_matrix(y_true, y_pred);
    safe_ratio(
        matrix.true_positives,
        matrix.true_positives + matrix.false_negatives,
    )
}

/// TN / (TN + FP); 0.0 when there are no negative labels.
pub fn specificity(y_true: &[u8], y_pred: &[u8]) -> f32 {
    let matrix = confusion_matrix(y_true, y_pred);
    safe_ratio(
        matrix.true_negatives,
        matrix.true_negatives + matrix.false_positives,
    )
}

/// Harmonic mean of precision and recall; 0.0 when both are 0.
pub fn f1_score(y_true: &[u8], y_pred: &[u8]) -> f32 {
    let p = precision(y_true, y_pred);
    let r = recall(y_true, y_pred);
    if p + r == 0.0 {
        0.0
    } else {
        2.0 * p * r / (p + r)
    }
}

/// Assemble the full metrics report for one evaluation pass.
///
/// # Arguments
///
/// * `y_true` - Ground-truth {0, 1} labels.
/// * `y_pred` - Hard {0, 1} predictions, same length as `y_true`.
/// * `y_proba` - Optional positive-class probabilities; when supplied the
///   report includes ROC-AUC.
///
/// # Returns
///
/// A fresh [`MetricsReport`], or `ModelError::LengthMismatch` if either
/// input vector does not match `y_true` in length.
pub fn classification_report(
    y_true: &[u8],
    y_pred: &[u8],
    y_proba: Option<&[f32]>,
) -> Result<MetricsReport, ModelError> {
    if y_pred.len() != y_true.len() {
        return Err(ModelError::LengthMismatch {
            expected: y_true.len(),
            found: y_pred.len(),
        });
    }
    if let Some(probabilities) = y_proba {
        if probabilities.len() != y_true.len() {
            return Err(ModelError::LengthMismatch {
                expected: y_true.len(),
                found: probabilities.len(),
            });
        }
    }

    let matrix = confusion_matrix(y_true, y_pred);
    Ok(MetricsReport {
        accuracy: accuracy(y_true, y_pred),
        precision: precision(y_true, y_pred),
        recall: recall(y_true, y_pred),
        f1_score: f1_score(y_true, y_pred),
        specificity: specificity(y_true, y_pred),
        roc_auc: y_proba.map(|probabilities| roc_auc(y_true, probabilities)),
        confusion_matrix: matrix,
    })
}
