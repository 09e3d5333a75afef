//! Fit-quality diagnosis: a heuristic comparison of train and test
//! accuracy that flags generalization problems. This is not a formal
//! statistical test; the thresholds and recommendation lists are a fixed
//! contract.

use serde::{Deserialize, Serialize};

use crate::metrics::classification::MetricsReport;

/// Default train-minus-test accuracy gap above which the model is
/// considered overfit.
pub const DEFAULT_GAP_THRESHOLD: f32 = 0.05;

/// Accuracy floor: when both splits score below this, the model is
/// considered underfit.
const UNDERFIT_ACCURACY_FLOOR: f32 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStatus {
    Good,
    Overfitting,
    Underfitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    None,
    Mild,
    Moderate,
    High,
}

/// Outcome of comparing a train-split report against a test-split report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitDiagnosis {
    pub status: FitStatus,
    pub severity: Severity,
    /// Train accuracy minus test accuracy.
    pub train_test_gap: f32,
    pub explanation: String,
    pub recommendations: Vec<String>,
}

/// Diagnose over/underfitting from two metrics reports.
///
/// # Arguments
///
/// * `train_report` - Metrics computed on the training split.
/// * `test_report` - Metrics computed on the held-out split.
/// * `gap_threshold` - Accuracy gap above which the model is flagged as
///   overfitting (see [`DEFAULT_GAP_THRESHOLD`]).
pub fn diagnose(
    train_report: &MetricsReport,
    test_report: &MetricsReport,
    gap_threshold: f32,
) -> FitDiagnosis {
    let train_accuracy = train_report.accuracy;
    let test_accuracy = test_report.accuracy;
    let gap = train_accuracy - test_accuracy;

    if gap > gap_threshold {
        let severity = if gap > 0.15 {
            Severity::High
        } else if gap > 0.10 {
            Severity::Moderate
        } else {
            Severity::Mild
        };
        FitDiagnosis {
            status: FitStatus::Overfitting,
            severity,
            train_test_gap: gap,
            explanation: format!(
                "Training accuracy ({:.1}%) is substantially higher than test accuracy \
                 ({:.1}%): the model memorizes the training data instead of generalizing.",
                train_accuracy * 100.0,
                test_accuracy * 100.0
            ),
            recommendations: vec![
                "Add L2 regularization to the training objective".to_string(),
                "Collect more training data".to_string(),
                "Use cross-validation to tune hyperparameters".to_string(),
                "Reduce the number of features".to_string(),
            ],
        }
    } else if train_accuracy < UNDERFIT_ACCURACY_FLOOR && test_accuracy < UNDERFIT_ACCURACY_FLOOR {
        FitDiagnosis {
            status: FitStatus::Underfitting,
            severity: Severity::High,
            train_test_gap: gap,
            explanation: format!(
                "Both training accuracy ({:.1}%) and test accuracy ({:.1}%) are low: \
                 the model fails to capture the signal even on the data it was trained on.",
                train_accuracy * 100.0,
                test_accuracy * 100.0
            ),
            recommendations: vec![
                "Add more informative features".to_string(),
                "Increase the number of training iterations".to_string(),
                "Increase the learning rate".to_string(),
                "Try a more expressive model family".to_string(),
            ],
        }
    } else {
        FitDiagnosis {
            status: FitStatus::Good,
            severity: Severity::None,
            train_test_gap: gap,
            explanation: format!(
                "Training accuracy ({:.1}%) and test accuracy ({:.1}%) are close: \
                 the model generalizes well.",
                train_accuracy * 100.0,
                test_accuracy * 100.0
            ),
            recommendations: vec![
                "Keep the current configuration".to_string(),
                "Monitor performance on fresh data".to_string(),
            ],
        }
    }
}

/// [`diagnose`] with the default gap threshold of 0.05.
pub fn diagnose_default(
    train_report: &MetricsReport,
    test_report: &MetricsReport,
) -> FitDiagnosis {
    diagnose(train_report, test_report, DEFAULT_GAP_THRESHOLD)
}
