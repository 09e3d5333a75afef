//! ROC curve and area-under-curve computation.
//!
//! The curve is built by a single sweep over the samples sorted by
//! descending predicted probability (stable sort, so ties keep their
//! original relative order) and the area is integrated with the
//! trapezoid rule. Known limitation: when the label vector contains only
//! one class, the curve is undefined and `roc_auc` returns 0.0 instead of
//! failing, matching the division guard of the metric's definition here.

use serde::{Deserialize, Serialize};

/// One point on the ROC curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    /// The classification threshold.
    pub threshold: f32,
    /// True-positive rate for all predictions with probability >= threshold.
    pub true_positive_rate: f32,
    /// False-positive rate for all predictions with probability >= threshold.
    pub false_positive_rate: f32,
}

#[derive(Debug)]
struct ThresholdCounts {
    threshold: f32,
    true_positives: u64,
    false_positives: u64,
}

/// Count true and false positives contributed at each distinct
/// probability value. Samples with tied probabilities fall into one
/// bucket, so the resulting curve has a single point per threshold.
fn count_by_threshold(y_true: &[u8], y_proba: &[f32]) -> Vec<ThresholdCounts> {
    let mut order: Vec<usize> = (0..y_true.len()).collect();
    // stable sort: tied probabilities keep their original relative order
    order.sort_by(|&a, &b| y_proba[b].partial_cmp(&y_proba[a]).unwrap());

    let mut counts: Vec<ThresholdCounts> = Vec::new();
    for index in order {
        let probability = y_proba[index];
        let positive = u64::from(y_true[index] == 1);
        match counts.last_mut() {
            Some(last) if last.threshold == probability => {
                last.true_positives += positive;
                last.false_positives += 1 - positive;
            }
            _ => counts.push(ThresholdCounts {
                threshold: probability,
                true_positives: positive,
                false_positives: 1 - positive,
            }),
        }
    }
    counts
}

/// Compute the ROC curve: false-positive rate on the x axis against
/// true-positive rate on the y axis, one point per distinct threshold,
/// starting from the (0, 0) origin with a dummy threshold of 1.0.
///
/// # Panics
///
/// Panics if the two slices have different lengths.
pub fn compute_roc_curve(y_true: &[u8], y_proba: &[f32]) -> Vec<RocPoint> {
    assert_eq!(
        y_true.len(),
        y_proba.len(),
        "label and probability arrays must have equal lengths"
    );
    let count_positives = y_true.iter().filter(|&&label| label == 1).count() as u64;
    let count_negatives = y_true.len() as u64 - count_positives;

    let mut counts = count_by_threshold(y_true, y_proba);
    for i in 1..counts.len() {
        counts[i].true_positives += counts[i - 1].true_positives;
        counts[i].false_positives += counts[i - 1].false_positives;
    }

    let mut roc_curve = vec![RocPoint {
        threshold: 1.0,
        true_positive_rate: 0.0,
        false_positive_rate: 0.0,
    }];
    for point in &counts {
        roc_curve.push(RocPoint {
            threshold: point.threshold,
            true_positive_rate: point.true_positives as f32 / count_positives as f32,
            false_positive_rate: point.false_positives as f32 / count_negatives as f32,
        });
    }
    roc_curve
}

/// Area under the ROC curve via the trapezoid rule.
///
/// Returns 0.0 when `y_true` holds a single class (the curve is undefined
/// without both positives and negatives).
pub fn roc_auc(y_true: &[u8], y_proba: &[f32]) -> f32 {
    let count_positives = y_true.iter().filter(|&&label| label == 1).count();
    if count_positives == 0 || count_positives == y_true.len() {
        return 0.0;
    }
    let roc_curve = compute_roc_curve(y_true, y_proba);
    (0..roc_curve.len() - 1)
        .map(|i| {
            let left = &roc_curve[i];
            let right = &roc_curve[i + 1];
            let y_average = (left.true_positive_rate + right.true_positive_rate) / 2.0;
            let dx = right.false_positive_rate - left.false_positive_rate;
            y_average * dx
        })
        .sum()
}
