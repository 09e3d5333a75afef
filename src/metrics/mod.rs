//! Hand-derived evaluation metrics for binary classifiers.
//!
//! Everything here is a pure function over label/probability slices:
//! classification metrics and the confusion matrix in `classification`,
//! the ROC curve and AUC in `roc`, and the train-vs-test fit-quality
//! diagnosis in `diagnosis`.
pub mod classification;
pub mod diagnosis;
pub mod roc;

pub use classification::{
    accuracy, classification_report, confusion_matrix, f1_score, precision, recall, specificity,
    ConfusionMatrix, MetricsReport,
};
pub use diagnosis::{diagnose, diagnose_default, FitDiagnosis, FitStatus, Severity};
pub use roc::{compute_roc_curve, roc_auc, RocPoint};
