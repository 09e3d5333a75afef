//! cardio-classifiers: a from-scratch binary classifier for
//! cardiovascular-risk style tabular data.
//!
//! This crate provides a logistic-regression estimator trained by
//! fixed-budget batch gradient descent, and an evaluation module that
//! computes classification metrics, a full ROC curve with AUC, and an
//! automated overfitting/underfitting diagnosis. No machine-learning
//! framework is used; `ndarray` supplies the matrix and vector containers
//! and every metric is derived by hand.
//!
//! The design favors small, testable modules: callers hand the estimator
//! an already-scaled feature matrix and a {0, 1} label vector, and hand
//! the evaluator the resulting label/probability vectors. Form handling,
//! scaling, and persistence encoding live outside this crate; the fitted
//! model is `serde`-serializable so an outer layer can round-trip it.
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod risk;
