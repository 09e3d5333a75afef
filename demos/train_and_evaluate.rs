//! End-to-end walkthrough: draw a synthetic two-cluster dataset, train the
//! logistic-regression estimator, evaluate both splits, and diagnose the
//! fit quality.
//!
//! Run with `RUST_LOG=info cargo run --example train_and_evaluate`.

use anyhow::{Context, Result};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cardio_classifiers::config::TrainConfig;
use cardio_classifiers::metrics::{classification_report, diagnose_default};
use cardio_classifiers::models::{BinaryClassifier, LogisticRegression};
use cardio_classifiers::risk::RiskLevel;

/// Draw `n` samples per class around two cluster centers with uniform
/// noise. Features stand in for already-scaled numeric attributes.
fn synthetic_dataset(n_per_class: usize, rng: &mut StdRng) -> (Array2<f32>, Vec<u8>) {
    let centers = [(-1.0f32, -0.5f32), (1.0f32, 0.8f32)];
    let mut data = Vec::with_capacity(n_per_class * 2 * 2);
    let mut labels = Vec::with_capacity(n_per_class * 2);
    for (class, &(cx, cy)) in centers.iter().enumerate() {
        for _ in 0..n_per_class {
            data.push(cx + rng.gen_range(-0.8..0.8));
            data.push(cy + rng.gen_range(-0.8..0.8));
            labels.push(class as u8);
        }
    }
    let x = Array2::from_shape_vec((n_per_class * 2, 2), data)
        .expect("synthetic data has a consistent shape");
    (x, labels)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let (x_train, y_train) = synthetic_dataset(100, &mut rng);
    let (x_test, y_test) = synthetic_dataset(40, &mut rng);

    let mut model = LogisticRegression::new(TrainConfig::new(0.1, 2000));
    model
        .fit(&x_train, &y_train)
        .context("training the synthetic model")?;

    let train_probabilities = model.predict_proba(&x_train)?;
    let train_predictions = model.predict(&x_train)?;
    let test_probabilities = model.predict_proba(&x_test)?;
    let test_predictions = model.predict(&x_test)?;

    let train_report = classification_report(
        &y_train,
        &train_predictions,
        Some(train_probabilities.as_slice()),
    )?;
    let test_report = classification_report(
        &y_test,
        &test_predictions,
        Some(test_probabilities.as_slice()),
    )?;

    println!("----- Train split -----");
    println!("{:#?}", train_report);
    println!("----- Test split -----");
    println!("{:#?}", test_report);

    let diagnosis = diagnose_default(&train_report, &test_report);
    println!("----- Fit quality -----");
    println!("status: {:?} (severity {:?})", diagnosis.status, diagnosis.severity);
    println!("{}", diagnosis.explanation);
    for recommendation in &diagnosis.recommendations {
        println!("  - {}", recommendation);
    }

    println!("----- Sample predictions -----");
    for (probability, truth) in test_probabilities.iter().zip(y_test.iter()).take(5) {
        println!(
            "p={:.3} -> {} (label {})",
            probability,
            RiskLevel::from_probability(*probability).label(),
            truth
        );
    }

    Ok(())
}
