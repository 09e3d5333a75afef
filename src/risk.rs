//! Risk-level banding of a predicted probability, used when reporting
//! individual predictions to a caller.

use serde::{Deserialize, Serialize};

/// Coarse risk band derived from the positive-class probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Band a probability: below 0.3 is low, below 0.7 is moderate,
    /// everything else is high.
    pub fn from_probability(probability: f32) -> Self {
        if probability < 0.3 {
            RiskLevel::Low
        } else if probability < 0.7 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    /// Display label for the band.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Moderate => "MODERATE RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }
}
