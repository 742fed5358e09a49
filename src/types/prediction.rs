//! Prediction output records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of scoring one measurement record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Unique prediction identifier
    pub prediction_id: String,

    /// Probability of Class II at T3 (0.0 - 1.0)
    pub probability: f64,

    /// Pre-sigmoid linear score
    pub logit: f64,

    /// Prediction generation timestamp
    pub timestamp: DateTime<Utc>,
}

impl Prediction {
    /// Create a new prediction record
    pub fn new(logit: f64, probability: f64) -> Self {
        Self {
            prediction_id: uuid::Uuid::new_v4().to_string(),
            probability,
            logit,
            timestamp: Utc::now(),
        }
    }

    /// Probability rendered as a percentage with two decimal places
    pub fn percent(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}
