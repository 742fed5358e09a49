//! Logistic-regression scorer for Class II prediction

use crate::config::AppConfig;
use crate::features::{Feature, ScaledFeatures, ScaledTable, Standardizer};
use crate::model::params::ModelParams;
use crate::types::measurements::Measurements;
use crate::types::prediction::Prediction;
use anyhow::Result;
use tracing::debug;

/// Stateless scorer over the trained parameter tables.
///
/// Immutable after construction; hosts serving concurrent sessions can
/// share one instance by reference.
pub struct Scorer {
    params: ModelParams,
    standardizer: Standardizer,
}

impl Scorer {
    /// Create a scorer from application configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_params(config.model.clone())
    }

    /// Create a scorer from an explicit parameter set
    pub fn with_params(params: ModelParams) -> Result<Self> {
        params.validate()?;
        let standardizer = Standardizer::new(&params);
        Ok(Self {
            params,
            standardizer,
        })
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Score one measurement record.
    ///
    /// Standardizes the continuous features, accumulates the linear score
    /// over all six features, and maps it through the sigmoid.
    pub fn predict(&self, measurements: &Measurements) -> Prediction {
        let scaled = self.standardizer.scale(measurements);
        let logit = self.logit(&scaled);
        let probability = sigmoid(logit);

        debug!(logit, probability, "scored measurement record");

        Prediction::new(logit, probability)
    }

    /// Standardized feature vector for one record
    pub fn scaled_features(&self, measurements: &Measurements) -> ScaledFeatures {
        self.standardizer.scale(measurements)
    }

    /// Standardized features rendered as a two-column table
    pub fn scaled_table(&self, measurements: &Measurements) -> ScaledTable {
        self.standardizer.scale(measurements).to_table()
    }

    fn logit(&self, scaled: &ScaledFeatures) -> f64 {
        let mut logit = self.params.intercept;
        for feature in Feature::ALL {
            logit += scaled.get(feature) * self.params.coefficient(feature);
        }
        logit
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
