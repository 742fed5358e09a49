//! Class II Prediction Scorer
//!
//! Computes the probability of Class II malocclusion at T3 from T2
//! cephalometric measurements using a trained logistic-regression model.

pub mod config;
pub mod features;
pub mod model;
pub mod types;

pub use config::AppConfig;
pub use features::{Feature, ScaledFeatures, ScaledTable, Standardizer};
pub use model::params::ModelParams;
pub use model::scorer::Scorer;
pub use types::{
    measurements::{Measurements, MolarClass},
    prediction::Prediction,
};
