//! Type definitions for the Class II prediction scorer

pub mod measurements;
pub mod prediction;

pub use measurements::{Measurements, MolarClass};
pub use prediction::Prediction;
