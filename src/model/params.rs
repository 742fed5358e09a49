//! Trained logistic-regression parameters

use crate::features::Feature;
use anyhow::{ensure, Result};
use serde::Deserialize;

/// Coefficient and training-set standardization statistics for one
/// continuous feature
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ContinuousParams {
    pub coefficient: f64,
    pub mean: f64,
    pub std_dev: f64,
}

/// Full parameter set of the trained T2 -> T3 fit.
///
/// One explicit field per feature; the molar-class coefficient is separate
/// because that feature enters the score unstandardized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelParams {
    pub intercept: f64,
    pub overjet: ContinuousParams,
    pub post_ant_ratio: ContinuousParams,
    pub arch_width: ContinuousParams,
    pub art_pog: ContinuousParams,
    pub leeway_space: ContinuousParams,
    pub class_ii_coefficient: f64,
}

impl ModelParams {
    /// Per-feature parameters in `Feature::CONTINUOUS` order
    pub fn continuous(&self) -> [(Feature, &ContinuousParams); 5] {
        [
            (Feature::Overjet, &self.overjet),
            (Feature::PostAntRatio, &self.post_ant_ratio),
            (Feature::ArchWidth, &self.arch_width),
            (Feature::ArtPog, &self.art_pog),
            (Feature::LeewaySpace, &self.leeway_space),
        ]
    }

    /// Coefficient for one feature
    pub fn coefficient(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Overjet => self.overjet.coefficient,
            Feature::PostAntRatio => self.post_ant_ratio.coefficient,
            Feature::ArchWidth => self.arch_width.coefficient,
            Feature::ArtPog => self.art_pog.coefficient,
            Feature::LeewaySpace => self.leeway_space.coefficient,
            Feature::MolarClass => self.class_ii_coefficient,
        }
    }

    /// Check that all parameters are usable for scoring
    pub fn validate(&self) -> Result<()> {
        ensure!(self.intercept.is_finite(), "intercept must be finite");
        ensure!(
            self.class_ii_coefficient.is_finite(),
            "class coefficient must be finite"
        );

        for (feature, p) in self.continuous() {
            ensure!(
                p.coefficient.is_finite() && p.mean.is_finite() && p.std_dev.is_finite(),
                "non-finite parameters for `{}`",
                feature.column()
            );
            ensure!(
                p.std_dev > 0.0,
                "standard deviation for `{}` must be positive",
                feature.column()
            );
        }

        Ok(())
    }
}

impl Default for ModelParams {
    /// Parameters of the trained fit
    fn default() -> Self {
        Self {
            intercept: -1.0573,
            overjet: ContinuousParams {
                coefficient: 1.2704,
                mean: 3.176,
                std_dev: 1.576033,
            },
            post_ant_ratio: ContinuousParams {
                coefficient: -0.7261,
                mean: 0.654154,
                std_dev: 0.035208,
            },
            arch_width: ContinuousParams {
                coefficient: -0.8129,
                mean: 38.553571,
                std_dev: 3.172536,
            },
            art_pog: ContinuousParams {
                coefficient: -0.3036,
                mean: 85.498626,
                std_dev: 4.377117,
            },
            leeway_space: ContinuousParams {
                coefficient: -0.3844,
                mean: 2.742571,
                std_dev: 1.263946,
            },
            class_ii_coefficient: 0.9187,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_validate() {
        assert!(ModelParams::default().validate().is_ok());
    }

    #[test]
    fn test_continuous_order_matches_feature_order() {
        let params = ModelParams::default();
        let features: Vec<Feature> = params.continuous().iter().map(|(f, _)| *f).collect();
        assert_eq!(features, Feature::CONTINUOUS.to_vec());
    }

    #[test]
    fn test_coefficient_lookup() {
        let params = ModelParams::default();
        assert_eq!(params.coefficient(Feature::Overjet), 1.2704);
        assert_eq!(params.coefficient(Feature::MolarClass), 0.9187);
    }

    #[test]
    fn test_zero_std_rejected() {
        let mut params = ModelParams::default();
        params.post_ant_ratio.std_dev = 0.0;

        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("post/ant"));
    }

    #[test]
    fn test_non_finite_coefficient_rejected() {
        let mut params = ModelParams::default();
        params.art_pog.coefficient = f64::NAN;
        assert!(params.validate().is_err());

        let mut params = ModelParams::default();
        params.intercept = f64::INFINITY;
        assert!(params.validate().is_err());
    }
}
