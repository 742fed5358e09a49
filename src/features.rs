//! Feature definitions and standardization for model scoring.
//!
//! The five continuous measurements are z-scored with the training-set
//! mean and standard deviation; the molar-class indicator passes through
//! unscaled. Feature order is fixed and matches the training data.

use crate::model::params::ModelParams;
use crate::types::measurements::Measurements;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Model features in scoring and table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Overjet,
    PostAntRatio,
    ArchWidth,
    ArtPog,
    LeewaySpace,
    MolarClass,
}

impl Feature {
    /// All features in the fixed scoring order
    pub const ALL: [Feature; 6] = [
        Feature::Overjet,
        Feature::PostAntRatio,
        Feature::ArchWidth,
        Feature::ArtPog,
        Feature::LeewaySpace,
        Feature::MolarClass,
    ];

    /// The five standardized features
    pub const CONTINUOUS: [Feature; 5] = [
        Feature::Overjet,
        Feature::PostAntRatio,
        Feature::ArchWidth,
        Feature::ArtPog,
        Feature::LeewaySpace,
    ];

    /// Column name used in the training data
    pub fn column(self) -> &'static str {
        match self {
            Feature::Overjet => "Overjet(11)",
            Feature::PostAntRatio => "post/ant",
            Feature::ArchWidth => "U6-6_cusptip",
            Feature::ArtPog => "art_pog",
            Feature::LeewaySpace => "U_leeway",
            Feature::MolarClass => "class_cat_T2",
        }
    }

    /// Human-readable label as shown on the clinical intake form
    pub fn label(self) -> &'static str {
        match self {
            Feature::Overjet => "Overjet (mm)",
            Feature::PostAntRatio => "Post/Ant Ratio",
            Feature::ArchWidth => "U6-6 Width (mm)",
            Feature::ArtPog => "Art-Pog (mm)",
            Feature::LeewaySpace => "Leeway Space (Mx, mm)",
            Feature::MolarClass => "Molar Classification",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Z-score scaler for a single continuous feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler {
    pub mean: f64,
    pub std_dev: f64,
}

impl StandardScaler {
    pub fn transform(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }

    pub fn inverse_transform(&self, z: f64) -> f64 {
        z * self.std_dev + self.mean
    }
}

/// Standardizer that transforms a measurement record into the scaled
/// feature vector expected by the model.
pub struct Standardizer {
    scalers: [StandardScaler; 5],
}

impl Standardizer {
    /// Build a standardizer from the trained model parameters
    pub fn new(params: &ModelParams) -> Self {
        let scalers = params.continuous().map(|(_, p)| StandardScaler {
            mean: p.mean,
            std_dev: p.std_dev,
        });
        Self { scalers }
    }

    /// Scale one measurement record.
    ///
    /// Continuous features are z-scored; the molar-class indicator is
    /// passed through unchanged.
    pub fn scale(&self, measurements: &Measurements) -> ScaledFeatures {
        let raw = measurements.continuous_values();
        let mut values = [0.0; 6];
        for (i, (x, scaler)) in raw.iter().zip(self.scalers.iter()).enumerate() {
            values[i] = scaler.transform(*x);
        }
        values[Feature::MolarClass as usize] = measurements.molar_class.indicator();
        ScaledFeatures { values }
    }

    /// Get the scaler for a continuous feature
    pub fn scaler(&self, feature: Feature) -> Option<&StandardScaler> {
        Feature::CONTINUOUS
            .iter()
            .position(|&f| f == feature)
            .map(|i| &self.scalers[i])
    }
}

/// Standardized feature vector in `Feature::ALL` order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledFeatures {
    values: [f64; 6],
}

impl ScaledFeatures {
    /// Scaled value for one feature
    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature as usize]
    }

    pub fn values(&self) -> &[f64; 6] {
        &self.values
    }

    /// Render as a two-column table, one row per feature
    pub fn to_table(&self) -> ScaledTable {
        let rows = Feature::ALL.map(|feature| ScaledRow::new(feature, self.get(feature)));
        ScaledTable { rows }
    }
}

/// One row of the scaled-feature table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledRow {
    pub feature: Feature,
    /// Scaled value rounded to three decimals
    pub value: f64,
}

impl ScaledRow {
    fn new(feature: Feature, value: f64) -> Self {
        let rounded = (value * 1000.0).round() / 1000.0;
        // collapse -0.0 so a tiny negative never renders as "-0.000"
        let value = if rounded == 0.0 { 0.0 } else { rounded };
        Self { feature, value }
    }

    /// Value formatted for display; the class indicator stays an integer
    pub fn formatted_value(&self) -> String {
        match self.feature {
            Feature::MolarClass => format!("{:.0}", self.value),
            _ => format!("{:.3}", self.value),
        }
    }
}

/// Two-column table of standardized feature values, fixed row order
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledTable {
    rows: [ScaledRow; 6],
}

impl ScaledTable {
    pub fn rows(&self) -> &[ScaledRow] {
        &self.rows
    }
}

impl fmt::Display for ScaledTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<13} {:>12}", "Feature", "Scaled Value")?;
        for row in &self.rows {
            writeln!(f, "{:<13} {:>12}", row.feature.column(), row.formatted_value())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::measurements::MolarClass;

    fn at_training_means() -> Measurements {
        Measurements::new(
            3.176,
            0.654154,
            38.553571,
            85.498626,
            2.742571,
            MolarClass::ClassII,
        )
    }

    #[test]
    fn test_scale_at_training_means_is_zero() {
        let standardizer = Standardizer::new(&ModelParams::default());
        let scaled = standardizer.scale(&at_training_means());

        for feature in Feature::CONTINUOUS {
            assert_eq!(scaled.get(feature), 0.0);
        }
        assert_eq!(scaled.get(Feature::MolarClass), 1.0);
    }

    #[test]
    fn test_standardization_round_trip() {
        let standardizer = Standardizer::new(&ModelParams::default());
        let m = Measurements::new(5.2, 0.61, 41.0, 88.3, 1.9, MolarClass::ClassI);
        let scaled = standardizer.scale(&m);

        for (feature, raw) in Feature::CONTINUOUS.iter().zip(m.continuous_values()) {
            let scaler = standardizer.scaler(*feature).unwrap();
            let back = scaler.inverse_transform(scaled.get(*feature));
            assert!((back - raw).abs() < 1e-9);
        }
    }

    #[test]
    fn test_no_scaler_for_class_indicator() {
        let standardizer = Standardizer::new(&ModelParams::default());
        assert!(standardizer.scaler(Feature::MolarClass).is_none());
        assert!(standardizer.scaler(Feature::Overjet).is_some());
    }

    #[test]
    fn test_table_row_order_and_formatting() {
        let standardizer = Standardizer::new(&ModelParams::default());
        let table = standardizer.scale(&at_training_means()).to_table();
        let rows = table.rows();

        let order: Vec<&str> = rows.iter().map(|r| r.feature.column()).collect();
        assert_eq!(
            order,
            vec![
                "Overjet(11)",
                "post/ant",
                "U6-6_cusptip",
                "art_pog",
                "U_leeway",
                "class_cat_T2"
            ]
        );

        for row in &rows[..5] {
            assert_eq!(row.formatted_value(), "0.000");
        }
        assert_eq!(rows[5].formatted_value(), "1");
    }

    #[test]
    fn test_table_rounds_to_three_decimals() {
        let row = ScaledRow::new(Feature::Overjet, 0.123456);
        assert_eq!(row.formatted_value(), "0.123");

        let row = ScaledRow::new(Feature::Overjet, -0.0004);
        assert_eq!(row.formatted_value(), "0.000");
    }

    #[test]
    fn test_table_display_has_headers() {
        let standardizer = Standardizer::new(&ModelParams::default());
        let rendered = standardizer.scale(&at_training_means()).to_table().to_string();

        let mut lines = rendered.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("Feature"));
        assert!(header.contains("Scaled Value"));
        assert_eq!(lines.count(), 6);
    }
}
