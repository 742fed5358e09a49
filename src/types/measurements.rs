//! Patient measurement records scored by the prediction model

use crate::features::Feature;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Molar classification observed at T2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MolarClass {
    ClassI,
    ClassII,
}

impl MolarClass {
    /// Indicator value entering the linear score (Class I = 0, Class II = 1)
    pub fn indicator(self) -> f64 {
        match self {
            MolarClass::ClassI => 0.0,
            MolarClass::ClassII => 1.0,
        }
    }

    /// Parse the 0/1 indicator used in the training data
    pub fn from_indicator(value: f64) -> Result<Self> {
        if value == 0.0 {
            Ok(MolarClass::ClassI)
        } else if value == 1.0 {
            Ok(MolarClass::ClassII)
        } else {
            bail!("molar class indicator must be 0 or 1, got {value}")
        }
    }
}

impl TryFrom<u8> for MolarClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MolarClass::ClassI),
            1 => Ok(MolarClass::ClassII),
            other => Err(format!("molar class indicator must be 0 or 1, got {other}")),
        }
    }
}

impl From<MolarClass> for u8 {
    fn from(class: MolarClass) -> u8 {
        match class {
            MolarClass::ClassI => 0,
            MolarClass::ClassII => 1,
        }
    }
}

impl fmt::Display for MolarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MolarClass::ClassI => write!(f, "Class I"),
            MolarClass::ClassII => write!(f, "Class II"),
        }
    }
}

/// One patient's T2 measurements, the input to a single scoring request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurements {
    /// Overjet in mm
    #[serde(alias = "Overjet(11)")]
    pub overjet: f64,

    /// Posterior/anterior facial height ratio
    #[serde(alias = "post/ant")]
    pub post_ant_ratio: f64,

    /// Upper intermolar width, cusp tip to cusp tip, in mm
    #[serde(alias = "U6-6_cusptip")]
    pub arch_width: f64,

    /// Articulare-pogonion distance in mm
    #[serde(alias = "art_pog")]
    pub art_pog: f64,

    /// Maxillary leeway space in mm
    #[serde(alias = "U_leeway")]
    pub leeway_space: f64,

    /// Molar classification at T2
    #[serde(alias = "class_cat_T2")]
    pub molar_class: MolarClass,
}

impl Measurements {
    pub fn new(
        overjet: f64,
        post_ant_ratio: f64,
        arch_width: f64,
        art_pog: f64,
        leeway_space: f64,
        molar_class: MolarClass,
    ) -> Self {
        Self {
            overjet,
            post_ant_ratio,
            arch_width,
            art_pog,
            leeway_space,
            molar_class,
        }
    }

    /// Build a record from raw name/value pairs keyed by training column name.
    ///
    /// Fails when any of the six recognized columns is absent or the class
    /// indicator is not exactly 0 or 1; no partial record is produced.
    pub fn from_named_values(values: &HashMap<String, f64>) -> Result<Self> {
        let get = |feature: Feature| -> Result<f64> {
            values
                .get(feature.column())
                .copied()
                .with_context(|| format!("missing feature `{}`", feature.column()))
        };

        let molar_class = MolarClass::from_indicator(get(Feature::MolarClass)?)
            .context("invalid `class_cat_T2` value")?;

        Ok(Self {
            overjet: get(Feature::Overjet)?,
            post_ant_ratio: get(Feature::PostAntRatio)?,
            arch_width: get(Feature::ArchWidth)?,
            art_pog: get(Feature::ArtPog)?,
            leeway_space: get(Feature::LeewaySpace)?,
            molar_class,
        })
    }

    /// The five continuous values in `Feature::CONTINUOUS` order
    pub fn continuous_values(&self) -> [f64; 5] {
        [
            self.overjet,
            self.post_ant_ratio,
            self.arch_width,
            self.art_pog,
            self.leeway_space,
        ]
    }
}

impl Default for Measurements {
    /// Clinic-typical intake values
    fn default() -> Self {
        Self {
            overjet: 3.0,
            post_ant_ratio: 0.65,
            arch_width: 38.5,
            art_pog: 85.0,
            leeway_space: 2.7,
            molar_class: MolarClass::ClassII,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_values() -> HashMap<String, f64> {
        let mut values = HashMap::new();
        values.insert("Overjet(11)".to_string(), 3.176);
        values.insert("post/ant".to_string(), 0.654154);
        values.insert("U6-6_cusptip".to_string(), 38.553571);
        values.insert("art_pog".to_string(), 85.498626);
        values.insert("U_leeway".to_string(), 2.742571);
        values.insert("class_cat_T2".to_string(), 1.0);
        values
    }

    #[test]
    fn test_measurements_serialization() {
        let m = Measurements::default();

        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Measurements = serde_json::from_str(&json).unwrap();

        assert_eq!(m.overjet, deserialized.overjet);
        assert_eq!(m.arch_width, deserialized.arch_width);
        assert_eq!(m.molar_class, deserialized.molar_class);
    }

    #[test]
    fn test_training_column_aliases() {
        let json = r#"{
            "Overjet(11)": 3.176,
            "post/ant": 0.654154,
            "U6-6_cusptip": 38.553571,
            "art_pog": 85.498626,
            "U_leeway": 2.742571,
            "class_cat_T2": 1
        }"#;

        let m: Measurements = serde_json::from_str(json).unwrap();
        assert_eq!(m.overjet, 3.176);
        assert_eq!(m.post_ant_ratio, 0.654154);
        assert_eq!(m.molar_class, MolarClass::ClassII);
    }

    #[test]
    fn test_from_named_values() {
        let m = Measurements::from_named_values(&named_values()).unwrap();
        assert_eq!(m.leeway_space, 2.742571);
        assert_eq!(m.molar_class, MolarClass::ClassII);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut values = named_values();
        values.remove("U_leeway");

        let err = Measurements::from_named_values(&values).unwrap_err();
        assert!(err.to_string().contains("U_leeway"));
    }

    #[test]
    fn test_class_indicator_out_of_range() {
        let mut values = named_values();
        values.insert("class_cat_T2".to_string(), 2.0);

        assert!(Measurements::from_named_values(&values).is_err());
    }

    #[test]
    fn test_molar_class_indicator() {
        assert_eq!(MolarClass::ClassI.indicator(), 0.0);
        assert_eq!(MolarClass::ClassII.indicator(), 1.0);
        assert_eq!(MolarClass::from_indicator(0.0).unwrap(), MolarClass::ClassI);
        assert!(MolarClass::from_indicator(0.5).is_err());
    }
}
