use super::engine;
use super::input::parse_observed;
use crate::classify::{classify_value, ConditionBand};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One row of a working set. Name and weight come from the catalog and stay
/// fixed; only the observed text changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistressEntry {
    #[serde(rename = "type")]
    distress: String,
    weight: f64,
    observed: String,
    weighted: f64,
}

impl DistressEntry {
    pub fn new(distress: impl Into<String>, weight: f64) -> Self {
        Self {
            distress: distress.into(),
            weight,
            observed: String::new(),
            weighted: 0.0,
        }
    }

    pub fn distress(&self) -> &str {
        &self.distress
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Raw observed text as entered.
    pub fn observed(&self) -> &str {
        &self.observed
    }

    pub fn observed_value(&self) -> f64 {
        parse_observed(&self.observed)
    }

    pub fn weighted(&self) -> f64 {
        self.weighted
    }

    pub fn observe(&mut self, raw: impl Into<String>) {
        self.observed = raw.into();
        self.weighted = engine::weigh(self.observed_value(), self.weight);
    }

    pub fn clear(&mut self) {
        self.observed.clear();
        self.weighted = 0.0;
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VciResult {
    #[serde(rename = "totalSDWF")]
    pub total_sdwf: f64,
    pub vci: f64,
}

impl VciResult {
    pub fn band(&self) -> Option<ConditionBand> {
        classify_value(self.vci)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum VciFormula {
    /// Clamped deduct curve, `100 * (1 - sqrt(1 - x^2))`.
    #[default]
    Curve,
    /// Superseded `total / 4.3` divisor. Unclamped and not band-calibrated.
    Linear,
}
