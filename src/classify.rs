use crate::consts::NEUTRAL_COLOR;
use crate::vci::input::parse_number_prefix;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Ordinal condition band. Declaration order gives `Bad < Poor < Fair < Good`.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ConditionBand {
    Bad,
    Poor,
    Fair,
    Good,
}

impl ConditionBand {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#10b981",
            Self::Fair => "#f59e0b",
            Self::Poor => "#f97316",
            Self::Bad => "#ef4444",
        }
    }

    pub fn color_name(&self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Fair => "amber",
            Self::Poor => "orange",
            Self::Bad => "red",
        }
    }

    /// RGB triple of [`ConditionBand::color`].
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Good => (0x10, 0xb9, 0x81),
            Self::Fair => (0xf5, 0x9e, 0x0b),
            Self::Poor => (0xf9, 0x73, 0x16),
            Self::Bad => (0xef, 0x44, 0x44),
        }
    }
}

/// A condition as stored against a road: either a number or a category
/// string (which may itself hold a number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionInput {
    Numeric(f64),
    Text(String),
}

impl From<f64> for ConditionInput {
    fn from(v: f64) -> Self {
        Self::Numeric(v)
    }
}

impl From<&str> for ConditionInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ConditionInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl ConditionInput {
    /// Numeric reading, if any. Band names have none.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => (!v.is_nan()).then_some(*v),
            Self::Text(s) => parse_number_prefix(s),
        }
    }
}

impl fmt::Display for ConditionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{:.2}", v),
            Self::Text(s) => match parse_number_prefix(s) {
                Some(v) => write!(f, "{:.2}", v),
                None => write!(f, "{}", s),
            },
        }
    }
}

/// Bands a VCI value. Bounds: good (70, 100], fair (40, 70], poor (20, 40],
/// bad [1, 20]. Anything else, NaN included, is unclassified.
pub fn classify_value(value: f64) -> Option<ConditionBand> {
    if value > 70.0 && value <= 100.0 {
        Some(ConditionBand::Good)
    } else if value > 40.0 && value <= 70.0 {
        Some(ConditionBand::Fair)
    } else if value > 20.0 && value <= 40.0 {
        Some(ConditionBand::Poor)
    } else if (1.0..=20.0).contains(&value) {
        Some(ConditionBand::Bad)
    } else {
        None
    }
}

/// Band names match directly (case-insensitive); other strings are read
/// as numbers.
pub fn classify_str(value: &str) -> Option<ConditionBand> {
    let lowered = value.trim().to_lowercase();
    if let Ok(band) = lowered.parse::<ConditionBand>() {
        return Some(band);
    }
    parse_number_prefix(&lowered).and_then(classify_value)
}

pub fn classify(value: &ConditionInput) -> Option<ConditionBand> {
    match value {
        ConditionInput::Numeric(v) => classify_value(*v),
        ConditionInput::Text(s) => classify_str(s),
    }
}

/// Display colour for a band, neutral when unclassified.
pub fn segment_color(band: Option<ConditionBand>) -> &'static str {
    band.map_or(NEUTRAL_COLOR, |b| b.color())
}
