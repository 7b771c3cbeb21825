use crate::vci::types::DistressEntry;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

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
pub enum SurfaceType {
    #[default]
    Concrete,
    Asphalt,
}

/// A catalog row: distress name and its fixed deduct weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistressTemplate {
    pub name: &'static str,
    pub weight: f64,
}

const fn row(name: &'static str, weight: f64) -> DistressTemplate {
    DistressTemplate { name, weight }
}

const CONCRETE: [DistressTemplate; 9] = [
    row("Cracking - Multiple Narrow", 3.6),
    row("Cracking - Transverse Wide", 5.5),
    row("Cracking - Transverse Narrow", 3.5),
    row("Spalling (severity)", 3.0),
    row("Faulting (average)", 4.2),
    row("Shattered Slabs (number)", 1.36),
    row("Scaling - Severe", 1.2),
    row("Scaling - Minor", 0.55),
    row("Joint Sealant Deterioration", 0.13),
];

const ASPHALT: [DistressTemplate; 13] = [
    row("Cracking - Crocodile Narrow", 3.5),
    row("Cracking - Crocodile Wide", 5.9),
    row("Cracking - Transverse Wide", 5.5),
    row("Cracking - Transverse Narrow", 3.3),
    row("Edge Break (Large)", 1.25),
    row("Edge Break (Medium)", 0.82),
    row("Edge Break (Small)", 0.41),
    row("Patching", 1.25),
    row("Potholes (Number)", 0.36),
    row("Surface Failures", 0.18),
    row("Rutting (RDM)", 4.0),
    row("Wearing Surface - Minor", 0.55),
    row("Wearing Surface - Severe", 1.2),
];

impl SurfaceType {
    pub fn catalog(&self) -> &'static [DistressTemplate] {
        match self {
            Self::Concrete => &CONCRETE,
            Self::Asphalt => &ASPHALT,
        }
    }

    /// Fresh working set for this surface, every observed value blank.
    pub fn template(&self) -> Vec<DistressEntry> {
        self.catalog()
            .iter()
            .map(|t| DistressEntry::new(t.name, t.weight))
            .collect()
    }

    /// Position of a distress type in this catalog, ignoring case and
    /// surrounding whitespace.
    pub fn find(&self, distress: &str) -> Option<usize> {
        let needle = distress.trim();
        self.catalog()
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(needle))
    }
}

pub fn get_all_catalogs() -> Vec<(SurfaceType, &'static [DistressTemplate])> {
    SurfaceType::iter().map(|s| (s, s.catalog())).collect()
}
