use crate::catalog::SurfaceType;
use crate::classify::{classify, segment_color, ConditionBand, ConditionInput};
use crate::consts::DEFAULT_PAGE_SIZE;
use crate::error::{RoadWatchError, RwResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Road {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    #[serde(default)]
    pub road_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub vci: Option<ConditionInput>,
    #[serde(default)]
    pub surface_type: Option<SurfaceType>,
}

/// Exports may carry integer primary keys; ids are kept as text.
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

impl Road {
    pub fn band(&self) -> Option<ConditionBand> {
        self.vci.as_ref().and_then(classify)
    }

    pub fn segment_color(&self) -> &'static str {
        segment_color(self.band())
    }

    pub fn display_name(&self) -> &str {
        self.road_name.as_deref().unwrap_or("Unnamed Road")
    }

    /// Cell text for a column key; `-` when the value is missing.
    pub fn cell(&self, key: &str) -> String {
        let value = match key {
            "id" => Some(self.id.clone()),
            "road_name" => self.road_name.clone(),
            "location" => self.location.clone(),
            "start" => self.start.clone(),
            "end" => self.end.clone(),
            "vci" => self.vci.as_ref().map(|v| v.to_string()),
            "status" => self.band().map(|b| b.to_string()),
            "surface_type" => self.surface_type.map(|s| s.to_string()),
            _ => None,
        };
        value
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "-".to_string())
    }
}

pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
}

/// Columns of the roads table, in display order.
pub const ROAD_COLUMNS: [Column; 7] = [
    Column { key: "id", header: "ID" },
    Column { key: "road_name", header: "Road Name" },
    Column { key: "location", header: "Location" },
    Column { key: "surface_type", header: "Surface" },
    Column { key: "vci", header: "VCI" },
    Column { key: "status", header: "Status" },
    Column { key: "start", header: "Start" },
];

/// The `{vci, surface_type}` write against a road record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadUpdate {
    pub road_id: String,
    pub vci: f64,
    pub surface_type: SurfaceType,
}

impl RoadUpdate {
    pub fn apply(&self, road: &mut Road) {
        road.vci = Some(ConditionInput::Numeric(self.vci));
        road.surface_type = Some(self.surface_type);
    }
}

/// Append-only inspection report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VciReport {
    pub road_id: String,
    pub user_id: String,
    pub vci_value: f64,
    pub surface_type: SurfaceType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Vci,
}

#[derive(Debug, Clone)]
pub struct RoadQuery {
    pub search: Option<String>,
    pub band: Option<ConditionBand>,
    pub sort: SortKey,
    pub descending: bool,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for RoadQuery {
    fn default() -> Self {
        Self {
            search: None,
            band: None,
            sort: SortKey::Name,
            descending: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug)]
pub struct Page<'a> {
    pub items: Vec<&'a Road>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl RoadQuery {
    fn matches(&self, road: &Road) -> bool {
        if let Some(band) = self.band {
            if road.band() != Some(band) {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                road.id.to_lowercase().contains(&q)
                    || road
                        .road_name
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&q))
                    || road
                        .location
                        .as_deref()
                        .is_some_and(|l| l.to_lowercase().contains(&q))
            }
            _ => true,
        }
    }

    fn compare(&self, a: &Road, b: &Road) -> Ordering {
        let ord = match self.sort {
            SortKey::Name => a
                .display_name()
                .to_lowercase()
                .cmp(&b.display_name().to_lowercase()),
            SortKey::Vci => {
                let av = a.vci.as_ref().and_then(ConditionInput::as_number);
                let bv = b.vci.as_ref().and_then(ConditionInput::as_number);
                match (av, bv) {
                    (Some(x), Some(y)) => x.total_cmp(&y),
                    // unreadable VCIs go last in either direction
                    (Some(_), None) => return Ordering::Less,
                    (None, Some(_)) => return Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
        };
        if self.descending {
            ord.reverse()
        } else {
            ord
        }
    }

    pub fn apply<'a>(&self, roads: &'a [Road]) -> Page<'a> {
        let mut matched: Vec<&Road> = roads.iter().filter(|r| self.matches(r)).collect();
        matched.sort_by(|a, b| self.compare(a, b));

        let page_size = self.page_size.max(1);
        let total_matches = matched.len();
        let total_pages = total_matches.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, total_pages);

        let items = matched
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        Page {
            items,
            page,
            total_pages,
            total_matches,
        }
    }
}

/// Reads a JSON array of road records.
pub fn load_roads<R: Read>(reader: R) -> RwResult<Vec<Road>> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_roads_from_file<P: AsRef<Path>>(path: P) -> RwResult<Vec<Road>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        RoadWatchError::Config(format!(
            "Could not open roads file at '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_roads(file)
}
