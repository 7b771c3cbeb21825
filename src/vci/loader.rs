use crate::catalog::SurfaceType;
use crate::error::{RoadWatchError, RwResult};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// One inspection: a road, its surface, and the observed distress values
/// in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyRecord {
    pub road_id: String,
    pub surface: SurfaceType,
    pub observations: Vec<(String, String)>,
}

impl SurveyRecord {
    pub fn new(road_id: impl Into<String>, surface: SurfaceType) -> Self {
        Self {
            road_id: road_id.into(),
            surface,
            observations: Vec::new(),
        }
    }

    pub fn observe(mut self, distress: impl Into<String>, raw: impl Into<String>) -> Self {
        self.observations.push((distress.into(), raw.into()));
        self
    }
}

/// Reads `road_id,surface_type,distress_type,observed` rows (with header).
/// Rows sharing a road id are merged in order of first appearance.
pub fn load_surveys<R: Read>(reader: R) -> RwResult<Vec<SurveyRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records: Vec<SurveyRecord> = Vec::new();
    let mut index_by_road: HashMap<String, usize> = HashMap::new();
    let mut skipped_count = 0;
    let mut row_idx = 0;

    for result in rdr.records() {
        row_idx += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                debug!("[Row {}] CSV Parse Error: {}", row_idx, e);
                skipped_count += 1;
                continue;
            }
        };

        if rec.len() < 3 {
            skipped_count += 1;
            continue;
        }

        let road_id = rec[0].to_string();
        let distress = rec[2].to_string();
        if road_id.is_empty() || distress.is_empty() {
            skipped_count += 1;
            continue;
        }

        let surface: SurfaceType = match rec[1].parse() {
            Ok(s) => s,
            Err(_) => {
                debug!("[Row {}] Unknown surface type '{}'", row_idx, &rec[1]);
                skipped_count += 1;
                continue;
            }
        };

        // A missing observed column is a blank field.
        let observed = rec.get(3).unwrap_or("").to_string();

        match index_by_road.get(&road_id) {
            Some(&idx) => {
                let record = &mut records[idx];
                if record.surface != surface {
                    return Err(RoadWatchError::Validation(format!(
                        "Road '{}' is recorded as both {} and {} (row {})",
                        road_id, record.surface, surface, row_idx
                    )));
                }
                record.observations.push((distress, observed));
            }
            None => {
                index_by_road.insert(road_id.clone(), records.len());
                records.push(SurveyRecord {
                    road_id,
                    surface,
                    observations: vec![(distress, observed)],
                });
            }
        }
    }

    if skipped_count > 0 {
        warn!("Skipped {} invalid rows in survey data.", skipped_count);
    }
    debug!(
        "Scanned {} rows. Loaded {} surveys.",
        row_idx,
        records.len()
    );

    Ok(records)
}

pub fn load_surveys_from_file<P: AsRef<Path>>(path: P) -> RwResult<Vec<SurveyRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        RoadWatchError::Config(format!(
            "Could not open survey file at '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_surveys(file)
}
