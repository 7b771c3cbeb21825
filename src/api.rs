use crate::catalog::SurfaceType;
use crate::classify::ConditionBand;
use crate::config::EvalParams;
use crate::error::{RoadWatchError, RwResult};
use crate::roads::{RoadUpdate, VciReport};
use crate::session::EvaluationSession;
use crate::vci::input::parse_observed_strict;
use crate::vci::{DistressEntry, SurveyRecord, VciFormula, VciResult};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of evaluating one survey.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub road_id: String,
    pub surface: SurfaceType,
    pub rows: Vec<DistressEntry>,
    pub result: VciResult,
    pub band: Option<ConditionBand>,
}

impl Evaluation {
    pub fn to_update(&self) -> RoadUpdate {
        RoadUpdate {
            road_id: self.road_id.clone(),
            vci: self.result.vci,
            surface_type: self.surface,
        }
    }

    pub fn to_report(&self, user_id: &str) -> VciReport {
        self.to_report_at(user_id, Utc::now())
    }

    pub fn to_report_at(&self, user_id: &str, created_at: DateTime<Utc>) -> VciReport {
        VciReport {
            road_id: self.road_id.clone(),
            user_id: user_id.to_string(),
            vci_value: self.result.vci,
            surface_type: self.surface,
            created_at,
        }
    }
}

/// Service: evaluate a single survey against its surface catalog.
pub fn evaluate_survey(record: &SurveyRecord, params: &EvalParams) -> RwResult<Evaluation> {
    let mut session = EvaluationSession::new(record.surface);

    for (distress, raw) in &record.observations {
        if params.strict_input {
            parse_observed_strict(raw, distress).map_err(|e| match e {
                RoadWatchError::Validation(msg) => {
                    RoadWatchError::Validation(format!("Road '{}': {}", record.road_id, msg))
                }
                other => other,
            })?;
        }
        session.set_observed_by_name(distress, raw.as_str())?;
    }

    let result = session.result(params.formula);
    let band = match params.formula {
        VciFormula::Curve => result.band(),
        // linear values are not calibrated against the bands
        VciFormula::Linear => None,
    };

    Ok(Evaluation {
        road_id: record.road_id.clone(),
        surface: record.surface,
        rows: session.rows().to_vec(),
        result,
        band,
    })
}

/// Service: evaluate independent surveys in parallel, keeping input order.
pub fn evaluate_all(records: &[SurveyRecord], params: &EvalParams) -> Vec<RwResult<Evaluation>> {
    if params.formula == VciFormula::Linear {
        warn!("Using the superseded linear VCI formula; results are not banded.");
    }

    let results: Vec<RwResult<Evaluation>> = records
        .par_iter()
        .map(|record| evaluate_survey(record, params))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!("Evaluated {} surveys, {} failed.", results.len(), failed);
    results
}
