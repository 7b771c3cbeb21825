use crate::catalog::SurfaceType;
use crate::classify::ConditionBand;
use crate::error::{RoadWatchError, RwResult};
use crate::roads::RoadUpdate;
use crate::vci::{compute_vci_with, DistressEntry, VciFormula, VciResult};
use tracing::debug;

/// Working copy of one evaluation form.
///
/// The only state transition is the surface toggle, which always discards
/// the observed values and reloads the target catalog's template.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSession {
    surface: SurfaceType,
    rows: Vec<DistressEntry>,
}

impl Default for EvaluationSession {
    fn default() -> Self {
        Self::new(SurfaceType::default())
    }
}

impl EvaluationSession {
    pub fn new(surface: SurfaceType) -> Self {
        Self {
            surface,
            rows: surface.template(),
        }
    }

    /// Session with observed values filled in catalog order. Missing
    /// trailing values stay blank.
    pub fn with_values<S: AsRef<str>>(surface: SurfaceType, values: &[S]) -> RwResult<Self> {
        let mut session = Self::new(surface);
        if values.len() > session.rows.len() {
            return Err(RoadWatchError::Validation(format!(
                "{} values given but the {} catalog has {} distress types",
                values.len(),
                surface,
                session.rows.len()
            )));
        }
        for (row, raw) in session.rows.iter_mut().zip(values) {
            row.observe(raw.as_ref());
        }
        Ok(session)
    }

    pub fn surface(&self) -> SurfaceType {
        self.surface
    }

    pub fn rows(&self) -> &[DistressEntry] {
        &self.rows
    }

    pub fn set_observed(&mut self, index: usize, raw: impl Into<String>) -> RwResult<()> {
        let len = self.rows.len();
        let row = self.rows.get_mut(index).ok_or_else(|| {
            RoadWatchError::Validation(format!(
                "Row {} is out of range for the {} catalog ({} rows)",
                index, self.surface, len
            ))
        })?;
        row.observe(raw);
        Ok(())
    }

    /// Sets a row by distress name (case-insensitive).
    pub fn set_observed_by_name(&mut self, distress: &str, raw: impl Into<String>) -> RwResult<()> {
        let index = self
            .surface
            .find(distress)
            .ok_or_else(|| RoadWatchError::UnknownDistress {
                distress: distress.to_string(),
                surface: self.surface,
            })?;
        self.set_observed(index, raw)
    }

    pub fn switch_surface(&mut self, surface: SurfaceType) {
        debug!("Surface switched {} -> {}, working set reset", self.surface, surface);
        self.surface = surface;
        self.rows = surface.template();
    }

    pub fn reset(&mut self) {
        self.rows.iter_mut().for_each(DistressEntry::clear);
    }

    pub fn result(&self, formula: VciFormula) -> VciResult {
        compute_vci_with(&self.rows, formula)
    }

    pub fn band(&self) -> Option<ConditionBand> {
        self.result(VciFormula::Curve).band()
    }

    /// The `{vci, surface_type}` write for the selected road.
    pub fn prepare_submission(
        &self,
        road_id: Option<&str>,
        formula: VciFormula,
    ) -> RwResult<RoadUpdate> {
        let road_id = road_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(RoadWatchError::NoRoadSelected)?;

        let result = self.result(formula);
        if result.vci == 0.0 {
            return Err(RoadWatchError::ZeroVci);
        }

        Ok(RoadUpdate {
            road_id: road_id.to_string(),
            vci: result.vci,
            surface_type: self.surface,
        })
    }
}
