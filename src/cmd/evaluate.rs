use crate::reports;
use clap::Args;
use roadwatch::catalog::SurfaceType;
use roadwatch::classify::ConditionBand;
use roadwatch::config::Config;
use roadwatch::error::{RoadWatchError, RwResult};
use roadwatch::roads::RoadUpdate;
use roadwatch::session::EvaluationSession;
use roadwatch::vci::input::parse_observed_strict;
use roadwatch::vci::{DistressEntry, VciFormula, VciResult};
use serde::Serialize;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value = "concrete")]
    pub surface: SurfaceType,

    /// Observed value for one distress type, e.g. "Patching=2.5".
    #[arg(short, long = "observe", value_name = "NAME=VALUE")]
    pub observe: Vec<String>,

    /// Observed values in catalog order, comma separated.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Road to prepare the `{vci, surface_type}` update for.
    #[arg(long)]
    pub road_id: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluateOut<'a> {
    surface: SurfaceType,
    formula: VciFormula,
    rows: &'a [DistressEntry],
    #[serde(flatten)]
    result: VciResult,
    band: Option<ConditionBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update: Option<RoadUpdate>,
}

pub fn run(args: EvaluateArgs, config: Config) -> RwResult<()> {
    let formula = config.eval.formula;
    let strict = config.eval.strict_input;

    let mut session = EvaluationSession::with_values(args.surface, args.values.as_slice())?;
    if strict {
        for (row, raw) in session.rows().iter().zip(&args.values) {
            parse_observed_strict(raw, row.distress())?;
        }
    }

    for pair in &args.observe {
        let (name, raw) = pair.split_once('=').ok_or_else(|| {
            RoadWatchError::Validation(format!("Expected NAME=VALUE, got '{}'", pair))
        })?;
        if strict {
            parse_observed_strict(raw, name.trim())?;
        }
        session.set_observed_by_name(name.trim(), raw.trim())?;
    }

    if formula == VciFormula::Linear {
        warn!("⚠️  Using the superseded linear VCI formula; the result is not banded.");
    }

    let result = session.result(formula);
    let band = match formula {
        VciFormula::Curve => result.band(),
        VciFormula::Linear => None,
    };

    let update = match args.road_id.as_deref() {
        Some(id) => Some(session.prepare_submission(Some(id), formula)?),
        None => None,
    };

    if args.json {
        let out = EvaluateOut {
            surface: session.surface(),
            formula,
            rows: session.rows(),
            result,
            band,
            update,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    reports::print_evaluation(
        session.surface(),
        session.rows(),
        &result,
        band,
        config.display.vci_decimals,
    );
    if let Some(update) = &update {
        reports::print_update(update);
    }
    Ok(())
}
