use crate::reports;
use clap::Args;
use roadwatch::api::{evaluate_all, Evaluation};
use roadwatch::config::Config;
use roadwatch::error::{RoadWatchError, RwResult};
use roadwatch::roads::VciReport;
use roadwatch::vci::loader::load_surveys_from_file;
use std::fs;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Survey CSV: road_id,surface_type,distress_type,observed
    pub file: String,

    /// Inspector recorded on the generated reports.
    #[arg(long, default_value = "anonymous")]
    pub user_id: String,

    /// Write the VCI reports as JSON to this path.
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn run(args: BatchArgs, config: Config) -> RwResult<()> {
    info!("📂 Loading surveys: {}", args.file);
    let records = load_surveys_from_file(&args.file)?;
    if records.is_empty() {
        warn!("⚠️  No surveys found in '{}'.", args.file);
        return Ok(());
    }

    let mut evaluations: Vec<Evaluation> = Vec::with_capacity(records.len());
    let mut failures = 0;
    for outcome in evaluate_all(&records, &config.eval) {
        match outcome {
            Ok(e) => evaluations.push(e),
            Err(e) => {
                failures += 1;
                warn!("⚠️  {}", e);
            }
        }
    }

    reports::print_batch_summary(&evaluations, config.display.vci_decimals);

    if let Some(out) = &args.out {
        let vci_reports: Vec<VciReport> = evaluations
            .iter()
            .map(|e| e.to_report(&args.user_id))
            .collect();
        fs::write(out, serde_json::to_string_pretty(&vci_reports)?)?;
        info!("💾 Wrote {} reports to {}", vci_reports.len(), out);
    }

    if evaluations.is_empty() {
        return Err(RoadWatchError::Validation(format!(
            "None of the {} surveys could be evaluated",
            failures
        )));
    }
    Ok(())
}
