use crate::reports;
use clap::Args;
use roadwatch::classify::{classify_str, segment_color, ConditionBand};
use roadwatch::error::RwResult;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// VCI values or category names (good, fair, poor, bad).
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct ClassifyOut<'a> {
    input: &'a str,
    band: Option<ConditionBand>,
    color: &'static str,
}

pub fn run(args: ClassifyArgs) -> RwResult<()> {
    let rows: Vec<(String, Option<ConditionBand>)> = args
        .values
        .iter()
        .map(|v| (v.clone(), classify_str(v)))
        .collect();

    if args.json {
        let out: Vec<ClassifyOut> = rows
            .iter()
            .map(|(input, band)| ClassifyOut {
                input,
                band: *band,
                color: segment_color(*band),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        reports::print_classifications(&rows);
    }
    Ok(())
}
