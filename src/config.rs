use crate::consts::{DEFAULT_PAGE_SIZE, VCI_DISPLAY_DECIMALS};
use crate::error::{RoadWatchError, RwResult};
use crate::vci::VciFormula;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub eval: EvalParams,
    #[command(flatten)]
    pub display: DisplayParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EvalParams {
    /// `curve` (current) or `linear` (superseded total / 4.3).
    #[arg(long, default_value = "curve")]
    pub formula: VciFormula,

    /// Reject blank, negative or non-numeric observed values instead of
    /// reading them as zero.
    #[arg(long, default_value_t = false)]
    pub strict_input: bool,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            formula: VciFormula::Curve,
            strict_input: false,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayParams {
    #[arg(long, default_value_t = VCI_DISPLAY_DECIMALS)]
    pub vci_decimals: usize,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            vci_decimals: VCI_DISPLAY_DECIMALS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RwResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RoadWatchError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RwResult<()> {
        if self.display.page_size == 0 {
            return Err(RoadWatchError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.display.vci_decimals > 17 {
            return Err(RoadWatchError::Config(format!(
                "vci_decimals {} exceeds f64 precision (max 17)",
                self.display.vci_decimals
            )));
        }
        Ok(())
    }

    /// Overwrites fields the user passed explicitly on the command line,
    /// leaving file values in place for everything left at its default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(eval.formula);
        update_if_present!(eval.strict_input);

        update_if_present!(display.vci_decimals);
        update_if_present!(display.page_size);
    }
}
