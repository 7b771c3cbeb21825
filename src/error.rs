use crate::catalog::SurfaceType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadWatchError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Unknown distress type '{distress}' for {surface} surface")]
    UnknownDistress {
        distress: String,
        surface: SurfaceType,
    },

    #[error("No road selected. Select a road before saving the VCI value.")]
    NoRoadSelected,

    #[error("No distress values entered. The VCI cannot be zero.")]
    ZeroVci,
}

pub type RwResult<T> = Result<T, RoadWatchError>;
