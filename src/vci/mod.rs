pub mod engine;
pub mod input;
pub mod loader;
pub mod types;

pub use self::engine::{compute_vci, compute_vci_with};
pub use self::loader::SurveyRecord;
pub use self::types::{DistressEntry, VciFormula, VciResult};
