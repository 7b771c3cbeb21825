/// Deducts above this total have no further effect on the index.
pub const MAX_DEDUCT: f64 = 300.0;

/// Divisor mapping the clamped deduct total onto the 0..=100 curve input.
pub const DEDUCT_SCALE: f64 = MAX_DEDUCT / 100.0;

/// Divisor of the superseded linear formula.
pub const LEGACY_LINEAR_DIVISOR: f64 = 4.3;

/// Decimal places the form shows for the VCI.
pub const VCI_DISPLAY_DECIMALS: usize = 8;

/// Colour for roads without a condition band.
pub const NEUTRAL_COLOR: &str = "#3b82f6";

pub const DEFAULT_PAGE_SIZE: usize = 20;
