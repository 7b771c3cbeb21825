use super::types::{DistressEntry, VciFormula, VciResult};
use crate::consts::{DEDUCT_SCALE, LEGACY_LINEAR_DIVISOR, MAX_DEDUCT};

/// Rounds to two decimals, half away from zero on the exact binary value.
///
/// Only multiples of 1/8 with an odd numerator sit exactly on a
/// half-cent, so those are the only ties to break by hand; everything
/// else goes through exact decimal formatting.
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let cents = (value * 100.0).abs().ceil();
        return cents.copysign(value) / 100.0;
    }

    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Weighted deduct of one row. Overflowing products saturate.
#[inline]
pub fn weigh(observed: f64, weight: f64) -> f64 {
    let product = observed * weight;
    if product.is_finite() {
        round_cents(product)
    } else if product.is_nan() {
        0.0
    } else {
        f64::MAX.copysign(product)
    }
}

/// Sum of the per-row rounded deducts, in catalog order.
pub fn total_sdwf(entries: &[DistressEntry]) -> f64 {
    let total = entries
        .iter()
        .map(|e| weigh(e.observed_value(), e.weight()))
        .fold(0.0, |acc, w| acc + w);

    if total.is_nan() {
        0.0
    } else {
        total.clamp(f64::MIN, f64::MAX)
    }
}

/// Deduct curve. Totals are held inside `0..=300`, so the result is always
/// within `0..=100`.
pub fn vci_from_sdwf(total: f64) -> f64 {
    let clamped = if total.is_nan() {
        0.0
    } else {
        total.clamp(0.0, MAX_DEDUCT)
    };
    let x = (100.0 - clamped / DEDUCT_SCALE) / 100.0;
    let vci = 100.0 * (1.0 - (1.0 - x * x).sqrt());
    vci.max(0.0)
}

pub fn linear_vci_from_sdwf(total: f64) -> f64 {
    total / LEGACY_LINEAR_DIVISOR
}

pub fn compute_vci(entries: &[DistressEntry]) -> VciResult {
    compute_vci_with(entries, VciFormula::Curve)
}

pub fn compute_vci_with(entries: &[DistressEntry], formula: VciFormula) -> VciResult {
    let total_sdwf = total_sdwf(entries);
    let vci = match formula {
        VciFormula::Curve => vci_from_sdwf(total_sdwf),
        VciFormula::Linear => linear_vci_from_sdwf(total_sdwf),
    };
    VciResult { total_sdwf, vci }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_cent_ties_round_away_from_zero() {
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(0.375), 0.38);
        assert_eq!(round_cents(2.625), 2.63);
        assert_eq!(round_cents(-0.125), -0.13);
    }

    #[test]
    fn non_ties_round_on_exact_value() {
        // 1.005 is stored just below the half-cent
        assert_eq!(round_cents(1.005), 1.0);
        assert_eq!(round_cents(7.2), 7.2);
        assert_eq!(round_cents(0.41 * 3.0), 1.23);
        assert_eq!(round_cents(0.13 * 7.0), 0.91);
    }

    #[test]
    fn overflowing_products_saturate() {
        assert_eq!(weigh(f64::MAX, 5.9), f64::MAX);
        assert_eq!(weigh(-f64::MAX, 5.9), -f64::MAX);
    }

    #[test]
    fn curve_endpoints() {
        assert_eq!(vci_from_sdwf(0.0), 100.0);
        assert_eq!(vci_from_sdwf(300.0), 0.0);
        assert_eq!(vci_from_sdwf(1e9), 0.0);
        assert_eq!(vci_from_sdwf(-50.0), 100.0);
    }
}
