use crate::error::{RoadWatchError, RwResult};

/// Reads the longest leading decimal literal of `raw`, the way a form field
/// value is read: `"12abc"` is 12, `" .5"` is 0.5, `"abc"` is nothing.
///
/// Literals too large for `f64` (`"1e400"`) and a leading `Infinity` come
/// back as signed infinities. Never returns NaN.
pub fn parse_number_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
}

/// Permissive form policy: anything unreadable counts as zero. Overflowing
/// values stay infinite and saturate once weighted.
pub fn parse_observed(raw: &str) -> f64 {
    match parse_number_prefix(raw) {
        // folds -0.0 into 0.0
        Some(v) if v != 0.0 => v,
        _ => 0.0,
    }
}

/// Ingestion policy for externally supplied surveys.
pub fn parse_observed_strict(raw: &str, distress: &str) -> RwResult<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(RoadWatchError::Validation(format!(
            "Blank observed value for '{}'",
            distress
        )));
    }

    let value: f64 = s.parse().map_err(|_| {
        RoadWatchError::Validation(format!(
            "Observed value '{}' for '{}' is not a number",
            s, distress
        ))
    })?;

    if !value.is_finite() {
        return Err(RoadWatchError::Validation(format!(
            "Observed value '{}' for '{}' is not finite",
            s, distress
        )));
    }
    if value < 0.0 {
        return Err(RoadWatchError::Validation(format!(
            "Observed value {} for '{}' is negative",
            value, distress
        )));
    }

    Ok(if value == 0.0 { 0.0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_parsing_matches_form_reading() {
        assert_eq!(parse_number_prefix("12"), Some(12.0));
        assert_eq!(parse_number_prefix("  3.5 "), Some(3.5));
        assert_eq!(parse_number_prefix(".5"), Some(0.5));
        assert_eq!(parse_number_prefix("5."), Some(5.0));
        assert_eq!(parse_number_prefix("12abc"), Some(12.0));
        assert_eq!(parse_number_prefix("1e2"), Some(100.0));
        assert_eq!(parse_number_prefix("1e"), Some(1.0));
        assert_eq!(parse_number_prefix("2.5e-1x"), Some(0.25));
        assert_eq!(parse_number_prefix("0x10"), Some(0.0));
        assert_eq!(parse_number_prefix("-4"), Some(-4.0));
        assert_eq!(parse_number_prefix("abc"), None);
        assert_eq!(parse_number_prefix("."), None);
        assert_eq!(parse_number_prefix(""), None);
        assert_eq!(parse_number_prefix("inf"), None);
        assert_eq!(parse_number_prefix("NaN"), None);
        assert_eq!(parse_number_prefix("-"), None);
    }

    #[test]
    fn overflowing_literals_keep_their_sign() {
        assert_eq!(parse_number_prefix("1e400"), Some(f64::INFINITY));
        assert_eq!(parse_number_prefix("-1e400"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number_prefix(" -Infinity km"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number_prefix(&"9".repeat(400)), Some(f64::INFINITY));
        // tiny literals underflow to zero, not to nothing
        assert_eq!(parse_number_prefix("1e-400"), Some(0.0));
    }

    #[test]
    fn permissive_policy_never_fails() {
        assert_eq!(parse_observed(""), 0.0);
        assert_eq!(parse_observed("garbage"), 0.0);
        assert_eq!(parse_observed("1e400"), f64::INFINITY);
        assert_eq!(parse_observed("NaN"), 0.0);
        assert_eq!(parse_observed("7"), 7.0);
        assert!(parse_observed("-0").is_sign_positive());
    }

    #[test]
    fn strict_policy_rejects_bad_values() {
        assert!(parse_observed_strict("", "Patching").is_err());
        assert!(parse_observed_strict("12abc", "Patching").is_err());
        assert!(parse_observed_strict("-1", "Patching").is_err());
        assert!(parse_observed_strict("inf", "Patching").is_err());
        assert_eq!(parse_observed_strict(" 2.5 ", "Patching").unwrap(), 2.5);
        assert_eq!(parse_observed_strict("0", "Patching").unwrap(), 0.0);
    }
}
