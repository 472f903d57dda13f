// SPDX-License-Identifier: MIT
//
// Numeric serialization for color components.
//
// Every component written into a notation string goes through
// `format_number`, so two components that are numerically equal always
// serialize to the same text. Palette equality checks compare strings,
// which makes this the one place where float noise has to die.

/// Decimal precision used when no explicit precision is requested.
pub const DEFAULT_DECIMALS: usize = 2;

/// Decimal precision for exact seed renderings.
pub const EXACT_DECIMALS: usize = 4;

/// Decimal places used to detect values that are integers up to noise
/// (e.g. `24.999999999`).
const INTEGER_SNAP_DECIMALS: usize = 10;

/// Format a color component.
///
/// 1. Round to 10 decimals; an integral result is returned bare (`"25"`).
/// 2. Otherwise round to `decimals`; an integral result is returned bare.
/// 3. Otherwise the shortest decimal string, without trailing zeros.
///
/// ```
/// use tonal_color::number::format_number;
///
/// assert_eq!(format_number(24.999_999_999, 2), "25");
/// assert_eq!(format_number(0.123_456_7, 2), "0.12");
/// assert_eq!(format_number(0.1, 2), "0.1");
/// ```
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    let snapped = round_to(value, INTEGER_SNAP_DECIMALS);
    if is_integral(snapped) {
        return integer_string(snapped);
    }

    let fixed = round_to(value, decimals);
    if is_integral(fixed) {
        return integer_string(fixed);
    }

    // f64's Display is already the shortest round-tripping form.
    fixed.to_string()
}

/// Magnitude above which a scaled value has no fractional bits left.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round to `decimals` places, ties away from zero (`0.125` → `0.13`).
fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    scaled.round() / scale
}

#[inline]
fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn integer_string(value: f64) -> String {
    // Avoid "-0".
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_near_integer_collapses() {
        assert_eq!(format_number(24.999_999_999, DEFAULT_DECIMALS), "25");
        assert_eq!(format_number(98.000_000_000_01, DEFAULT_DECIMALS), "98");
        assert_eq!(format_number(0.000_000_000_01, DEFAULT_DECIMALS), "0");
    }

    #[test]
    fn rounds_to_precision() {
        assert_eq!(format_number(0.123_456_7, 2), "0.12");
        assert_eq!(format_number(0.123_456_7, 4), "0.1235");
        assert_eq!(format_number(27.518_12, 2), "27.52");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(format_number(0.125, 2), "0.13");
        assert_eq!(format_number(20.125, 2), "20.13");
        assert_eq!(format_number(-0.125, 2), "-0.13");
        assert_eq!(format_number(0.5, 0), "1");
        assert_eq!(format_number(2.5, 0), "3");
    }

    #[test]
    fn huge_values_pass_through() {
        assert_eq!(format_number(1e300, 2), 1e300.to_string());
    }

    #[test]
    fn trailing_zeros_dropped() {
        assert_eq!(format_number(0.1, 2), "0.1");
        assert_eq!(format_number(94.5, 2), "94.5");
        assert_eq!(format_number(0.500_01, 3), "0.5");
    }

    #[test]
    fn integral_after_rounding_to_precision() {
        assert_eq!(format_number(99.999, 2), "100");
        assert_eq!(format_number(0.004, 2), "0");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(format_number(-0.0, 2), "0");
        assert_eq!(format_number(-0.000_1, 2), "0");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(format_number(-1.26, 1), "-1.3");
        assert_eq!(format_number(-3.0, 2), "-3");
    }

    #[test]
    fn equal_values_serialize_identically() {
        let a = 0.1 + 0.2;
        let b = 0.3;
        assert_eq!(format_number(a, 4), format_number(b, 4));
    }
}
