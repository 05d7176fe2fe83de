//! Fixed-point rounding of float results.
//!
//! Rounds the exact binary value of an `f64` (not a rescaled copy of it), so
//! a product that lands just below a tie rounds down. Ties go away from zero.
//! This matches fixed-point text formatting of the same number.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `decimals` places.
///
/// Non-finite input rounds to `0`. Finite values beyond `Decimal`'s range
/// have no fractional digits left and are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_string().parse::<f64>().ok())
        .unwrap_or(if value.is_finite() { value } else { 0.0 })
}

/// `value` rounded to `decimals` places and printed with exactly that many.
///
/// Results that round to zero print unsigned.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let rounded = round_to(value, decimals);
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(2.125, 2), 2.13);
        assert_eq!(round_to(-2.125, 2), -2.13);
        assert_eq!(round_to(2.0004, 3), 2.0);
        assert_eq!(round_to(1.23456, 2), 1.23);
    }

    #[test]
    fn values_just_below_a_tie_round_down() {
        // Neither literal is exactly representable; both sit below the tie.
        assert_eq!(round_to(0.015, 2), 0.01);
        assert_eq!(round_to(0.01 * 0.12 * 1.25 * 3.0, 3), 0.004);
    }

    #[test]
    fn values_just_above_a_tie_round_up() {
        assert_eq!(round_to(0.0015, 3), 0.002);
    }

    #[test]
    fn non_finite_rounds_to_zero() {
        assert_eq!(round_to(f64::NAN, 2), 0.0);
        assert_eq!(round_to(f64::INFINITY, 2), 0.0);
    }

    #[test]
    fn huge_values_pass_through() {
        assert_eq!(round_to(1e40, 3), 1e40);
    }

    #[test]
    fn format_fixed_pads_decimals() {
        assert_eq!(format_fixed(10.0, 2), "10.00");
        assert_eq!(format_fixed(0.015, 2), "0.01");
        assert_eq!(format_fixed(2.125, 2), "2.13");
        assert_eq!(format_fixed(3.456, 3), "3.456");
        assert_eq!(format_fixed(-0.001, 2), "0.00");
    }
}
