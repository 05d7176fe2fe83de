//! Volumetric billing (CBM).
//!
//! Converts item dimensions and quantity into billable cubic meters. Items
//! that fit a standard pallet are billed on their geometric volume; items
//! whose footprint or height exceeds the pallet thresholds are billed as a
//! multiple of the pallet unit volume instead.
//!
//! The calculation is total: it never fails, and every input is coerced into
//! a finite, non-negative number before use.

use serde::{Deserialize, Serialize};

use freightdesk_core::ValueObject;

use crate::decimal::round_to;
use crate::field::{FieldValue, sanitize};

/// Widest footprint (m) that still fits a pallet.
pub const WIDTH_THRESHOLD: f64 = 1.20;
/// Longest footprint (m) that still fits a pallet.
pub const LENGTH_THRESHOLD: f64 = 1.20;
/// Tallest item (m) that still counts as standard height.
pub const HEIGHT_THRESHOLD: f64 = 1.50;
/// Height (m) of the reference pallet load.
pub const PALLET_HEIGHT: f64 = 1.20;
/// Volume (m³) billed per pallet unit: 1.20 × 1.20 × 1.20 = 1.728.
pub const PALLET_UNIT_VOLUME: f64 = WIDTH_THRESHOLD * LENGTH_THRESHOLD * PALLET_HEIGHT;

pub const WIDTH_MULTIPLIER: f64 = 2.0;
pub const HEIGHT_MULTIPLIER: f64 = 1.5;

/// Decimal places of the billed volume.
pub const VOLUME_DECIMALS: u32 = 3;

/// `(exclusive lower, inclusive upper, multiplier)` length steps of 1.20 m.
const LENGTH_STEPS: [(f64, f64, u8); 7] = [
    (0.01, 1.20, 1),
    (1.20, 2.40, 2),
    (2.40, 3.60, 3),
    (3.60, 4.80, 4),
    (4.80, 6.00, 5),
    (6.00, 7.20, 6),
    (7.20, 9.00, 7),
];

/// Calculator input: quantity plus the three billing axes, in meters.
///
/// Values are sanitized on construction, so every instance holds finite,
/// non-negative numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ItemDimensions {
    quantity: f64,
    length: f64,
    width: f64,
    height: f64,
}

impl ValueObject for ItemDimensions {}

impl ItemDimensions {
    pub fn new(quantity: f64, length: f64, width: f64, height: f64) -> Self {
        Self {
            quantity: sanitize(quantity),
            length: sanitize(length),
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Build from raw form fields; unparsable fields count as `0`.
    pub fn from_fields(
        quantity: &FieldValue,
        length: &FieldValue,
        width: &FieldValue,
        height: &FieldValue,
    ) -> Self {
        Self::new(
            quantity.as_number(),
            length.as_number(),
            width.as_number(),
            height.as_number(),
        )
    }

    /// Build from a line item's stored dimensions.
    ///
    /// The item's `height` column is billed as length and its `depth` column
    /// as height; `width` stays width.
    pub fn from_row_dimensions(quantity: f64, height_m: f64, width_m: f64, depth_m: f64) -> Self {
        Self::new(quantity, height_m, width_m, depth_m)
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn raw_volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// Pallet classification label, independent of the billing band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PalletStatus {
    Standard,
    Oversized,
    Overheight,
}

impl PalletStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PalletStatus::Standard => "standard",
            PalletStatus::Oversized => "oversized",
            PalletStatus::Overheight => "overheight",
        }
    }
}

/// Which threshold combination an item falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingBand {
    WithinThresholds,
    LengthOnly,
    WidthOnly,
    WidthAndLength,
    HeightOnly,
    AllExceeded,
    LengthAndHeight,
    WidthAndHeight,
}

impl BillingBand {
    /// Classify by which thresholds are strictly exceeded.
    pub fn classify(length: f64, width: f64, height: f64) -> Self {
        let over_length = length > LENGTH_THRESHOLD;
        let over_width = width > WIDTH_THRESHOLD;
        let over_height = height > HEIGHT_THRESHOLD;

        match (over_length, over_width, over_height) {
            (false, false, false) => BillingBand::WithinThresholds,
            (true, false, false) => BillingBand::LengthOnly,
            (false, true, false) => BillingBand::WidthOnly,
            (true, true, false) => BillingBand::WidthAndLength,
            (false, false, true) => BillingBand::HeightOnly,
            (true, true, true) => BillingBand::AllExceeded,
            (true, false, true) => BillingBand::LengthAndHeight,
            (false, true, true) => BillingBand::WidthAndHeight,
        }
    }

    /// Billable volume of a single unit in this band.
    ///
    /// A zero length multiplier (length outside the step table) zeroes every
    /// band that uses it.
    fn unit_volume(self, dims: &ItemDimensions, length_multiplier: f64) -> f64 {
        match self {
            BillingBand::WithinThresholds => dims.raw_volume(),
            BillingBand::LengthOnly => PALLET_UNIT_VOLUME * length_multiplier,
            BillingBand::WidthOnly => PALLET_UNIT_VOLUME * WIDTH_MULTIPLIER,
            BillingBand::WidthAndLength => {
                PALLET_UNIT_VOLUME * (WIDTH_MULTIPLIER * length_multiplier)
            }
            BillingBand::HeightOnly => PALLET_UNIT_VOLUME * HEIGHT_MULTIPLIER,
            BillingBand::AllExceeded => {
                PALLET_UNIT_VOLUME * (WIDTH_MULTIPLIER * length_multiplier) * HEIGHT_MULTIPLIER
            }
            BillingBand::LengthAndHeight => {
                PALLET_UNIT_VOLUME * length_multiplier * HEIGHT_MULTIPLIER
            }
            // Same formula as `AllExceeded`, including the length multiplier,
            // even though length is within its threshold here.
            BillingBand::WidthAndHeight => {
                PALLET_UNIT_VOLUME * (WIDTH_MULTIPLIER * length_multiplier) * HEIGHT_MULTIPLIER
            }
        }
    }
}

/// Full calculator output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumetricAssessment {
    /// Billable m³ for the whole row, rounded to 3 decimals.
    pub volume: f64,
    pub pallet_status: PalletStatus,
    pub band: BillingBand,
    pub length_multiplier: u8,
}

/// Pallet-length multiplier for `length` (m); `0` outside 0.01..=9.00.
pub fn length_multiplier(length: f64) -> u8 {
    LENGTH_STEPS
        .iter()
        .find(|(lower, upper, _)| length > *lower && length <= *upper)
        .map(|(_, _, m)| *m)
        .unwrap_or(0)
}

pub fn pallet_status(dims: &ItemDimensions) -> PalletStatus {
    if dims.width > WIDTH_THRESHOLD || dims.length > LENGTH_THRESHOLD {
        PalletStatus::Oversized
    } else if dims.height > HEIGHT_THRESHOLD {
        PalletStatus::Overheight
    } else {
        PalletStatus::Standard
    }
}

/// Billable volume plus the classification details behind it.
pub fn assess(dims: &ItemDimensions) -> VolumetricAssessment {
    let multiplier = length_multiplier(dims.length);
    let band = BillingBand::classify(dims.length, dims.width, dims.height);
    let unit = band.unit_volume(dims, f64::from(multiplier));
    let volume = round_to(unit * dims.quantity, VOLUME_DECIMALS);

    tracing::trace!(
        ?band,
        length_multiplier = multiplier,
        quantity = dims.quantity,
        volume,
        "assessed item volume"
    );

    VolumetricAssessment {
        volume,
        pallet_status: pallet_status(dims),
        band,
        length_multiplier: multiplier,
    }
}

/// Billable cubic meters for a row, rounded to 3 decimals.
pub fn calculate_cbm(dims: &ItemDimensions) -> f64 {
    assess(dims).volume
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cbm(quantity: f64, length: f64, width: f64, height: f64) -> f64 {
        calculate_cbm(&ItemDimensions::new(quantity, length, width, height))
    }

    #[test]
    fn pallet_unit_volume_is_1728_litres() {
        assert_eq!(round_to(PALLET_UNIT_VOLUME, 3), 1.728);
    }

    #[test]
    fn small_items_bill_raw_volume() {
        assert_eq!(cbm(2.0, 1.0, 1.0, 1.0), 2.0);
        assert_eq!(cbm(1.0, 0.5, 0.5, 0.5), 0.125);
    }

    #[test]
    fn items_exactly_at_thresholds_bill_raw_volume() {
        let dims = ItemDimensions::new(1.0, 1.20, 1.20, 1.50);
        let a = assess(&dims);
        assert_eq!(a.band, BillingBand::WithinThresholds);
        assert_eq!(a.volume, 2.16);
        assert_eq!(a.pallet_status, PalletStatus::Standard);
    }

    #[test]
    fn long_items_bill_pallets_by_length_step() {
        let a = assess(&ItemDimensions::new(1.0, 2.0, 1.0, 1.0));
        assert_eq!(a.band, BillingBand::LengthOnly);
        assert_eq!(a.length_multiplier, 2);
        assert_eq!(a.volume, 3.456);

        assert_eq!(cbm(1.0, 9.0, 1.0, 1.0), 12.096);
    }

    #[test]
    fn wide_items_bill_double_pallet() {
        let a = assess(&ItemDimensions::new(3.0, 1.0, 1.5, 1.0));
        assert_eq!(a.band, BillingBand::WidthOnly);
        assert_eq!(a.volume, 10.368);
        assert_eq!(a.pallet_status, PalletStatus::Oversized);
    }

    #[test]
    fn wide_and_long_items_multiply_both() {
        let a = assess(&ItemDimensions::new(1.0, 2.0, 1.5, 1.0));
        assert_eq!(a.band, BillingBand::WidthAndLength);
        assert_eq!(a.volume, 6.912);
    }

    #[test]
    fn tall_items_bill_one_and_a_half_pallets() {
        let a = assess(&ItemDimensions::new(1.0, 1.0, 1.0, 2.0));
        assert_eq!(a.band, BillingBand::HeightOnly);
        assert_eq!(a.volume, 2.592);
        assert_eq!(a.pallet_status, PalletStatus::Overheight);
    }

    #[test]
    fn items_over_every_threshold() {
        let a = assess(&ItemDimensions::new(1.0, 2.0, 1.5, 2.0));
        assert_eq!(a.band, BillingBand::AllExceeded);
        assert_eq!(a.volume, 10.368);
    }

    #[test]
    fn long_and_tall_items() {
        let a = assess(&ItemDimensions::new(1.0, 2.0, 1.0, 2.0));
        assert_eq!(a.band, BillingBand::LengthAndHeight);
        assert_eq!(a.volume, 5.184);
    }

    #[test]
    fn wide_and_tall_items_reuse_the_all_exceeded_formula() {
        let a = assess(&ItemDimensions::new(1.0, 1.0, 1.5, 2.0));
        assert_eq!(a.band, BillingBand::WidthAndHeight);
        assert_eq!(a.length_multiplier, 1);
        assert_eq!(a.volume, 5.184);

        // No length at all means a zero length multiplier.
        assert_eq!(cbm(1.0, 0.0, 1.5, 2.0), 0.0);
    }

    #[test]
    fn lengths_beyond_the_step_table_bill_nothing() {
        let a = assess(&ItemDimensions::new(1.0, 9.5, 1.0, 1.0));
        assert_eq!(a.band, BillingBand::LengthOnly);
        assert_eq!(a.length_multiplier, 0);
        assert_eq!(a.volume, 0.0);
        assert_eq!(a.pallet_status, PalletStatus::Oversized);
    }

    #[test]
    fn length_steps() {
        assert_eq!(length_multiplier(0.0), 0);
        assert_eq!(length_multiplier(0.01), 0);
        assert_eq!(length_multiplier(0.02), 1);
        assert_eq!(length_multiplier(1.20), 1);
        assert_eq!(length_multiplier(1.21), 2);
        assert_eq!(length_multiplier(2.40), 2);
        assert_eq!(length_multiplier(3.00), 3);
        assert_eq!(length_multiplier(4.80), 4);
        assert_eq!(length_multiplier(5.50), 5);
        assert_eq!(length_multiplier(7.20), 6);
        assert_eq!(length_multiplier(9.00), 7);
        assert_eq!(length_multiplier(9.01), 0);
    }

    #[test]
    fn missing_dimensions_bill_zero() {
        assert_eq!(cbm(1.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(calculate_cbm(&ItemDimensions::default()), 0.0);
    }

    #[test]
    fn non_numeric_fields_are_zero() {
        let dims = ItemDimensions::from_fields(
            &FieldValue::from("1"),
            &FieldValue::from("abc"),
            &FieldValue::from("1"),
            &FieldValue::from("1"),
        );
        assert_eq!(dims.length(), 0.0);
        assert_eq!(calculate_cbm(&dims), 0.0);
    }

    #[test]
    fn row_dimensions_map_height_to_length_and_depth_to_height() {
        let dims = ItemDimensions::from_row_dimensions(1.0, 2.0, 1.0, 1.4);
        assert_eq!(dims.length(), 2.0);
        assert_eq!(dims.height(), 1.4);
        assert_eq!(assess(&dims).band, BillingBand::LengthOnly);
    }

    #[test]
    fn pallet_status_prefers_oversized() {
        let dims = ItemDimensions::new(1.0, 1.0, 1.3, 1.6);
        assert_eq!(pallet_status(&dims), PalletStatus::Oversized);
    }

    #[test]
    fn rounding_uses_the_exact_product() {
        // 0.01 × 0.12 × 1.25 × 3 lands just below 0.0045.
        let dims = ItemDimensions::new(3.0, 0.01, 0.12, 1.25);
        assert_eq!(calculate_cbm(&dims), 0.004);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: the billed volume is never negative.
        #[test]
        fn volume_is_non_negative(
            q in 0.0f64..1_000.0,
            l in 0.0f64..12.0,
            w in 0.0f64..4.0,
            h in 0.0f64..4.0,
        ) {
            prop_assert!(cbm(q, l, w, h) >= 0.0);
        }

        /// Property: identical inputs give identical outputs.
        #[test]
        fn calculation_is_deterministic(
            q in 0.0f64..100.0,
            l in 0.0f64..12.0,
            w in 0.0f64..4.0,
            h in 0.0f64..4.0,
        ) {
            let dims = ItemDimensions::new(q, l, w, h);
            prop_assert_eq!(assess(&dims), assess(&dims));
        }

        /// Property: results carry at most three decimals.
        #[test]
        fn volume_has_three_decimals(
            q in 0.0f64..100.0,
            l in 0.0f64..12.0,
            w in 0.0f64..4.0,
            h in 0.0f64..4.0,
        ) {
            let scaled = cbm(q, l, w, h) * 1000.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }

        /// Property: arbitrary text never panics and never goes negative.
        #[test]
        fn free_text_inputs_are_total(
            q in ".{0,12}",
            l in ".{0,12}",
            w in ".{0,12}",
            h in ".{0,12}",
        ) {
            let dims = ItemDimensions::from_fields(
                &FieldValue::from(q),
                &FieldValue::from(l),
                &FieldValue::from(w),
                &FieldValue::from(h),
            );
            prop_assert!(calculate_cbm(&dims) >= 0.0);
        }
    }
}
