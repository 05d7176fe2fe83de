//! Job line items.
//!
//! A row of the job item editor. Dimensions are typed in centimetres and
//! stored in meters; every dimension or quantity edit recomputes the row's
//! billable volume. Weight and a manually typed volume are stored as entered.

use serde::{Deserialize, Serialize};

use freightdesk_core::{Entity, JobItemId};

use crate::field::FieldValue;
use crate::decimal::round_to;
use crate::volume::{ItemDimensions, calculate_cbm};

const CM_PER_M: f64 = 100.0;
const CUBIC_CM_PER_CUBIC_M: f64 = 1_000_000.0;

/// Dimension column of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionAxis {
    Height,
    Width,
    Depth,
}

/// A single field change coming from the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum RowEdit {
    Dimension {
        axis: DimensionAxis,
        centimeters: FieldValue,
    },
    Quantity {
        value: FieldValue,
    },
    Weight {
        value: FieldValue,
    },
    /// Manual override of the calculated volume (m³).
    Volume {
        value: FieldValue,
    },
    ItemType {
        item_type_id: Option<u64>,
    },
}

/// Line item of a freight job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobItem {
    id: JobItemId,
    #[serde(default)]
    item_type_id: Option<u64>,
    #[serde(default)]
    dimension_height: f64,
    #[serde(default)]
    dimension_width: f64,
    #[serde(default)]
    dimension_depth: f64,
    #[serde(default)]
    dimension_height_cm: f64,
    #[serde(default)]
    dimension_width_cm: f64,
    #[serde(default)]
    dimension_depth_cm: f64,
    #[serde(default)]
    quantity: f64,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    volume: Option<f64>,
    #[serde(default)]
    volume_cm: Option<f64>,
}

impl Entity for JobItem {
    type Id = JobItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl JobItem {
    /// Blank row: no type, zero dimensions and quantity, no weight or volume.
    pub fn new(id: JobItemId) -> Self {
        Self {
            id,
            item_type_id: None,
            dimension_height: 0.0,
            dimension_width: 0.0,
            dimension_depth: 0.0,
            dimension_height_cm: 0.0,
            dimension_width_cm: 0.0,
            dimension_depth_cm: 0.0,
            quantity: 0.0,
            weight: None,
            volume: None,
            volume_cm: None,
        }
    }

    pub fn item_type_id(&self) -> Option<u64> {
        self.item_type_id
    }

    /// Stored dimension in meters.
    pub fn dimension(&self, axis: DimensionAxis) -> f64 {
        match axis {
            DimensionAxis::Height => self.dimension_height,
            DimensionAxis::Width => self.dimension_width,
            DimensionAxis::Depth => self.dimension_depth,
        }
    }

    /// Dimension as last typed, in centimetres (`0` when never typed).
    pub fn dimension_cm(&self, axis: DimensionAxis) -> f64 {
        match axis {
            DimensionAxis::Height => self.dimension_height_cm,
            DimensionAxis::Width => self.dimension_width_cm,
            DimensionAxis::Depth => self.dimension_depth_cm,
        }
    }

    /// Centimetre value shown in the editor.
    ///
    /// Rows loaded from storage only carry meters, so fall back to
    /// `meters × 100` at two decimals when no cm value was typed.
    pub fn display_cm(&self, axis: DimensionAxis) -> f64 {
        let cm = self.dimension_cm(axis);
        if cm != 0.0 {
            cm
        } else {
            round_to(self.dimension(axis) * CM_PER_M, 2)
        }
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    pub fn volume_cm(&self) -> Option<f64> {
        self.volume_cm
    }

    /// Calculator input for this row.
    pub fn dimensions(&self) -> ItemDimensions {
        ItemDimensions::from_row_dimensions(
            self.quantity,
            self.dimension_height,
            self.dimension_width,
            self.dimension_depth,
        )
    }

    pub fn recalculate_volume(&mut self) {
        self.volume = Some(calculate_cbm(&self.dimensions()));
    }

    /// Return the row with `edit` applied.
    pub fn apply_edit(&self, edit: &RowEdit) -> JobItem {
        let mut row = self.clone();
        match edit {
            RowEdit::Dimension { axis, centimeters } => {
                let cm = centimeters.as_number();
                let meters = cm / CM_PER_M;
                match axis {
                    DimensionAxis::Height => {
                        row.dimension_height = meters;
                        row.dimension_height_cm = cm;
                    }
                    DimensionAxis::Width => {
                        row.dimension_width = meters;
                        row.dimension_width_cm = cm;
                    }
                    DimensionAxis::Depth => {
                        row.dimension_depth = meters;
                        row.dimension_depth_cm = cm;
                    }
                }
                row.recalculate_volume();
            }
            RowEdit::Quantity { value } => {
                row.quantity = value.as_number();
                row.recalculate_volume();
            }
            RowEdit::Weight { value } => {
                row.weight = non_zero(value.as_signed_number());
            }
            RowEdit::Volume { value } => {
                let volume = non_zero(value.as_number());
                row.volume = volume;
                row.volume_cm = volume.map(|v| v * CUBIC_CM_PER_CUBIC_M);
            }
            RowEdit::ItemType { item_type_id } => {
                row.item_type_id = *item_type_id;
            }
        }
        row
    }
}

/// Empty, zero and unparsable entries clear optional fields.
fn non_zero(value: f64) -> Option<f64> {
    if value == 0.0 { None } else { Some(value) }
}
