//! Freight domain module.
//!
//! Volumetric billing (CBM) for job line items, the row/table editing rules
//! of the job item editor, and invoice line amounts and totals. Everything
//! here is deterministic domain logic: no IO, no HTTP, no storage.

pub mod decimal;
pub mod field;
pub mod invoice;
pub mod item;
pub mod table;
pub mod volume;

pub use decimal::{format_fixed, round_to};
pub use field::{FieldValue, coerce_numeric, coerce_signed};
pub use invoice::{InvoiceLine, InvoiceLineEdit, InvoiceTotals};
pub use item::{DimensionAxis, JobItem, RowEdit};
pub use table::{JobItemTable, JobTotals};
pub use volume::{
    BillingBand, ItemDimensions, PalletStatus, VolumetricAssessment, assess, calculate_cbm,
    length_multiplier, pallet_status,
};
