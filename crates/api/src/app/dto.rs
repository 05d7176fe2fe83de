use serde::{Deserialize, Serialize};

use freightdesk_core::JobId;
use freightdesk_freight::{
    FieldValue, InvoiceLine, InvoiceLineEdit, InvoiceTotals, ItemDimensions, JobItem, JobTotals,
    RowEdit,
};

// -------------------------
// Request DTOs
// -------------------------

/// Calculator input. Each field may be a number or free text; missing
/// fields count as zero.
#[derive(Debug, Default, Deserialize)]
pub struct VolumeRequest {
    #[serde(default)]
    pub quantity: Option<FieldValue>,
    #[serde(default)]
    pub length: Option<FieldValue>,
    #[serde(default)]
    pub width: Option<FieldValue>,
    #[serde(default)]
    pub height: Option<FieldValue>,
}

impl VolumeRequest {
    pub fn dimensions(&self) -> ItemDimensions {
        let zero = FieldValue::default();
        ItemDimensions::from_fields(
            self.quantity.as_ref().unwrap_or(&zero),
            self.length.as_ref().unwrap_or(&zero),
            self.width.as_ref().unwrap_or(&zero),
            self.height.as_ref().unwrap_or(&zero),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct EditRowRequest {
    pub row: JobItem,
    pub edit: RowEdit,
}

#[derive(Debug, Deserialize)]
pub struct RowsRequest {
    #[serde(default)]
    pub job_id: Option<JobId>,
    pub rows: Vec<JobItem>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveRowRequest {
    #[serde(default)]
    pub job_id: Option<JobId>,
    pub rows: Vec<JobItem>,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct EditInvoiceLineRequest {
    pub line: InvoiceLine,
    pub edit: InvoiceLineEdit,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceLinesRequest {
    #[serde(default)]
    pub lines: Vec<InvoiceLine>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    pub job_id: JobId,
    pub total_quantity: f64,
    pub total_weight: f64,
    pub total_volume: f64,
    pub display_weight: String,
    pub display_volume: String,
}

impl TotalsResponse {
    pub fn new(job_id: JobId, totals: JobTotals) -> Self {
        Self {
            job_id,
            total_quantity: totals.total_quantity,
            total_weight: totals.total_weight,
            total_volume: totals.total_volume,
            display_weight: totals.display_weight(),
            display_volume: totals.display_volume(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RowsResponse {
    pub job_id: JobId,
    pub rows: Vec<JobItem>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceTotalsResponse {
    pub sub_total: f64,
    pub total_tax: f64,
    pub total: f64,
    pub display_sub_total: String,
    pub display_tax: String,
    pub display_total: String,
}

impl From<InvoiceTotals> for InvoiceTotalsResponse {
    fn from(totals: InvoiceTotals) -> Self {
        Self {
            sub_total: totals.sub_total,
            total_tax: totals.total_tax,
            total: totals.total,
            display_sub_total: totals.display_sub_total(),
            display_tax: totals.display_tax(),
            display_total: totals.display_total(),
        }
    }
}
