//! Invoice lines and totals.
//!
//! A line's amount is `quantity × unit_amount` at two decimals, recomputed
//! whenever either field is edited. Invoice totals add a flat 10% tax on top
//! of the sum of line amounts.

use serde::{Deserialize, Serialize};

use crate::decimal::{format_fixed, round_to};
use crate::field::FieldValue;

/// Flat tax rate applied to the invoice sub-total.
pub const TAX_RATE: f64 = 0.1;
/// Sub-total multiplier giving the tax-inclusive total.
pub const TAX_INCLUSIVE_MULTIPLIER: f64 = 1.1;
/// Decimal places of money amounts.
pub const AMOUNT_DECIMALS: u32 = 2;

/// A single field change on an invoice line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum InvoiceLineEdit {
    Name { value: String },
    UnitAmount { value: FieldValue },
    Quantity { value: FieldValue },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Stored line id; `None` until the line is saved.
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    unit_amount: f64,
    #[serde(default)]
    quantity: f64,
    #[serde(default)]
    line_amount: f64,
}

impl InvoiceLine {
    /// Unsaved, unnamed line priced at `unit_amount` (e.g. the company's LCL
    /// rate) with zero quantity.
    pub fn new(unit_amount: f64) -> Self {
        Self {
            id: None,
            name: String::new(),
            unit_amount,
            quantity: 0.0,
            line_amount: 0.0,
        }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_amount(&self) -> f64 {
        self.unit_amount
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn line_amount(&self) -> f64 {
        self.line_amount
    }

    /// Return the line with `edit` applied.
    pub fn apply_edit(&self, edit: &InvoiceLineEdit) -> InvoiceLine {
        let mut line = self.clone();
        match edit {
            InvoiceLineEdit::Name { value } => {
                line.name = value.clone();
            }
            InvoiceLineEdit::UnitAmount { value } => {
                line.unit_amount = value.as_signed_number();
                line.line_amount = line_amount(line.quantity, line.unit_amount);
            }
            InvoiceLineEdit::Quantity { value } => {
                line.quantity = value.as_signed_number();
                line.line_amount = line_amount(line.quantity, line.unit_amount);
            }
        }
        line
    }
}

/// `quantity × unit_amount` at two decimals.
pub fn line_amount(quantity: f64, unit_amount: f64) -> f64 {
    round_to(quantity * unit_amount, AMOUNT_DECIMALS)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub sub_total: f64,
    pub total_tax: f64,
    pub total: f64,
}

impl InvoiceTotals {
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a InvoiceLine>) -> Self {
        let sub_total = lines
            .into_iter()
            .fold(0.0, |acc, line| acc + line.line_amount());
        let totals = InvoiceTotals {
            sub_total,
            total_tax: sub_total * TAX_RATE,
            total: sub_total * TAX_INCLUSIVE_MULTIPLIER,
        };
        tracing::trace!(sub_total, total = totals.total, "invoice totals computed");
        totals
    }

    pub fn display_sub_total(&self) -> String {
        format_fixed(self.sub_total, AMOUNT_DECIMALS)
    }

    pub fn display_tax(&self) -> String {
        format_fixed(self.total_tax, AMOUNT_DECIMALS)
    }

    pub fn display_total(&self) -> String {
        format_fixed(self.total, AMOUNT_DECIMALS)
    }
}
