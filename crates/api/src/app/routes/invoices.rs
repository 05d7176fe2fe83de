use axum::{Json, Router, response::IntoResponse, routing::post};

use freightdesk_freight::InvoiceTotals;

use crate::app::dto;

pub fn router() -> Router {
    Router::new()
        .route("/lines/edit", post(edit_line))
        .route("/totals", post(totals))
}

/// Apply a field edit to an invoice line and return the updated line.
pub async fn edit_line(Json(body): Json<dto::EditInvoiceLineRequest>) -> impl IntoResponse {
    Json(body.line.apply_edit(&body.edit))
}

pub async fn totals(Json(body): Json<dto::InvoiceLinesRequest>) -> impl IntoResponse {
    let totals = InvoiceTotals::from_lines(&body.lines);
    Json(dto::InvoiceTotalsResponse::from(totals))
}
