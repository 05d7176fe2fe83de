use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::post,
};

use freightdesk_core::JobId;
use freightdesk_freight::JobItemTable;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/items/edit", post(edit_row))
        .route("/items/remove", post(remove_row))
        .route("/totals", post(totals))
}

/// Apply a single field edit to a row and return the updated row.
pub async fn edit_row(Json(body): Json<dto::EditRowRequest>) -> impl IntoResponse {
    Json(body.row.apply_edit(&body.edit))
}

pub async fn remove_row(Json(body): Json<dto::RemoveRowRequest>) -> Response {
    let job_id = body.job_id.unwrap_or_default();
    let mut table = match JobItemTable::from_rows(job_id, body.rows) {
        Ok(t) => t,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = table.remove_row(body.index) {
        return errors::domain_error_to_response(e);
    }

    Json(dto::RowsResponse {
        job_id,
        rows: table.rows().to_vec(),
    })
    .into_response()
}

pub async fn totals(Json(body): Json<dto::RowsRequest>) -> Response {
    let job_id: JobId = body.job_id.unwrap_or_default();
    match JobItemTable::from_rows(job_id, body.rows) {
        Ok(table) => Json(dto::TotalsResponse::new(job_id, table.totals())).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
