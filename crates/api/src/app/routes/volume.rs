use axum::{Json, response::IntoResponse};

use freightdesk_freight::assess;

use crate::app::dto;

/// Billable CBM for one item. Never fails on field content.
pub async fn calculate(Json(body): Json<dto::VolumeRequest>) -> impl IntoResponse {
    let dims = body.dimensions();
    let assessment = assess(&dims);
    tracing::debug!(volume = assessment.volume, band = ?assessment.band, "volume calculated");
    Json(assessment)
}
