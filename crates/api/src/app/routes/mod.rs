use axum::{Router, routing::post};

pub mod invoices;
pub mod jobs;
pub mod system;
pub mod volume;

/// Router for the calculator, job item and invoice endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/volume", post(volume::calculate))
        .nest("/jobs", jobs::router())
        .nest("/invoices", invoices::router())
}
