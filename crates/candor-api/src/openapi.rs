//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single spec served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Candor API — Anonymous Course Reviews",
        version = "0.3.2",
        description = "Submission verification pipeline for anonymous, zero-knowledge-gated course reviews.\n\nProvides:\n- **Review submission** gated by enrollment proof verification, content signature verification, and one-time-use nullifiers\n- **Public review listings**, flat and grouped by college/department\n\nReviews are anonymous: no identity is stored, only public-key coordinates bound to a per-course nullifier.",
        license(name = "BUSL-1.1")
    ),
    servers(
        (url = "http://localhost:5001", description = "Local development server"),
    ),
    paths(
        crate::routes::reviews::submit_review,
        crate::routes::reviews::list_reviews,
        crate::routes::reviews::list_reviews_by_department,
    ),
    components(schemas(
        crate::routes::reviews::SubmitReviewResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "reviews", description = "Review submission and listings")
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
