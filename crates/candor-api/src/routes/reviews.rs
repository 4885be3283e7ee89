// SPDX-License-Identifier: BUSL-1.1
//! # Review Endpoints
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `POST` | `/v1/reviews` | `submit_review` |
//! | `GET` | `/v1/reviews` | `list_reviews` |
//! | `GET` | `/v1/reviews/by-department` | `list_reviews_by_department` |
//!
//! The POST handler is a thin adapter: it hands the parsed field map to
//! the submission pipeline and maps the outcome onto HTTP. All protocol
//! logic lives in [`crate::submission`].

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use candor_core::{Review, ReviewSubmission};

use crate::error::AppError;
use crate::state::AppState;
use crate::submission;

/// Response for an accepted submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitReviewResponse {
    /// Identifier of the persisted review.
    #[schema(value_type = String)]
    pub id: String,
    pub message: String,
}

/// Reviews grouped college → department → reviews, for the course wall.
pub type GroupedReviews = BTreeMap<String, BTreeMap<String, Vec<Review>>>;

/// Build the reviews router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/reviews", post(submit_review).get(list_reviews))
        .route("/v1/reviews/by-department", get(list_reviews_by_department))
}

/// POST /v1/reviews — Submit a review through the verification pipeline.
#[utoipa::path(
    post,
    path = "/v1/reviews",
    responses(
        (status = 201, description = "Review accepted and persisted", body = SubmitReviewResponse),
        (status = 409, description = "Nullifier already consumed for this scope", body = crate::error::ErrorBody),
        (status = 422, description = "Proof or signature verification failed", body = crate::error::ErrorBody),
    ),
    tag = "reviews"
)]
async fn submit_review(
    State(state): State<AppState>,
    Json(submission): Json<ReviewSubmission>,
) -> Result<impl IntoResponse, AppError> {
    let id = submission::submit(&state, submission).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitReviewResponse {
            id: id.to_string(),
            message: "Review added successfully".to_string(),
        }),
    ))
}

/// GET /v1/reviews — All reviews, oldest first.
#[utoipa::path(
    get,
    path = "/v1/reviews",
    responses(
        (status = 200, description = "All persisted reviews"),
    ),
    tag = "reviews"
)]
async fn list_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reviews = state
        .list_reviews()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(reviews))
}

/// GET /v1/reviews/by-department — Reviews grouped by college and department.
#[utoipa::path(
    get,
    path = "/v1/reviews/by-department",
    responses(
        (status = 200, description = "Reviews nested by college, then department"),
    ),
    tag = "reviews"
)]
async fn list_reviews_by_department(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = state
        .list_reviews()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let mut grouped: GroupedReviews = BTreeMap::new();
    for review in reviews {
        grouped
            .entry(review.college.clone())
            .or_default()
            .entry(review.department.clone())
            .or_default()
            .push(review);
    }
    Ok(Json(grouped))
}
