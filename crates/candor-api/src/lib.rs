//! # candor-api — Axum API Service for the Candor Review Stack
//!
//! The HTTP layer is a thin transport adapter over the submission
//! verification pipeline: it parses the field map, hands it to
//! [`submission::submit`], and maps the outcome onto status codes. The
//! pipeline — variant selection, nullifier registry, proof gateway,
//! signature check, atomic commit — is where the protocol lives.
//!
//! ## API Surface
//!
//! | Prefix | Module | Domain |
//! |--------|--------|--------|
//! | `/v1/reviews` | [`routes::reviews`] | Submission + listings |
//! | `/health/*` | — | Probes |
//! | `/openapi.json` | [`openapi`] | Spec |
//!
//! ## Middleware Stack
//!
//! ```text
//! TraceLayer → CorsLayer → Handler
//! ```
//!
//! No authentication: submissions authenticate themselves through the
//! proof and signature, and listings are public.

pub mod db;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes are mounted alongside the API routes; there is no
/// authenticated tier to separate them from.
pub fn app(state: AppState) -> Router {
    // Restrict CORS to the configured frontend origin; fall back to any
    // origin if the configured value is not a valid header.
    let cors = match state.config.allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(
                origin = %state.config.allowed_origin,
                "invalid CORS origin, allowing any"
            );
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any)
        }
    };

    // Body size limit: 2 MiB. Proofs are large hex blobs but bounded;
    // this prevents OOM from oversized request bodies.
    Router::new()
        .merge(routes::reviews::router())
        .merge(openapi::router())
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health/liveness — process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// GET /health/readiness — able to serve traffic.
async fn readiness() -> &'static str {
    "ready"
}
