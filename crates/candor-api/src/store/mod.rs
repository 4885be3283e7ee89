//! # Storage Layer
//!
//! Two backends behind one contract: Postgres (when `DATABASE_URL` is set)
//! and an in-process store (development and tests). Both expose an advisory
//! `is_used` lookup and an **atomic** insert of a review together with its
//! nullifier — the insert, not the lookup, is what enforces the
//! one-review-per-key-per-scope invariant under concurrency.

pub mod memory;

use thiserror::Error;

use candor_core::SubmissionError;

/// Faults from either storage backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The nullifier tuple is already recorded — the submission is a
    /// duplicate, whether it lost the race or arrived late.
    #[error("nullifier already recorded")]
    NullifierExists,

    /// The backend failed (connection loss, transaction fault).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for SubmissionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NullifierExists => SubmissionError::DuplicateSubmission,
            StoreError::Backend(msg) => SubmissionError::Storage(msg),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return StoreError::NullifierExists;
            }
        }
        StoreError::Backend(err.to_string())
    }
}
