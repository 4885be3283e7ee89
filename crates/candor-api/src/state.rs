//! # Application State and Configuration
//!
//! [`AppState`] is cloned into every handler: configuration, the optional
//! Postgres pool, the in-memory fallback store, and the proof-verifier
//! capability. Storage dispatch lives here so the submission pipeline and
//! the listing routes never branch on the backend themselves.

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;

use candor_core::{NullifierKey, Review};
use candor_zkp::ProofVerifier;

use crate::db;
use crate::store::memory::MemoryStore;
use crate::store::StoreError;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen port (`CANDOR_PORT`, default 5001).
    pub port: u16,
    /// CORS allowed origin (`CANDOR_ALLOWED_ORIGIN`).
    pub allowed_origin: String,
    /// Path to the Barretenberg verifier binary (`CANDOR_BB_BIN`).
    pub bb_bin: PathBuf,
    /// Directory holding the four variant verification keys (`CANDOR_VK_DIR`).
    pub vk_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("CANDOR_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5001);
        let allowed_origin = std::env::var("CANDOR_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());
        let bb_bin = std::env::var("CANDOR_BB_BIN")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("bb"));
        let vk_dir = std::env::var("CANDOR_VK_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./keys"));
        Self {
            port,
            allowed_origin,
            bb_bin,
            vk_dir,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 5001,
            allowed_origin: "http://localhost:5173".to_string(),
            bb_bin: PathBuf::from("bb"),
            vk_dir: PathBuf::from("./keys"),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db_pool: Option<PgPool>,
    pub memory: MemoryStore,
    pub verifier: Arc<dyn ProofVerifier>,
}

impl AppState {
    pub fn new(config: AppConfig, db_pool: Option<PgPool>, verifier: Arc<dyn ProofVerifier>) -> Self {
        Self {
            config,
            db_pool,
            memory: MemoryStore::new(),
            verifier,
        }
    }

    /// In-memory state with default config — the test and development mode.
    pub fn in_memory(verifier: Arc<dyn ProofVerifier>) -> Self {
        Self::new(AppConfig::default(), None, verifier)
    }

    /// Advisory nullifier lookup against whichever backend is active.
    pub async fn nullifier_used(&self, key: &NullifierKey) -> Result<bool, StoreError> {
        match &self.db_pool {
            Some(pool) => db::reviews::is_used(pool, key).await.map_err(StoreError::from),
            None => Ok(self.memory.is_used(key)),
        }
    }

    /// Atomic review + nullifier commit against whichever backend is active.
    pub async fn commit_review(&self, review: &Review, key: &NullifierKey) -> Result<(), StoreError> {
        match &self.db_pool {
            Some(pool) => db::reviews::insert_with_nullifier(pool, review, key).await,
            None => self.memory.insert_with_nullifier(review.clone(), key.clone()),
        }
    }

    /// All persisted reviews.
    pub async fn list_reviews(&self) -> Result<Vec<Review>, StoreError> {
        match &self.db_pool {
            Some(pool) => db::reviews::list_all(pool).await.map_err(StoreError::from),
            None => Ok(self.memory.list_all()),
        }
    }
}
