//! # In-Memory Store
//!
//! Development/test backend. A single mutex guards both the review list and
//! the nullifier set, so the existence check and the insert happen under
//! one lock acquisition — the in-memory equivalent of the database's
//! unique-constraint transaction.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use candor_core::{NullifierKey, Review};

use super::StoreError;

#[derive(Default)]
struct Inner {
    reviews: Vec<Review>,
    nullifiers: HashSet<NullifierKey>,
}

/// In-process review and nullifier store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advisory lookup: has this nullifier tuple been consumed?
    pub fn is_used(&self, key: &NullifierKey) -> bool {
        self.inner.lock().nullifiers.contains(key)
    }

    /// Atomically record a review and consume its nullifier.
    ///
    /// Fails with [`StoreError::NullifierExists`] without writing anything
    /// if the tuple is already present.
    pub fn insert_with_nullifier(
        &self,
        review: Review,
        key: NullifierKey,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        if !inner.nullifiers.insert(key) {
            return Err(StoreError::NullifierExists);
        }
        inner.reviews.push(review);
        Ok(())
    }

    /// All persisted reviews, in insertion order.
    pub fn list_all(&self) -> Vec<Review> {
        self.inner.lock().reviews.clone()
    }

    pub fn review_count(&self) -> usize {
        self.inner.lock().reviews.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candor_core::{PubKeyCoord, ReviewId, Scope};
    use chrono::Utc;

    fn test_key(course: &str) -> NullifierKey {
        NullifierKey::new(
            Scope::new("Olin", "ECE", course),
            PubKeyCoord::new("ab"),
            PubKeyCoord::new("cd"),
        )
    }

    fn test_review() -> Review {
        Review {
            id: ReviewId::new(),
            text: "solid".into(),
            rating: 4.0,
            recommend: true,
            grade: "NOT_USED".into(),
            professor_name: "Prof".into(),
            class_name: "Signals".into(),
            major: "NOT_USED".into(),
            college: "Olin".into(),
            department: "ECE".into(),
            proof: "00".into(),
            signature: "00".into(),
            public_key_x: "0".repeat(64),
            public_key_y: "0".repeat(64),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn insert_then_lookup() {
        let store = MemoryStore::new();
        let key = test_key("Signals");
        assert!(!store.is_used(&key));
        store.insert_with_nullifier(test_review(), key.clone()).unwrap();
        assert!(store.is_used(&key));
        assert_eq!(store.review_count(), 1);
    }

    #[test]
    fn second_insert_with_same_key_fails_without_writing() {
        let store = MemoryStore::new();
        let key = test_key("Signals");
        store.insert_with_nullifier(test_review(), key.clone()).unwrap();
        let err = store.insert_with_nullifier(test_review(), key).unwrap_err();
        assert!(matches!(err, StoreError::NullifierExists));
        assert_eq!(store.review_count(), 1);
    }

    #[test]
    fn distinct_scopes_do_not_collide() {
        let store = MemoryStore::new();
        store
            .insert_with_nullifier(test_review(), test_key("Signals"))
            .unwrap();
        store
            .insert_with_nullifier(test_review(), test_key("Circuits"))
            .unwrap();
        assert_eq!(store.review_count(), 2);
    }

    #[test]
    fn concurrent_identical_inserts_commit_exactly_once() {
        let store = MemoryStore::new();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                store.insert_with_nullifier(test_review(), test_key("Signals"))
            }));
        }
        let committed = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.is_ok())
            .count();
        assert_eq!(committed, 1);
        assert_eq!(store.review_count(), 1);
    }
}
