//! # Submission Verification Pipeline
//!
//! The accept-or-reject decision for one review submission, in fixed order
//! with short-circuit on first failure:
//!
//! 1. Field extraction — canonical key coordinates, scope, nullifier tuple.
//!    Never rejects on its own; missing fields arrived as empty strings.
//! 2. Advisory nullifier check — skips proof work for obvious duplicates.
//! 3. Variant selection + proof verification through the gateway.
//! 4. Content signature verification.
//! 5. Rating/recommend normalization — never rejects.
//! 6. Atomic commit of the review together with its nullifier. The storage
//!    uniqueness constraint is the authoritative duplicate guard; losing
//!    that race yields the same rejection as failing step 2.
//!
//! Each submission runs to `Committed` or `Rejected`; there is no partial
//! state and no resumption.

use chrono::Utc;

use candor_core::{
    normalize_rating, normalize_recommend, Disclosure, Review, ReviewId, ReviewSubmission,
    SubmissionError,
};
use candor_zkp::{ProofGateway, ProofVariant};

use crate::state::AppState;

/// Run one submission through the pipeline.
///
/// Returns the persisted review id on acceptance. Every rejection and
/// every fault is a [`SubmissionError`]; nothing panics across this
/// boundary.
pub async fn submit(
    state: &AppState,
    submission: ReviewSubmission,
) -> Result<ReviewId, SubmissionError> {
    // Step 1: scope + canonical nullifier tuple.
    let key = submission.nullifier_key();

    // Step 2: advisory duplicate check before any expensive work.
    if state.nullifier_used(&key).await? {
        return Err(SubmissionError::DuplicateSubmission);
    }

    // Step 3: disclosure translation, variant selection, proof check.
    // The gateway short-circuits empty/non-hex proofs without touching the
    // backend; the backend itself runs on the blocking pool.
    let grade = Disclosure::from_wire(&submission.grade);
    let major = Disclosure::from_wire(&submission.major);
    let variant = ProofVariant::select(&grade, &major);

    let gateway = ProofGateway::new(state.verifier.clone());
    let proof_hex = submission.proof.clone();
    let proof_ok = tokio::task::spawn_blocking(move || gateway.check(&proof_hex, variant))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "proof verification task failed");
            SubmissionError::ProofVerificationFailed
        })?;
    if !proof_ok {
        return Err(SubmissionError::ProofVerificationFailed);
    }

    // Step 4: the signature binds the review text to the claimed key pair.
    if !candor_crypto::check_signature(&submission.signature, &key.pk_x, &key.pk_y, &submission.text)
    {
        return Err(SubmissionError::InvalidSignature);
    }

    // Step 5: lossy normalization.
    let rating = normalize_rating(&submission.rating);
    let recommend = normalize_recommend(&submission.recommend);

    // Step 6: build the record and commit atomically with the nullifier.
    let review = Review {
        id: ReviewId::new(),
        text: submission.text,
        rating,
        recommend,
        grade: grade.to_wire(),
        professor_name: submission.professor_name,
        class_name: submission.class_name,
        major: major.to_wire(),
        college: submission.college,
        department: submission.department,
        proof: submission.proof,
        signature: submission.signature,
        public_key_x: key.pk_x.as_str().to_string(),
        public_key_y: key.pk_y.as_str().to_string(),
        created_at: Utc::now(),
    };
    let id = review.id;

    state.commit_review(&review, &key).await?;
    tracing::info!(review_id = %id, scope = %key.scope, %variant, "review committed");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use candor_zkp::MockVerifier;
    use p256::ecdsa::{signature::Signer, Signature, SigningKey};
    use rand_core::OsRng;

    /// A submission whose signature genuinely verifies, with proof bytes
    /// `0xdead` pinned to the variant its disclosures select.
    fn signed_submission(grade: &str, major: &str, course: &str) -> ReviewSubmission {
        let signing = SigningKey::random(&mut OsRng);
        let point = signing.verifying_key().to_encoded_point(false);
        let text = "Lectures were dense but fair".to_string();
        let signature: Signature = signing.sign(text.as_bytes());

        ReviewSubmission {
            text,
            rating: "4.5".to_string(),
            recommend: "true".to_string(),
            grade: grade.to_string(),
            professor_name: "Prof. Alvarez".to_string(),
            class_name: course.to_string(),
            major: major.to_string(),
            proof: "dead".to_string(),
            department: "ECE".to_string(),
            college: "Olin".to_string(),
            signature: hex::encode(signature.to_der()),
            public_key_x: hex::encode(point.x().unwrap()),
            public_key_y: hex::encode(point.y().unwrap()),
        }
    }

    fn accepting_state() -> AppState {
        AppState::in_memory(Arc::new(MockVerifier::accepting()))
    }

    #[tokio::test]
    async fn valid_submission_commits() {
        let state = accepting_state();
        let sub = signed_submission("B+", "CS", "Signals");
        let id = submit(&state, sub).await.unwrap();

        let reviews = state.memory.list_all();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, id);
        assert_eq!(reviews[0].rating, 4.5);
        assert!(reviews[0].recommend);
        assert_eq!(reviews[0].grade, "B+");
    }

    #[tokio::test]
    async fn duplicate_submission_is_rejected() {
        let state = accepting_state();
        let sub = signed_submission("NOT_USED", "NOT_USED", "Signals");
        submit(&state, sub.clone()).await.unwrap();

        let err = submit(&state, sub).await.unwrap_err();
        assert!(matches!(err, SubmissionError::DuplicateSubmission));
        assert_eq!(state.memory.review_count(), 1);
    }

    #[tokio::test]
    async fn same_key_different_course_commits() {
        let state = accepting_state();
        let mut sub = signed_submission("NOT_USED", "NOT_USED", "Signals");
        submit(&state, sub.clone()).await.unwrap();

        sub.class_name = "Circuits".to_string();
        submit(&state, sub).await.unwrap();
        assert_eq!(state.memory.review_count(), 2);
    }

    #[tokio::test]
    async fn empty_proof_is_rejected_without_backend_call() {
        let mock = Arc::new(MockVerifier::accepting());
        let state = AppState::in_memory(mock.clone());
        let mut sub = signed_submission("NOT_USED", "NOT_USED", "Signals");
        sub.proof = String::new();

        let err = submit(&state, sub).await.unwrap_err();
        assert!(matches!(err, SubmissionError::ProofVerificationFailed));
        assert_eq!(mock.calls(), 0);
        assert_eq!(state.memory.review_count(), 0);
    }

    #[tokio::test]
    async fn rejected_proof_is_rejected() {
        let state = AppState::in_memory(Arc::new(MockVerifier::rejecting()));
        let sub = signed_submission("NOT_USED", "NOT_USED", "Signals");
        let err = submit(&state, sub).await.unwrap_err();
        assert!(matches!(err, SubmissionError::ProofVerificationFailed));
    }

    #[tokio::test]
    async fn unavailable_verifier_rejects_rather_than_faults() {
        let state = AppState::in_memory(Arc::new(MockVerifier::unavailable("bb missing")));
        let sub = signed_submission("NOT_USED", "NOT_USED", "Signals");
        let err = submit(&state, sub).await.unwrap_err();
        assert!(matches!(err, SubmissionError::ProofVerificationFailed));
    }

    #[tokio::test]
    async fn tampered_text_fails_signature_and_writes_nothing() {
        let state = accepting_state();
        let mut sub = signed_submission("NOT_USED", "NOT_USED", "Signals");
        sub.text.push('!');

        let err = submit(&state, sub).await.unwrap_err();
        assert!(matches!(err, SubmissionError::InvalidSignature));
        assert_eq!(state.memory.review_count(), 0);
        // The nullifier was not consumed either — a clean retry can land.
        let retry = signed_submission("NOT_USED", "NOT_USED", "Signals");
        submit(&state, retry).await.unwrap();
        assert_eq!(state.memory.review_count(), 1);
    }

    #[tokio::test]
    async fn proof_is_checked_under_the_selected_variant() {
        // Proof accepted only under variant 3; disclosures select variant 0.
        let mock = MockVerifier::accepting().accept(&[0xde, 0xad], ProofVariant::GradeAndMajor);
        let state = AppState::in_memory(Arc::new(mock));

        let sub = signed_submission("NOT_USED", "NOT_USED", "Signals");
        let err = submit(&state, sub).await.unwrap_err();
        assert!(matches!(err, SubmissionError::ProofVerificationFailed));

        // With both disclosed, the same proof verifies.
        let sub = signed_submission("B+", "CS", "Signals");
        submit(&state, sub).await.unwrap();
    }

    #[tokio::test]
    async fn garbled_rating_falls_back_not_rejects() {
        let state = accepting_state();
        let mut sub = signed_submission("NOT_USED", "NOT_USED", "Signals");
        sub.rating = "not-a-number".to_string();
        sub.recommend = "yes".to_string();
        submit(&state, sub).await.unwrap();

        let reviews = state.memory.list_all();
        assert_eq!(reviews[0].rating, 1.0);
        assert!(!reviews[0].recommend);
    }

    #[tokio::test]
    async fn withheld_fields_are_stored_as_sentinel() {
        let state = accepting_state();
        let mut sub = signed_submission("NOT_USED", "NOT_USED", "Signals");
        sub.grade = String::new(); // absent on the wire
        submit(&state, sub).await.unwrap();

        let reviews = state.memory.list_all();
        assert_eq!(reviews[0].grade, "NOT_USED");
        assert_eq!(reviews[0].major, "NOT_USED");
    }

    #[tokio::test]
    async fn concurrent_identical_submissions_commit_exactly_once() {
        let state = accepting_state();
        let sub = signed_submission("NOT_USED", "NOT_USED", "Signals");

        let mut handles = Vec::new();
        for _ in 0..8 {
            let state = state.clone();
            let sub = sub.clone();
            handles.push(tokio::spawn(async move { submit(&state, sub).await }));
        }

        let mut committed = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => committed += 1,
                Err(SubmissionError::DuplicateSubmission) => duplicates += 1,
                Err(other) => panic!("unexpected rejection: {other:?}"),
            }
        }
        assert_eq!(committed, 1);
        assert_eq!(duplicates, 7);
        assert_eq!(state.memory.review_count(), 1);
    }
}
