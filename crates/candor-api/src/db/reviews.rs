// SPDX-License-Identifier: BUSL-1.1
//! Review and nullifier persistence operations.
//!
//! All functions take a `&PgPool`. The review/nullifier pair is written in
//! a single transaction; the `nullifiers_scope_key_unique` constraint turns
//! a lost duplicate race into a clean `NullifierExists` instead of a second
//! committed review.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use candor_core::{NullifierKey, Review, ReviewId};

use crate::store::StoreError;

/// Advisory lookup: has this nullifier tuple been consumed?
///
/// The authoritative check is the unique constraint inside
/// [`insert_with_nullifier`]; this exists so a duplicate can be rejected
/// before any proof-verification work is spent on it.
pub async fn is_used(pool: &PgPool, key: &NullifierKey) -> Result<bool, sqlx::Error> {
    let row: Option<(i64,)> = sqlx::query_as(
        "SELECT id FROM nullifiers
         WHERE college = $1 AND department = $2 AND class_name = $3
           AND pk_x = $4 AND pk_y = $5
         LIMIT 1",
    )
    .bind(&key.scope.college)
    .bind(&key.scope.department)
    .bind(&key.scope.course)
    .bind(key.pk_x.as_str())
    .bind(key.pk_y.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row.is_some())
}

/// Atomically insert a review and consume its nullifier.
///
/// One transaction: the nullifier insert goes first so a concurrent
/// duplicate trips the unique constraint before the review row is written.
/// Nothing is committed on any failure path.
pub async fn insert_with_nullifier(
    pool: &PgPool,
    review: &Review,
    key: &NullifierKey,
) -> Result<(), StoreError> {
    let mut tx = pool.begin().await.map_err(StoreError::from)?;

    sqlx::query(
        "INSERT INTO nullifiers (college, department, class_name, pk_x, pk_y, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(&key.scope.college)
    .bind(&key.scope.department)
    .bind(&key.scope.course)
    .bind(key.pk_x.as_str())
    .bind(key.pk_y.as_str())
    .bind(review.created_at)
    .execute(&mut *tx)
    .await
    .map_err(StoreError::from)?;

    sqlx::query(
        "INSERT INTO reviews (id, text, rating, recommend, grade, professor_name,
         class_name, major, college, department, proof, signature, pk_x, pk_y, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
    )
    .bind(review.id.as_uuid())
    .bind(&review.text)
    .bind(review.rating)
    .bind(review.recommend)
    .bind(&review.grade)
    .bind(&review.professor_name)
    .bind(&review.class_name)
    .bind(&review.major)
    .bind(&review.college)
    .bind(&review.department)
    .bind(&review.proof)
    .bind(&review.signature)
    .bind(&review.public_key_x)
    .bind(&review.public_key_y)
    .bind(review.created_at)
    .execute(&mut *tx)
    .await
    .map_err(StoreError::from)?;

    tx.commit().await.map_err(StoreError::from)
}

/// Fetch all reviews, oldest first.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ReviewRow>(
        "SELECT id, text, rating, recommend, grade, professor_name, class_name,
         major, college, department, proof, signature, pk_x, pk_y, created_at
         FROM reviews ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ReviewRow::into_record).collect())
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    text: String,
    rating: f64,
    recommend: bool,
    grade: String,
    professor_name: String,
    class_name: String,
    major: String,
    college: String,
    department: String,
    proof: String,
    signature: String,
    pk_x: String,
    pk_y: String,
    created_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_record(self) -> Review {
        Review {
            id: ReviewId::from_uuid(self.id),
            text: self.text,
            rating: self.rating,
            recommend: self.recommend,
            grade: self.grade,
            professor_name: self.professor_name,
            class_name: self.class_name,
            major: self.major,
            college: self.college,
            department: self.department,
            proof: self.proof,
            signature: self.signature,
            public_key_x: self.pk_x,
            public_key_y: self.pk_y,
            created_at: self.created_at,
        }
    }
}
