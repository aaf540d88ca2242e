use sqlx::PgPool;

use crate::errors::AppError;

/// Creates the two tables and the pagination index if they don't exist yet.
/// Runs on every startup so a fresh database works without a migration step.
pub async fn ensure_schema(postgres: PgPool) -> Result<(), AppError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS restaurants (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create restaurants table: {}", e)))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS reviews (
            id BIGSERIAL PRIMARY KEY,
            restaurant_id BIGINT NOT NULL REFERENCES restaurants (id) ON DELETE CASCADE,
            rating SMALLINT,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create reviews table: {}", e)))?;

    // Matches the page query's ordering
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_reviews_restaurant_created
			ON reviews (restaurant_id, created_at DESC, id DESC)",
    )
    .execute(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create reviews index: {}", e)))?;

    Ok(())
}
