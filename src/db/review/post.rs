use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{NewReview, Review},
};

pub async fn create_review(
    restaurant_id: i64,
    new_review: NewReview,
    postgres: PgPool,
) -> Result<Review, AppError> {
    new_review.validate()?;

    // The foreign key check doubles as the existence check; surface a
    // missing restaurant as NotFound rather than a database error.
    let review = sqlx::query_as::<_, Review>(
        "INSERT INTO reviews (restaurant_id, rating, content)
        VALUES ($1, $2, $3)
        RETURNING id, restaurant_id, rating, content, created_at",
    )
    .bind(restaurant_id)
    .bind(new_review.rating)
    .bind(new_review.content.trim())
    .fetch_one(&postgres)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::NotFound(format!("Restaurant {} not found", restaurant_id))
        }
        _ => AppError::DatabaseError(format!("Failed to create review: {}", e)),
    })?;

    tracing::info!(
        "Created review {} for restaurant {}",
        review.id,
        restaurant_id
    );

    Ok(review)
}
