use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{
        Review, ReviewPage,
        review::{PER_PAGE, page_offset},
    },
};

/// Fetches one page of a restaurant's reviews, newest first. Ties on the
/// creation timestamp are broken by id so pages never overlap.
pub async fn get_review_page(
    restaurant_id: i64,
    page: i64,
    postgres: PgPool,
) -> Result<ReviewPage, AppError> {
    let page = page.max(1);

    let reviews = sqlx::query_as::<_, Review>(
        "SELECT id, restaurant_id, rating, content, created_at
			FROM reviews
			WHERE restaurant_id = $1
			ORDER BY created_at DESC, id DESC
			LIMIT $2 OFFSET $3",
    )
    .bind(restaurant_id)
    .bind(PER_PAGE)
    .bind(page_offset(page))
    .fetch_all(&postgres)
    .await
    .map_err(|e| {
        AppError::DatabaseError(format!(
            "Failed to fetch reviews for restaurant {}: {}",
            restaurant_id, e
        ))
    })?;

    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE restaurant_id = $1")
        .bind(restaurant_id)
        .fetch_one(&postgres)
        .await
        .map_err(|e| {
            AppError::DatabaseError(format!(
                "Failed to count reviews for restaurant {}: {}",
                restaurant_id, e
            ))
        })?;

    Ok(ReviewPage {
        reviews,
        page,
        total,
    })
}
