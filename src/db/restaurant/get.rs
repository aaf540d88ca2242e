use sqlx::PgPool;

use crate::{errors::AppError, models::Restaurant};

pub async fn list_restaurants(postgres: PgPool) -> Result<Vec<Restaurant>, AppError> {
    let restaurants = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address, created_at
			FROM restaurants
			ORDER BY name ASC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch restaurants: {}", e)))?;

    Ok(restaurants)
}

pub async fn get_restaurant_by_id(id: i64, postgres: PgPool) -> Result<Restaurant, AppError> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "SELECT id, name, address, created_at
			FROM restaurants
			WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch restaurant {}: {}", id, e)))?;

    restaurant.ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))
}
