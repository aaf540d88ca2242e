use sqlx::PgPool;

use crate::{errors::AppError, models::Restaurant};

/// Restaurants are only ever created by the seeder; there is no public
/// endpoint for this.
pub async fn create_restaurant(
    name: String,
    address: String,
    postgres: PgPool,
) -> Result<Restaurant, AppError> {
    let restaurant = sqlx::query_as::<_, Restaurant>(
        "INSERT INTO restaurants (name, address)
        VALUES ($1, $2)
        RETURNING id, name, address, created_at",
    )
    .bind(&name)
    .bind(&address)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create restaurant: {}", e)))?;

    Ok(restaurant)
}
