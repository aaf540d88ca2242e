use once_cell::sync::Lazy;
use rand::Rng;
use sqlx::PgPool;

use crate::{
    db::{restaurant::create_restaurant, review::create_review},
    errors::AppError,
    models::NewReview,
};

const RESTAURANT_COUNT: usize = 10;
const REVIEWS_PER_RESTAURANT: usize = 100;

static NAME_PARTS: Lazy<(Vec<&'static str>, Vec<&'static str>)> = Lazy::new(|| {
    (
        vec![
            "Golden", "Rusty", "Blue", "Copper", "Velvet", "Smoky", "Wild", "Little", "Old",
            "Crimson",
        ],
        vec![
            "Fork", "Kettle", "Oven", "Table", "Spoon", "Lantern", "Harvest", "Skillet", "Garden",
            "Hearth",
        ],
    )
});

static STREETS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Mulberry Street",
        "Harbor Avenue",
        "Elm Road",
        "Station Lane",
        "Orchard Way",
        "Canal Street",
        "Bridge Row",
        "Market Square",
        "Chestnut Boulevard",
        "Willow Drive",
    ]
});

static REVIEW_PHRASES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "The pasta was cooked to perfection and the staff were lovely.",
        "A bit noisy on weekends but the food makes up for it.",
        "Generous portions, fair prices. Will come back.",
        "The dessert menu alone is worth the trip.",
        "Service was slow but the flavors were outstanding.",
        "Best brunch spot in the neighborhood, hands down.",
        "The seasonal menu keeps things interesting every visit.",
        "Cozy atmosphere, great for a quiet dinner.",
        "The chef clearly cares about sourcing good ingredients.",
        "Decent food, though the wait for a table was long.",
        "Their house bread is dangerously good.",
        "An underrated gem. The reviews undersell it.",
    ]
});

/// Wipes both tables and repopulates them with sample data. Reviews get
/// random ratings and phrases so pagination has enough variety to exercise.
pub async fn seed_database(postgres: PgPool) -> Result<(), AppError> {
    tracing::info!("Destroying restaurants...");
    sqlx::query("DELETE FROM restaurants")
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to clear restaurants: {}", e)))?;

    tracing::info!("Creating restaurants and reviews...");
    let mut rng = rand::rng();
    let (adjectives, nouns) = &*NAME_PARTS;

    for i in 0..RESTAURANT_COUNT {
        let name = format!(
            "The {} {}",
            adjectives[rng.random_range(0..adjectives.len())],
            nouns[rng.random_range(0..nouns.len())]
        );
        let address = format!(
            "{} {}",
            rng.random_range(1..200),
            STREETS[i % STREETS.len()]
        );
        let restaurant = create_restaurant(name, address, postgres.clone()).await?;

        for _ in 0..REVIEWS_PER_RESTAURANT {
            let new_review = NewReview {
                rating: Some(rng.random_range(1..=5)),
                content: REVIEW_PHRASES[rng.random_range(0..REVIEW_PHRASES.len())].to_string(),
            };
            create_review(restaurant.id, new_review, postgres.clone()).await?;
        }
    }

    let restaurants = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurants")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count restaurants: {}", e)))?;
    let reviews = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count reviews: {}", e)))?;

    tracing::info!("Created {} restaurants and {} reviews.", restaurants, reviews);

    Ok(())
}
