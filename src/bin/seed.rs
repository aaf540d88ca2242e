use resto_reviews_be::db::{schema::ensure_schema, seed::seed_database};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let postgres = resto_reviews_be::connect_pool().await;

    if let Err(e) = ensure_schema(postgres.clone()).await {
        tracing::error!("Failed to prepare database schema: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = seed_database(postgres).await {
        tracing::error!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}
