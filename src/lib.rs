pub mod db;
pub mod errors;
pub mod http;
mod middleware;
pub mod models;
pub mod render;
mod state;

use axum::{Router, middleware as axum_middleware};
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};
use state::AppState;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let postgres = connect_pool().await;

    // Make sure the tables exist before serving anything
    if let Err(e) = db::schema::ensure_schema(postgres.clone()).await {
        tracing::error!("Failed to prepare database schema: {}", e);
        panic!("Failed to prepare database schema: {}", e);
    }

    let state = AppState { postgres };

    let global_rate_limiter = create_global_rate_limiter();

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { "404 Not Found" });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3001);

    tracing::info!("Resto Reviews server running at http://127.0.0.1:{port}/restaurants");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}

pub async fn connect_pool() -> sqlx::PgPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
