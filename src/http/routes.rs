use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    http::handlers::{create_review_handler, list_restaurants_handler, show_restaurant_handler},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_restaurants_handler))
        .route("/restaurants", get(list_restaurants_handler))
        .route("/restaurants/{id}", get(show_restaurant_handler))
        .route("/restaurants/{id}/reviews", post(create_review_handler))
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(state)
}
