use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    db::{
        restaurant::{get_restaurant_by_id, list_restaurants},
        review::get_review_page,
    },
    render,
    state::AppState,
};

// Signed so that `?page=-1` deserializes and gets clamped to the first
// page instead of bouncing off the extractor with a 400.
#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

pub async fn list_restaurants_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let restaurants = list_restaurants(state.postgres).await.map_err(|e| {
        tracing::error!("Failed to list restaurants: {}", e);
        e.to_response()
    })?;

    Ok(Html(render::restaurant::index_page(&restaurants)))
}

/// Restaurant detail with content negotiation: HTML requests get the full
/// page, JSON requests get the rendered fragment for the requested review
/// page so the infinite-scroll client can append it.
pub async fn show_restaurant_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let page = query.page.unwrap_or(1);

    let restaurant = get_restaurant_by_id(id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch restaurant {}: {}", id, e);
            e.to_response()
        })?;

    let reviews = get_review_page(id, page, state.postgres).await.map_err(|e| {
        tracing::error!("Failed to fetch reviews for restaurant {}: {}", id, e);
        e.to_response()
    })?;

    if wants_json(&headers) {
        let fragment = render::review_list_fragment(&reviews.reviews);
        Ok(Json(json!({ "reviews": fragment })).into_response())
    } else {
        Ok(Html(render::restaurant::show_page(&restaurant, &reviews, &[])).into_response())
    }
}

pub fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}
