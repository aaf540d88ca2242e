use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    db::{
        restaurant::get_restaurant_by_id,
        review::{create_review, get_review_page},
    },
    errors::AppError,
    models::NewReview,
    render,
    state::AppState,
};

/// Creates a review from the detail page's form. Success redirects back to
/// the detail page; a validation failure re-renders it with the errors
/// surfaced above the (now expanded) form.
pub async fn create_review_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(payload): Form<NewReview>,
) -> Result<Response, (StatusCode, String)> {
    match create_review(id, payload, state.postgres.clone()).await {
        Ok(_) => Ok(Redirect::to(&format!("/restaurants/{}", id)).into_response()),
        Err(AppError::Validation(message)) => {
            let restaurant = get_restaurant_by_id(id, state.postgres.clone())
                .await
                .map_err(|e| e.to_response())?;
            let reviews = get_review_page(id, 1, state.postgres)
                .await
                .map_err(|e| e.to_response())?;

            let page = render::restaurant::show_page(&restaurant, &reviews, &[message]);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
        Err(err) => {
            tracing::error!("Error creating review for restaurant {}: {}", id, err);
            Err(err.to_response())
        }
    }
}
