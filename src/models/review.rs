use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use sqlx::FromRow;

use crate::errors::AppError;

/// Fixed number of reviews per page, newest first.
pub const PER_PAGE: i64 = 10;

pub const MAX_CONTENT_LEN: usize = 2000;

#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub id: i64,
    pub restaurant_id: i64,
    pub rating: Option<i16>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One page of a restaurant's reviews plus the overall count.
#[derive(Debug, Clone)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub page: i64,
    pub total: i64,
}

impl ReviewPage {
    pub fn empty(page: i64) -> Self {
        Self {
            reviews: Vec::new(),
            page,
            total: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub rating: Option<i16>,
    pub content: String,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.content.trim().is_empty() {
            return Err(AppError::Validation("Review content can't be blank".into()));
        }
        if self.content.chars().count() > MAX_CONTENT_LEN {
            return Err(AppError::Validation(format!(
                "Review content is too long (maximum is {} characters)",
                MAX_CONTENT_LEN
            )));
        }
        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(AppError::Validation(
                    "Rating must be between 1 and 5".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Pages are 1-based; missing, zero, and negative pages are clamped to the
/// first page.
pub fn page_offset(page: i64) -> i64 {
    (page.max(1) - 1) * PER_PAGE
}

// HTML forms submit an unselected rating as an empty string
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<i16>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<i16>().map(Some).map_err(serde::de::Error::custom),
    }
}
