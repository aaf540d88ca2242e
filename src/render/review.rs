use html_escape::encode_text;

use crate::models::Review;

/// Renders one page of reviews as `<li>` items. The same markup feeds the
/// initial HTML page and the JSON fragment the infinite-scroll client
/// appends, so both paths always agree on ordering and formatting.
pub fn review_list_fragment(reviews: &[Review]) -> String {
    let mut html = String::new();
    for review in reviews {
        html.push_str(&format!(
            "<li class=\"review\" data-review-id=\"{}\">\n\
            <span class=\"review-rating\">{}</span>\n\
            <p class=\"review-content\">{}</p>\n\
            <time datetime=\"{}\">{}</time>\n\
            </li>\n",
            review.id,
            rating_stars(review.rating),
            encode_text(&review.content),
            review.created_at.to_rfc3339(),
            review.created_at.format("%B %-d, %Y"),
        ));
    }
    html
}

pub fn rating_stars(rating: Option<i16>) -> String {
    match rating {
        Some(r) => {
            let filled = r.clamp(0, 5) as usize;
            format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
        }
        None => "Unrated".to_string(),
    }
}
