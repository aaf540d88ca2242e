use chrono::{Duration, TimeZone, Utc};
use resto_reviews_be::{
    models::{Restaurant, Review, ReviewPage, review::PER_PAGE},
    render::{
        restaurant::{index_page, show_page},
        review::{rating_stars, review_list_fragment},
    },
};

fn make_review(id: i64, content: &str) -> Review {
    // Higher ids are newer, mirroring how the database orders pages
    Review {
        id,
        restaurant_id: 1,
        rating: Some(4),
        content: content.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(id),
    }
}

fn make_restaurant() -> Restaurant {
    Restaurant {
        id: 7,
        name: "The Golden Fork".to_string(),
        address: "12 Mulberry Street".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn test_fragment_preserves_input_order() {
    let reviews: Vec<Review> = (0..3)
        .map(|i| make_review(30 - i, &format!("review {}", 30 - i)))
        .collect();

    let fragment = review_list_fragment(&reviews);

    let pos_30 = fragment.find("review 30").unwrap();
    let pos_29 = fragment.find("review 29").unwrap();
    let pos_28 = fragment.find("review 28").unwrap();
    assert!(pos_30 < pos_29);
    assert!(pos_29 < pos_28);
}

// Appending per-page fragments must reproduce the ordering of rendering
// everything at once, which is what the infinite-scroll client relies on.
#[test]
fn test_concatenated_page_fragments_match_full_rendering() {
    let newest_first: Vec<Review> = (0..25)
        .map(|i| make_review(25 - i, &format!("review {}", 25 - i)))
        .collect();

    let mut appended = String::new();
    for chunk in newest_first.chunks(PER_PAGE as usize) {
        appended.push_str(&review_list_fragment(chunk));
    }

    assert_eq!(appended, review_list_fragment(&newest_first));
}

#[test]
fn test_fragment_escapes_review_content() {
    let reviews = vec![make_review(1, "<script>alert('x')</script> & more")];

    let fragment = review_list_fragment(&reviews);

    assert!(!fragment.contains("<script>"));
    assert!(fragment.contains("&lt;script&gt;"));
    assert!(fragment.contains("&amp; more"));
}

#[test]
fn test_rating_stars() {
    assert_eq!(rating_stars(Some(5)), "★★★★★");
    assert_eq!(rating_stars(Some(3)), "★★★☆☆");
    assert_eq!(rating_stars(Some(0)), "☆☆☆☆☆");
    assert_eq!(rating_stars(None), "Unrated");
}

#[test]
fn test_index_page_links_each_restaurant() {
    let restaurants = vec![make_restaurant()];

    let html = index_page(&restaurants);

    assert!(html.contains("href=\"/restaurants/7\""));
    assert!(html.contains("The Golden Fork"));
    assert!(html.contains("12 Mulberry Street"));
}

#[test]
fn test_show_page_includes_form_and_scroll_container() {
    let page = ReviewPage {
        reviews: vec![make_review(1, "lovely")],
        page: 1,
        total: 1,
    };

    let html = show_page(&make_restaurant(), &page, &[]);

    assert!(html.contains("data-infinite-scroll"));
    assert!(html.contains("data-page-url=\"/restaurants/7\""));
    assert!(html.contains("action=\"/restaurants/7/reviews\""));
    assert!(html.contains("data-modal-trigger"));
    assert!(html.contains("lovely"));
    assert!(!html.contains("form-errors"));
}

#[test]
fn test_show_page_surfaces_validation_errors() {
    let errors = vec!["Review content can't be blank".to_string()];

    let html = show_page(&make_restaurant(), &ReviewPage::empty(1), &errors);

    assert!(html.contains("form-errors"));
    assert!(html.contains("Review content can't be blank"));
    // The form starts expanded after a failed submission
    assert!(!html.contains("data-modal-trigger"));
}

#[test]
fn test_show_page_escapes_restaurant_fields() {
    let mut restaurant = make_restaurant();
    restaurant.name = "Bob's <Diner>".to_string();

    let html = show_page(&restaurant, &ReviewPage::empty(1), &[]);

    assert!(html.contains("Bob's &lt;Diner&gt;"));
}
