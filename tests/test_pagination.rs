use axum::{extract::Query, http::Uri};
use resto_reviews_be::{
    http::handlers::restaurant::PageQuery,
    models::review::{PER_PAGE, page_offset},
};

#[test]
fn test_first_page_starts_at_zero() {
    assert_eq!(page_offset(1), 0);
}

#[test]
fn test_offsets_advance_by_page_size() {
    assert_eq!(page_offset(2), 10);
    assert_eq!(page_offset(3), 20);
    assert_eq!(page_offset(100), 990);
}

#[test]
fn test_zero_and_negative_pages_are_clamped_to_first() {
    assert_eq!(page_offset(0), page_offset(1));
    assert_eq!(page_offset(-1), page_offset(1));
    assert_eq!(page_offset(i64::MIN), page_offset(1));
}

// A negative page must survive query deserialization so the clamp can
// treat it as page 1, rather than the extractor rejecting it with a 400.
#[test]
fn test_negative_page_query_deserializes_and_clamps() {
    let uri: Uri = "/restaurants/1?page=-1".parse().unwrap();
    let Query(query) = Query::<PageQuery>::try_from_uri(&uri).unwrap();

    assert_eq!(query.page, Some(-1));
    assert_eq!(page_offset(query.page.unwrap()), 0);
}

#[test]
fn test_missing_page_query_defaults_to_first() {
    let uri: Uri = "/restaurants/1".parse().unwrap();
    let Query(query) = Query::<PageQuery>::try_from_uri(&uri).unwrap();

    assert_eq!(page_offset(query.page.unwrap_or(1)), 0);
}

#[test]
fn test_page_size_is_ten() {
    assert_eq!(PER_PAGE, 10);
}

// 25 reviews: page 1 covers the 10 newest, page 3 covers the last 5.
#[test]
fn test_25_reviews_slice_into_three_pages() {
    let newest_first: Vec<i64> = (1..=25).collect();

    let slice_for = |page: u32| -> &[i64] {
        let start = page_offset(page.into()) as usize;
        let end = (start + PER_PAGE as usize).min(newest_first.len());
        &newest_first[start.min(newest_first.len())..end]
    };

    assert_eq!(slice_for(1), (1..=10).collect::<Vec<i64>>().as_slice());
    assert_eq!(slice_for(2), (11..=20).collect::<Vec<i64>>().as_slice());
    assert_eq!(slice_for(3), (21..=25).collect::<Vec<i64>>().as_slice());
    assert!(slice_for(4).is_empty());
}
