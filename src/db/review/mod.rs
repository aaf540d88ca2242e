pub mod get;
pub mod post;

pub use get::get_review_page;
pub use post::create_review;
