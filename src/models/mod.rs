pub mod restaurant;
pub mod review;

pub use restaurant::Restaurant;
pub use review::{NewReview, Review, ReviewPage};
