pub mod restaurant;
pub mod review;

pub use restaurant::{list_restaurants_handler, show_restaurant_handler};
pub use review::create_review_handler;
