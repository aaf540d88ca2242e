pub mod get;
pub mod post;

pub use get::{get_restaurant_by_id, list_restaurants};
pub use post::create_restaurant;
