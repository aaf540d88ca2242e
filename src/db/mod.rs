pub mod restaurant;
pub mod review;
pub mod schema;
pub mod seed;
