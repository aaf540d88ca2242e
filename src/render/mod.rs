pub mod layout;
pub mod restaurant;
pub mod review;

pub use review::review_list_fragment;
