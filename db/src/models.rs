pub mod borrow_request;
pub mod challenge;
pub mod item;
pub mod profile;
pub mod review;
pub mod user_challenge;
