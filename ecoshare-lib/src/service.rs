pub mod challenge;
pub mod community;
pub mod item;
pub mod lending;
pub mod review;
