pub mod co2;
pub mod config;
pub mod error;
pub mod service;
pub mod session;
pub mod types;
pub mod utils;
