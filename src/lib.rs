// Library exports for integration tests and external use

pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod stores;
pub mod types;
