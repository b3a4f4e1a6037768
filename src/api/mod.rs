// API layer - HTTP endpoints

pub mod health;
pub mod item;

pub use health::HealthApi;
pub use item::ItemApi;
