// Errors layer - error type definitions

pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{CreateItemError, ListItemsError};
pub use internal::{DatabaseError, InternalError};
