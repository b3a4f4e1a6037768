use poem_openapi::Object;

use crate::types::db::item;

/// Response model representing a stored item
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier for the item (server-generated UUID)
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Free-form payload attached to the item
    pub payload: Option<String>,

    /// Ordering value, unique across all items
    pub sort: i32,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            payload: model.payload,
            sort: model.sort,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

/// Request model for creating a new item
///
/// `id` and `createdAt` are deliberately absent: both are server-assigned.
#[derive(Object, Debug, Clone)]
pub struct CreateItemRequest {
    /// Name of the item (1-64 characters)
    #[oai(validator(min_length = 1, max_length = 64))]
    pub name: String,

    /// Optional free-form payload
    pub payload: Option<String>,

    /// Ordering value, must be non-negative and unique across items
    #[oai(validator(minimum(value = "0")))]
    pub sort: i32,
}

/// Request model for updating an item
///
/// Whitelists the updatable columns so new columns never leak into the
/// update surface. No route is wired for this shape yet.
#[derive(Object, Debug, Clone)]
pub struct UpdateItemRequest {
    /// New name of the item (1-64 characters)
    #[oai(validator(min_length = 1, max_length = 64))]
    pub name: Option<String>,

    /// New payload for the item
    pub payload: Option<String>,

    /// New ordering value, must be non-negative and unique across items
    #[oai(validator(minimum(value = "0")))]
    pub sort: Option<i32>,
}

/// Request model for deleting an item by id
///
/// No route is wired for this shape yet.
#[derive(Object, Debug, Clone)]
pub struct DeleteItemRequest {
    /// UUID of the item to delete
    pub id: String,
}
