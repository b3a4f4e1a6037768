use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::errors::{CreateItemError, ListItemsError};
use crate::stores::{ItemStore, NewItem};
use crate::types::dto::item::{CreateItemRequest, Item};

/// Item API endpoints
pub struct ItemApi {
    item_store: Arc<ItemStore>,
}

impl ItemApi {
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Item,
}

#[OpenApi]
impl ItemApi {
    /// List all items
    ///
    /// Returns every stored item. No pagination or ordering guarantee beyond
    /// storage order.
    #[oai(path = "/item", method = "get", tag = "ApiTags::Item")]
    async fn list_items(&self) -> Result<Json<Vec<Item>>, ListItemsError> {
        let rows = self.item_store.find_all().await?;

        Ok(Json(rows.into_iter().map(Item::from).collect()))
    }

    /// Create a new item
    ///
    /// Accepts item details and returns the created item with its
    /// server-assigned id and creation timestamp. Fails with 409 when the
    /// requested sort value is already taken.
    #[oai(path = "/item", method = "post", tag = "ApiTags::Item")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<Json<Item>, CreateItemError> {
        let candidate = NewItem {
            name: body.0.name,
            payload: body.0.payload,
            sort: body.0.sort,
        };

        let created = self.item_store.insert(candidate).await?;

        Ok(Json(created.into()))
    }
}
