use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, SqlErr};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::item;

/// Candidate row for insertion
///
/// `id` and `created_at` are assigned by the store at insert time and are
/// never part of the candidate.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub payload: Option<String>,
    pub sort: i32,
}

/// Persistence access for the item table
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch all items in storage order
    pub async fn find_all(&self) -> Result<Vec<item::Model>, InternalError> {
        item::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_all_items", e))
    }

    /// Insert a new item, assigning its id and creation timestamp
    ///
    /// A unique-constraint violation surfaces as `InternalError::SortConflict`
    /// since `sort` is the only client-controlled unique column.
    pub async fn insert(&self, candidate: NewItem) -> Result<item::Model, InternalError> {
        let sort = candidate.sort;
        let row = item::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(candidate.name),
            payload: Set(candidate.payload),
            sort: Set(candidate.sort),
            created_at: Set(Utc::now().into()),
        };

        row.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => InternalError::SortConflict { sort },
            _ => InternalError::database("insert_item", e),
        })
    }
}
