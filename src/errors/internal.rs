use thiserror::Error;

/// Infrastructure-level database failures
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

/// Internal error type for store operations
///
/// Not exposed via the API - endpoints must convert to an API error type.
/// The conflict variant is the only domain error the item store produces;
/// everything else is infrastructure.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("sort value {sort} already exists")]
    SortConflict { sort: i32 },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
