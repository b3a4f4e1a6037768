use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::internal::InternalError;
use crate::types::dto::common::ErrorMessage;

/// Failure responses declared for `GET /item`
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "list_bad_request_handler")]
pub enum ListItemsError {
    /// Query validation failed
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorMessage>),

    /// Unexpected server failure
    #[oai(status = 500)]
    InternalServerError(Json<ErrorMessage>),
}

fn list_bad_request_handler(err: poem::Error) -> ListItemsError {
    ListItemsError::UnprocessableEntity(Json(ErrorMessage::new(err.to_string())))
}

impl From<InternalError> for ListItemsError {
    fn from(err: InternalError) -> Self {
        tracing::error!(error = %err, "listing items failed");
        ListItemsError::InternalServerError(Json(ErrorMessage::new("internal server error")))
    }
}

/// Failure responses declared for `POST /item`
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "create_bad_request_handler")]
pub enum CreateItemError {
    /// The sort value is already taken by another item
    #[oai(status = 409)]
    Conflict(Json<ErrorMessage>),

    /// Body validation failed
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorMessage>),

    /// Unexpected server failure
    #[oai(status = 500)]
    InternalServerError(Json<ErrorMessage>),
}

fn create_bad_request_handler(err: poem::Error) -> CreateItemError {
    CreateItemError::UnprocessableEntity(Json(ErrorMessage::new(err.to_string())))
}

impl From<InternalError> for CreateItemError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::SortConflict { sort } => CreateItemError::Conflict(Json(
                ErrorMessage::new(format!("sort value {sort} already exists")),
            )),
            other => {
                tracing::error!(error = %other, "creating item failed");
                CreateItemError::InternalServerError(Json(ErrorMessage::new(
                    "internal server error",
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_conflict_maps_to_409_with_value_in_message() {
        let err = CreateItemError::from(InternalError::SortConflict { sort: 7 });
        match err {
            CreateItemError::Conflict(Json(body)) => {
                assert!(body.message.contains('7'));
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn database_failure_maps_to_generic_500() {
        let err = CreateItemError::from(InternalError::database(
            "insert_item",
            sea_orm::DbErr::Custom("boom".to_string()),
        ));
        match err {
            CreateItemError::InternalServerError(Json(body)) => {
                // Internal detail must not leak to the client
                assert_eq!(body.message, "internal server error");
            }
            other => panic!("expected InternalServerError, got {other:?}"),
        }
    }

    #[test]
    fn list_errors_are_always_generic() {
        let err = ListItemsError::from(InternalError::database(
            "find_all_items",
            sea_orm::DbErr::Custom("boom".to_string()),
        ));
        match err {
            ListItemsError::InternalServerError(Json(body)) => {
                assert_eq!(body.message, "internal server error");
            }
            other => panic!("expected InternalServerError, got {other:?}"),
        }
    }
}
