use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("item {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Store(String),

    #[error("{0}")]
    StoreUnavailable(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidArgument(msg) => AppError::BadRequest(msg),
            ItemError::NotFound(_) => AppError::NotFound("item not found".to_string()),
            ItemError::Store(msg) | ItemError::StoreUnavailable(msg) => {
                AppError::InternalServerError(msg)
            }
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sqlx::Error> for ItemError {
    fn from(err: sqlx::Error) -> Self {
        ItemError::Store(err.to_string())
    }
}

impl From<database::DatabaseError> for ItemError {
    fn from(err: database::DatabaseError) -> Self {
        ItemError::StoreUnavailable(err.to_string())
    }
}
