use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Result alias returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures the HTTP layer maps to status codes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested record does not exist.
    #[error("resource not found")]
    NotFound,
    /// The product row was written but attaching its tags failed.
    #[error("failed to attach tags to product {product_id}: {source}")]
    TagAssignment {
        product_id: i32,
        #[source]
        source: RepositoryError,
    },
    /// Persistence failure other than a missing record.
    #[error(transparent)]
    Repository(RepositoryError),
    /// Failure outside the persistence layer.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
