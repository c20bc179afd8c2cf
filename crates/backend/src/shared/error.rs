use thiserror::Error;

/// Failure of a service operation, mapped to an HTTP status by the handlers
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Business rule violated by the submitted data (400)
    #[error("{0}")]
    Validation(String),

    /// Referenced record does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Storage failure (500)
    #[error("Error de base de datos: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
