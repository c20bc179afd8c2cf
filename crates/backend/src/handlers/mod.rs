pub mod a001_category;
pub mod a002_supplier;
pub mod a003_product;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::EntityId;
use contracts::shared::api_response::ApiResponse;

use crate::shared::error::ServiceError;

/// Status code plus JSON envelope, the shape every handler returns
pub type ApiReply<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn ok<T>(data: T) -> ApiReply<T> {
    (StatusCode::OK, Json(ApiResponse::ok(data)))
}

pub fn created<T>(data: T, message: &str) -> ApiReply<T> {
    (
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(data, message)),
    )
}

pub fn updated<T>(data: T, message: &str) -> ApiReply<T> {
    (StatusCode::OK, Json(ApiResponse::ok_with_message(data, message)))
}

pub fn deleted(message: &str) -> ApiReply<()> {
    (StatusCode::OK, Json(ApiResponse::done(message)))
}

pub fn failure<T>(status: StatusCode, error: impl Into<String>) -> ApiReply<T> {
    (status, Json(ApiResponse::failure(error)))
}

/// Map a service error to its HTTP status and log it
pub fn service_failure<T>(context: &str, err: ServiceError) -> ApiReply<T> {
    let status = match &err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("{}: {}", context, err);
    } else {
        tracing::warn!("{}: {}", context, err);
    }
    failure(status, err.to_string())
}

/// Parse the `:id` path segment
pub fn parse_id<T>(raw: &str) -> Result<EntityId, ApiReply<T>> {
    raw.trim()
        .parse::<EntityId>()
        .map_err(|_| failure(StatusCode::BAD_REQUEST, "Identificador inválido"))
}

/// Unwrap a JSON body, answering 400 inside the envelope when it does not parse
pub fn json_body<D, T>(payload: Result<Json<D>, JsonRejection>) -> Result<D, ApiReply<T>> {
    match payload {
        Ok(Json(dto)) => Ok(dto),
        Err(e) => {
            tracing::warn!("Rejected request body: {}", e.body_text());
            Err(failure(StatusCode::BAD_REQUEST, e.body_text()))
        }
    }
}
