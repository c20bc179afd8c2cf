use axum::extract::rejection::JsonRejection;
use axum::{extract::Path, Json};
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};

use super::{created, deleted, json_body, ok, parse_id, service_failure, updated, ApiReply};
use crate::domain::a001_category;
use crate::shared::data::db::get_connection;

/// GET /api/categorias
pub async fn list_all() -> ApiReply<Vec<Category>> {
    match a001_category::service::list_all(get_connection()).await {
        Ok(v) => ok(v),
        Err(e) => service_failure("list categories", e),
    }
}

/// GET /api/categorias/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiReply<Category> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    match a001_category::service::get_by_id(get_connection(), id).await {
        Ok(v) => ok(v),
        Err(e) => service_failure("get category", e),
    }
}

/// POST /api/categorias
pub async fn create(payload: Result<Json<CategoryDto>, JsonRejection>) -> ApiReply<Category> {
    let dto = match json_body(payload) {
        Ok(dto) => dto,
        Err(reply) => return reply,
    };
    match a001_category::service::create(get_connection(), dto).await {
        Ok(v) => created(v, "Categoría creada exitosamente"),
        Err(e) => service_failure("create category", e),
    }
}

/// PUT /api/categorias/:id
pub async fn update(
    Path(id): Path<String>,
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> ApiReply<Category> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    let dto = match json_body(payload) {
        Ok(dto) => dto,
        Err(reply) => return reply,
    };
    match a001_category::service::update(get_connection(), id, dto).await {
        Ok(v) => updated(v, "Categoría actualizada exitosamente"),
        Err(e) => service_failure("update category", e),
    }
}

/// DELETE /api/categorias/:id
pub async fn delete(Path(id): Path<String>) -> ApiReply<()> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    match a001_category::service::delete(get_connection(), id).await {
        Ok(()) => deleted("Categoría eliminada exitosamente"),
        Err(e) => service_failure("delete category", e),
    }
}
