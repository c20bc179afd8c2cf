use axum::extract::rejection::JsonRejection;
use axum::{extract::Path, Json};
use contracts::domain::a003_product::aggregate::{Product, ProductDto};

use super::{created, deleted, json_body, ok, parse_id, service_failure, updated, ApiReply};
use crate::domain::a003_product;
use crate::shared::data::db::get_connection;

/// GET /api/productos
pub async fn list_all() -> ApiReply<Vec<Product>> {
    match a003_product::service::list_all(get_connection()).await {
        Ok(v) => ok(v),
        Err(e) => service_failure("list products", e),
    }
}

/// GET /api/productos/bajo-stock
pub async fn list_low_stock() -> ApiReply<Vec<Product>> {
    match a003_product::service::list_low_stock(get_connection()).await {
        Ok(v) => ok(v),
        Err(e) => service_failure("list low stock products", e),
    }
}

/// GET /api/productos/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiReply<Product> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    match a003_product::service::get_by_id(get_connection(), id).await {
        Ok(v) => ok(v),
        Err(e) => service_failure("get product", e),
    }
}

/// POST /api/productos
pub async fn create(payload: Result<Json<ProductDto>, JsonRejection>) -> ApiReply<Product> {
    let dto = match json_body(payload) {
        Ok(dto) => dto,
        Err(reply) => return reply,
    };
    match a003_product::service::create(get_connection(), dto).await {
        Ok(v) => created(v, "Producto creado exitosamente"),
        Err(e) => service_failure("create product", e),
    }
}

/// PUT /api/productos/:id
pub async fn update(
    Path(id): Path<String>,
    payload: Result<Json<ProductDto>, JsonRejection>,
) -> ApiReply<Product> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    let dto = match json_body(payload) {
        Ok(dto) => dto,
        Err(reply) => return reply,
    };
    match a003_product::service::update(get_connection(), id, dto).await {
        Ok(v) => updated(v, "Producto actualizado exitosamente"),
        Err(e) => service_failure("update product", e),
    }
}

/// DELETE /api/productos/:id
pub async fn delete(Path(id): Path<String>) -> ApiReply<()> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    match a003_product::service::delete(get_connection(), id).await {
        Ok(()) => deleted("Producto eliminado exitosamente"),
        Err(e) => service_failure("delete product", e),
    }
}
