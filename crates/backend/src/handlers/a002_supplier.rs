use axum::extract::rejection::JsonRejection;
use axum::{extract::Path, Json};
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierDto};

use super::{created, deleted, json_body, ok, parse_id, service_failure, updated, ApiReply};
use crate::domain::a002_supplier;
use crate::shared::data::db::get_connection;

/// GET /api/proveedores
pub async fn list_all() -> ApiReply<Vec<Supplier>> {
    match a002_supplier::service::list_all(get_connection()).await {
        Ok(v) => ok(v),
        Err(e) => service_failure("list suppliers", e),
    }
}

/// GET /api/proveedores/:id
pub async fn get_by_id(Path(id): Path<String>) -> ApiReply<Supplier> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    match a002_supplier::service::get_by_id(get_connection(), id).await {
        Ok(v) => ok(v),
        Err(e) => service_failure("get supplier", e),
    }
}

/// POST /api/proveedores
pub async fn create(payload: Result<Json<SupplierDto>, JsonRejection>) -> ApiReply<Supplier> {
    let dto = match json_body(payload) {
        Ok(dto) => dto,
        Err(reply) => return reply,
    };
    match a002_supplier::service::create(get_connection(), dto).await {
        Ok(v) => created(v, "Proveedor creado exitosamente"),
        Err(e) => service_failure("create supplier", e),
    }
}

/// PUT /api/proveedores/:id
pub async fn update(
    Path(id): Path<String>,
    payload: Result<Json<SupplierDto>, JsonRejection>,
) -> ApiReply<Supplier> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    let dto = match json_body(payload) {
        Ok(dto) => dto,
        Err(reply) => return reply,
    };
    match a002_supplier::service::update(get_connection(), id, dto).await {
        Ok(v) => updated(v, "Proveedor actualizado exitosamente"),
        Err(e) => service_failure("update supplier", e),
    }
}

/// DELETE /api/proveedores/:id
pub async fn delete(Path(id): Path<String>) -> ApiReply<()> {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(reply) => return reply,
    };
    match a002_supplier::service::delete(get_connection(), id).await {
        Ok(()) => deleted("Proveedor eliminado exitosamente"),
        Err(e) => service_failure("delete supplier", e),
    }
}
