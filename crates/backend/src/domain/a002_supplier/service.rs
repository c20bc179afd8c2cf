use super::repository;
use crate::domain::a003_product;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::common::EntityId;
use sea_orm::DatabaseConnection;

pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<Supplier>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: EntityId) -> ServiceResult<Supplier> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Proveedor no encontrado"))
}

pub async fn create(db: &DatabaseConnection, dto: SupplierDto) -> ServiceResult<Supplier> {
    dto.validate().map_err(ServiceError::Validation)?;
    let created = repository::insert(db, &dto).await?;
    tracing::info!("Supplier {} created: {}", created.id, created.name);
    Ok(created)
}

pub async fn update(
    db: &DatabaseConnection,
    id: EntityId,
    dto: SupplierDto,
) -> ServiceResult<Supplier> {
    dto.validate().map_err(ServiceError::Validation)?;
    repository::update(db, id, &dto)
        .await?
        .ok_or_else(|| ServiceError::not_found("Proveedor no encontrado"))
}

/// Suppliers still referenced by products cannot be removed
pub async fn delete(db: &DatabaseConnection, id: EntityId) -> ServiceResult<()> {
    if repository::get_by_id(db, id).await?.is_none() {
        return Err(ServiceError::not_found("Proveedor no encontrado"));
    }

    let in_use = a003_product::repository::count_by_supplier(db, id).await?;
    if in_use > 0 {
        return Err(ServiceError::validation(format!(
            "No se puede eliminar el proveedor: tiene {} producto(s) asociado(s)",
            in_use
        )));
    }

    repository::delete(db, id).await?;
    tracing::info!("Supplier {} deleted", id);
    Ok(())
}
