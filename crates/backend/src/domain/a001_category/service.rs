use super::repository;
use crate::domain::a003_product;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::common::EntityId;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

const DUPLICATE_NAME: &str = "Ya existe una categoría con ese nombre";

/// A concurrent insert of the same name trips the UNIQUE column
fn name_conflict(err: DbErr) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::validation(DUPLICATE_NAME),
        _ => ServiceError::Database(err),
    }
}

pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<Category>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: EntityId) -> ServiceResult<Category> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Categoría no encontrada"))
}

/// Create a category; names are unique
pub async fn create(db: &DatabaseConnection, dto: CategoryDto) -> ServiceResult<Category> {
    dto.validate().map_err(ServiceError::Validation)?;

    if repository::get_by_name(db, &dto.name).await?.is_some() {
        return Err(ServiceError::validation(DUPLICATE_NAME));
    }

    let created = repository::insert(db, &dto).await.map_err(name_conflict)?;
    tracing::info!("Category {} created: {}", created.id, created.name);
    Ok(created)
}

pub async fn update(
    db: &DatabaseConnection,
    id: EntityId,
    dto: CategoryDto,
) -> ServiceResult<Category> {
    dto.validate().map_err(ServiceError::Validation)?;

    if repository::get_by_id(db, id).await?.is_none() {
        return Err(ServiceError::not_found("Categoría no encontrada"));
    }

    if let Some(other) = repository::get_by_name(db, &dto.name).await? {
        if other.id != id {
            return Err(ServiceError::validation(DUPLICATE_NAME));
        }
    }

    repository::update(db, id, &dto)
        .await
        .map_err(name_conflict)?
        .ok_or_else(|| ServiceError::not_found("Categoría no encontrada"))
}

/// Categories still referenced by products cannot be removed
pub async fn delete(db: &DatabaseConnection, id: EntityId) -> ServiceResult<()> {
    if repository::get_by_id(db, id).await?.is_none() {
        return Err(ServiceError::not_found("Categoría no encontrada"));
    }

    let in_use = a003_product::repository::count_by_category(db, id).await?;
    if in_use > 0 {
        return Err(ServiceError::validation(format!(
            "No se puede eliminar la categoría: tiene {} producto(s) asociado(s)",
            in_use
        )));
    }

    repository::delete(db, id).await?;
    tracing::info!("Category {} deleted", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;

    fn dto(name: &str) -> CategoryDto {
        CategoryDto {
            name: name.into(),
            description: Some("Dispositivos".into()),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let db = memory_connection().await;
        let created = create(&db, dto("Electrónica")).await.unwrap();
        assert!(created.id > 0);
        assert!(created.created_at.is_some());

        let all = list_all(&db).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Electrónica");
        assert_eq!(all[0].description.as_deref(), Some("Dispositivos"));
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let db = memory_connection().await;
        create(&db, dto("Ropa")).await.unwrap();
        let err = create(&db, dto("Ropa")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_own_name_but_not_others() {
        let db = memory_connection().await;
        let ropa = create(&db, dto("Ropa")).await.unwrap();
        create(&db, dto("Hogar")).await.unwrap();

        let renamed = update(&db, ropa.id, dto("Ropa")).await.unwrap();
        assert_eq!(renamed.name, "Ropa");

        let err = update(&db, ropa.id, dto("Hogar")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_category() {
        let db = memory_connection().await;
        assert!(matches!(
            get_by_id(&db, 42).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            update(&db, 42, dto("Nada")).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            delete(&db, 42).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_unknown_id_with_taken_name_is_not_found() {
        let db = memory_connection().await;
        let ropa = create(&db, dto("Ropa")).await.unwrap();
        let err = update(&db, ropa.id + 999, dto("Ropa")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unique_column_violation_is_validation() {
        let db = memory_connection().await;
        repository::insert(&db, &dto("Hogar")).await.unwrap();
        // second insert skips the name lookup, as a concurrent request would
        let err = repository::insert(&db, &dto("Hogar"))
            .await
            .map_err(name_conflict)
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == DUPLICATE_NAME), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let db = memory_connection().await;
        let err = create(&db, dto("  ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = memory_connection().await;
        let created = create(&db, dto("Deportes")).await.unwrap();
        delete(&db, created.id).await.unwrap();
        assert!(list_all(&db).await.unwrap().is_empty());
    }
}
