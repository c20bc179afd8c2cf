use super::repository;
use crate::domain::{a001_category, a002_supplier};
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a003_product::aggregate::{Product, ProductDto, ProductFields};
use contracts::domain::common::EntityId;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

/// Fill `category_name` / `supplier_name` from the related tables
async fn enrich(db: &DatabaseConnection, products: Vec<Product>) -> ServiceResult<Vec<Product>> {
    let categories: HashMap<EntityId, String> = a001_category::repository::list_all(db)
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    let suppliers: HashMap<EntityId, String> = a002_supplier::repository::list_all(db)
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();

    Ok(products
        .into_iter()
        .map(|mut p| {
            p.category_name = categories.get(&p.category_id).cloned();
            p.supplier_name = suppliers.get(&p.supplier_id).cloned();
            p
        })
        .collect())
}

async fn enrich_one(db: &DatabaseConnection, product: Product) -> ServiceResult<Product> {
    let mut enriched = enrich(db, vec![product]).await?;
    enriched
        .pop()
        .ok_or_else(|| ServiceError::not_found("Producto no encontrado"))
}

/// Validate the payload and make sure its category and supplier exist
async fn checked_fields(db: &DatabaseConnection, dto: &ProductDto) -> ServiceResult<ProductFields> {
    let fields = dto.validate().map_err(ServiceError::Validation)?;

    if a001_category::repository::get_by_id(db, fields.category_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::validation("La categoría especificada no existe"));
    }
    if a002_supplier::repository::get_by_id(db, fields.supplier_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::validation("El proveedor especificado no existe"));
    }
    Ok(fields)
}

pub async fn list_all(db: &DatabaseConnection) -> ServiceResult<Vec<Product>> {
    let products = repository::list_all(db).await?;
    enrich(db, products).await
}

pub async fn list_low_stock(db: &DatabaseConnection) -> ServiceResult<Vec<Product>> {
    let products = repository::list_low_stock(db).await?;
    enrich(db, products).await
}

pub async fn get_by_id(db: &DatabaseConnection, id: EntityId) -> ServiceResult<Product> {
    let product = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Producto no encontrado"))?;
    enrich_one(db, product).await
}

pub async fn create(db: &DatabaseConnection, dto: ProductDto) -> ServiceResult<Product> {
    let fields = checked_fields(db, &dto).await?;
    let created = repository::insert(db, &fields).await?;
    tracing::info!("Product {} created: {}", created.id, created.name);
    if created.needs_restock {
        tracing::warn!(
            "Product {} created below minimum stock ({} < {})",
            created.id,
            created.stock,
            created.min_stock
        );
    }
    enrich_one(db, created).await
}

pub async fn update(
    db: &DatabaseConnection,
    id: EntityId,
    dto: ProductDto,
) -> ServiceResult<Product> {
    if repository::get_by_id(db, id).await?.is_none() {
        return Err(ServiceError::not_found("Producto no encontrado"));
    }
    let fields = checked_fields(db, &dto).await?;
    let updated = repository::update(db, id, &fields)
        .await?
        .ok_or_else(|| ServiceError::not_found("Producto no encontrado"))?;
    enrich_one(db, updated).await
}

pub async fn delete(db: &DatabaseConnection, id: EntityId) -> ServiceResult<()> {
    if !repository::delete(db, id).await? {
        return Err(ServiceError::not_found("Producto no encontrado"));
    }
    tracing::info!("Product {} deleted", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_connection;
    use contracts::domain::a001_category::aggregate::CategoryDto;
    use contracts::domain::a002_supplier::aggregate::SupplierDto;

    async fn fixtures(db: &DatabaseConnection) -> (EntityId, EntityId) {
        let category = a001_category::service::create(
            db,
            CategoryDto {
                name: "Electrónica".into(),
                description: None,
            },
        )
        .await
        .unwrap();
        let supplier = a002_supplier::service::create(
            db,
            SupplierDto {
                name: "TechSupply SA".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        (category.id, supplier.id)
    }

    fn dto(name: &str, stock: i32, min_stock: i32, ids: (EntityId, EntityId)) -> ProductDto {
        ProductDto {
            name: name.into(),
            description: Some("desc".into()),
            price: Some(19.99),
            stock: Some(stock),
            min_stock: Some(min_stock),
            category_id: Some(ids.0),
            supplier_id: Some(ids.1),
        }
    }

    #[tokio::test]
    async fn test_create_enriches_names() {
        let db = memory_connection().await;
        let ids = fixtures(&db).await;
        let created = create(&db, dto("Mouse", 3, 10, ids)).await.unwrap();
        assert_eq!(created.category_name.as_deref(), Some("Electrónica"));
        assert_eq!(created.supplier_name.as_deref(), Some("TechSupply SA"));
        assert!(created.needs_restock);
        assert_eq!(created.price, 19.99);
    }

    #[tokio::test]
    async fn test_low_stock_is_strict() {
        let db = memory_connection().await;
        let ids = fixtures(&db).await;
        create(&db, dto("Bajo", 3, 10, ids)).await.unwrap();
        create(&db, dto("Justo", 10, 10, ids)).await.unwrap();
        create(&db, dto("Sobra", 20, 5, ids)).await.unwrap();

        let low = list_low_stock(&db).await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Bajo");
        assert_eq!(low[0].category_name.as_deref(), Some("Electrónica"));

        let all = list_all(&db).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().filter(|p| p.needs_restock).count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_references_rejected() {
        let db = memory_connection().await;
        let (category_id, supplier_id) = fixtures(&db).await;

        let err = create(&db, dto("X", 1, 1, (category_id + 100, supplier_id)))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = create(&db, dto("X", 1, 1, (category_id, supplier_id + 100)))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_price_rejected() {
        let db = memory_connection().await;
        let ids = fixtures(&db).await;
        let mut payload = dto("Sin precio", 1, 1, ids);
        payload.price = None;
        let err = create(&db, payload).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = memory_connection().await;
        let ids = fixtures(&db).await;
        let created = create(&db, dto("Teclado", 8, 5, ids)).await.unwrap();
        assert!(!created.needs_restock);

        let updated = update(&db, created.id, dto("Teclado RGB", 2, 5, ids))
            .await
            .unwrap();
        assert_eq!(updated.name, "Teclado RGB");
        assert!(updated.needs_restock);

        assert!(matches!(
            update(&db, created.id + 1, dto("Nada", 1, 1, ids)).await,
            Err(ServiceError::NotFound(_))
        ));

        delete(&db, created.id).await.unwrap();
        assert!(matches!(
            delete(&db, created.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_referenced_category_and_supplier_cannot_be_deleted() {
        let db = memory_connection().await;
        let ids = fixtures(&db).await;
        let created = create(&db, dto("Laptop", 15, 5, ids)).await.unwrap();

        assert!(matches!(
            a001_category::service::delete(&db, ids.0).await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            a002_supplier::service::delete(&db, ids.1).await,
            Err(ServiceError::Validation(_))
        ));

        delete(&db, created.id).await.unwrap();
        a001_category::service::delete(&db, ids.0).await.unwrap();
        a002_supplier::service::delete(&db, ids.1).await.unwrap();
    }
}
