use chrono::Utc;
use contracts::domain::a003_product::aggregate::{needs_restock, Product, ProductFields};
use contracts::domain::common::EntityId;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;

use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub min_stock: i32,
    pub category_id: i32,
    pub supplier_id: i32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            name: m.name,
            description: Some(m.description).filter(|d| !d.is_empty()),
            price: m.price,
            stock: m.stock,
            min_stock: m.min_stock,
            category_id: m.category_id,
            supplier_id: m.supplier_id,
            category_name: None,
            supplier_name: None,
            needs_restock: needs_restock(m.stock, m.min_stock),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn collect(models: Vec<Model>) -> Vec<Product> {
    models.into_iter().map(Into::into).collect()
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Product>, DbErr> {
    Ok(collect(
        Entity::find().order_by_asc(Column::Id).all(db).await?,
    ))
}

/// Products whose stock is strictly below their minimum
pub async fn list_low_stock(db: &DatabaseConnection) -> Result<Vec<Product>, DbErr> {
    let models = Entity::find()
        .filter(Expr::col(Column::Stock).lt(Expr::col(Column::MinStock)))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(collect(models))
}

pub async fn get_by_id(db: &DatabaseConnection, id: EntityId) -> Result<Option<Product>, DbErr> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, fields: &ProductFields) -> Result<Product, DbErr> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        name: Set(fields.name.clone()),
        description: Set(fields.description.clone()),
        price: Set(fields.price),
        stock: Set(fields.stock),
        min_stock: Set(fields.min_stock),
        category_id: Set(fields.category_id),
        supplier_id: Set(fields.supplier_id),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    Ok(active.insert(db).await?.into())
}

/// Returns `None` when no product has this id
pub async fn update(
    db: &DatabaseConnection,
    id: EntityId,
    fields: &ProductFields,
) -> Result<Option<Product>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    active.name = Set(fields.name.clone());
    active.description = Set(fields.description.clone());
    active.price = Set(fields.price);
    active.stock = Set(fields.stock);
    active.min_stock = Set(fields.min_stock);
    active.category_id = Set(fields.category_id);
    active.supplier_id = Set(fields.supplier_id);
    active.updated_at = Set(Some(Utc::now()));
    Ok(Some(active.update(db).await?.into()))
}

pub async fn delete(db: &DatabaseConnection, id: EntityId) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count_by_category(db: &DatabaseConnection, category_id: EntityId) -> Result<u64, DbErr> {
    Entity::find()
        .filter(Column::CategoryId.eq(category_id))
        .count(db)
        .await
}

pub async fn count_by_supplier(db: &DatabaseConnection, supplier_id: EntityId) -> Result<u64, DbErr> {
    Entity::find()
        .filter(Column::SupplierId.eq(supplier_id))
        .count(db)
        .await
}
