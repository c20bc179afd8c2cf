use chrono::Utc;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::common::EntityId;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;

use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category {
            id: m.id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
        }
    }
}

/// All categories in insertion order
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Category>, DbErr> {
    Ok(Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_id(db: &DatabaseConnection, id: EntityId) -> Result<Option<Category>, DbErr> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn get_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Category>, DbErr> {
    Ok(Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await?
        .map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, dto: &CategoryDto) -> Result<Category, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(dto.name.clone()),
        description: Set(dto.description.clone()),
        created_at: Set(Some(Utc::now())),
    };
    Ok(active.insert(db).await?.into())
}

/// Returns `None` when no category has this id
pub async fn update(
    db: &DatabaseConnection,
    id: EntityId,
    dto: &CategoryDto,
) -> Result<Option<Category>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    active.name = Set(dto.name.clone());
    active.description = Set(dto.description.clone());
    Ok(Some(active.update(db).await?.into()))
}

pub async fn delete(db: &DatabaseConnection, id: EntityId) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    Entity::find().count(db).await
}
