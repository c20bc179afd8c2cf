use chrono::Utc;
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::common::EntityId;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;

use sea_orm::{ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_supplier")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Supplier {
    fn from(m: Model) -> Self {
        Supplier {
            id: m.id,
            name: m.name,
            contact: m.contact,
            phone: m.phone,
            email: m.email,
            address: m.address,
            created_at: m.created_at,
        }
    }
}

/// Empty strings from the form are stored as NULL
fn blank_to_none(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Supplier>, DbErr> {
    Ok(Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_id(db: &DatabaseConnection, id: EntityId) -> Result<Option<Supplier>, DbErr> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, dto: &SupplierDto) -> Result<Supplier, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(dto.name.clone()),
        contact: Set(blank_to_none(&dto.contact)),
        phone: Set(blank_to_none(&dto.phone)),
        email: Set(blank_to_none(&dto.email)),
        address: Set(blank_to_none(&dto.address)),
        created_at: Set(Some(Utc::now())),
    };
    Ok(active.insert(db).await?.into())
}

pub async fn update(
    db: &DatabaseConnection,
    id: EntityId,
    dto: &SupplierDto,
) -> Result<Option<Supplier>, DbErr> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    active.name = Set(dto.name.clone());
    active.contact = Set(blank_to_none(&dto.contact));
    active.phone = Set(blank_to_none(&dto.phone));
    active.email = Set(blank_to_none(&dto.email));
    active.address = Set(blank_to_none(&dto.address));
    Ok(Some(active.update(db).await?.into()))
}

pub async fn delete(db: &DatabaseConnection, id: EntityId) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
