use async_trait::async_trait;
use contracts::domain::common::{EntityId, InventoryEntity};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

use super::api_client;

/// Collection endpoint a list page talks to
#[async_trait(?Send)]
pub trait CrudApi {
    type Entity;
    type Payload;

    async fn list(&self) -> Result<Vec<Self::Entity>, String>;
    async fn create(&self, payload: &Self::Payload) -> Result<(), String>;
    async fn update(&self, id: EntityId, payload: &Self::Payload) -> Result<(), String>;
    async fn delete(&self, id: EntityId) -> Result<(), String>;
}

/// REST collection at `E::api_path()` accepting `P` as write payload
pub struct RestResource<E, P> {
    path: String,
    _marker: PhantomData<fn() -> (E, P)>,
}

impl<E: InventoryEntity, P> RestResource<E, P> {
    pub fn new() -> Self {
        Self {
            path: E::api_path(),
            _marker: PhantomData,
        }
    }
}

impl<E: InventoryEntity, P> Default for RestResource<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P> RestResource<E, P> {
    pub fn path(&self) -> &str {
        &self.path
    }

    fn item_path(&self, id: EntityId) -> String {
        format!("{}/{}", self.path, id)
    }
}

#[async_trait(?Send)]
impl<E, P> CrudApi for RestResource<E, P>
where
    E: InventoryEntity + DeserializeOwned,
    P: Serialize,
{
    type Entity = E;
    type Payload = P;

    async fn list(&self) -> Result<Vec<E>, String> {
        api_client::get_data(&self.path).await
    }

    async fn create(&self, payload: &P) -> Result<(), String> {
        api_client::post_json(&self.path, payload).await
    }

    async fn update(&self, id: EntityId, payload: &P) -> Result<(), String> {
        api_client::put_json(&self.item_path(id), payload).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), String> {
        api_client::delete(&self.item_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_product::aggregate::{Product, ProductDto};

    #[test]
    fn test_paths() {
        let api: RestResource<Product, ProductDto> = RestResource::new();
        assert_eq!(api.path(), "/api/productos");
        assert_eq!(api.item_path(7), "/api/productos/7");
    }
}
