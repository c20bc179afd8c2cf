use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, InventoryEntity};

/// Low-stock rule: a product needs restocking when its stock is below the threshold
pub fn needs_restock(stock: i32, min_stock: i32) -> bool {
    stock < min_stock
}

// ============================================================================
// Entity
// ============================================================================

/// Product as returned by the API, enriched with denormalized names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    #[serde(rename = "precio")]
    pub price: f64,

    pub stock: i32,

    #[serde(rename = "stock_minimo")]
    pub min_stock: i32,

    #[serde(rename = "categoria_id")]
    pub category_id: EntityId,

    #[serde(rename = "proveedor_id")]
    pub supplier_id: EntityId,

    #[serde(rename = "categoria_nombre", default)]
    pub category_name: Option<String>,

    #[serde(rename = "proveedor_nombre", default)]
    pub supplier_name: Option<String>,

    #[serde(rename = "necesita_reabastecimiento", default)]
    pub needs_restock: bool,

    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "fecha_actualizacion", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Stock compared against the threshold on the client side
    pub fn is_below_minimum(&self) -> bool {
        needs_restock(self.stock, self.min_stock)
    }
}

impl InventoryEntity for Product {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "productos"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a product
///
/// Numeric fields are parsed by the client before sending; a value that
/// did not parse travels as `null` and is rejected by [`ProductDto::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductDto {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    #[serde(rename = "precio", default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub stock: Option<i32>,

    #[serde(rename = "stock_minimo", default)]
    pub min_stock: Option<i32>,

    #[serde(rename = "categoria_id", default)]
    pub category_id: Option<EntityId>,

    #[serde(rename = "proveedor_id", default)]
    pub supplier_id: Option<EntityId>,
}

/// Product fields after validation, ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub min_stock: i32,
    pub category_id: EntityId,
    pub supplier_id: EntityId,
}

impl ProductDto {
    /// Business rules checked before any write
    pub fn validate(&self) -> Result<ProductFields, String> {
        if self.name.trim().is_empty() {
            return Err("El nombre del producto es requerido".into());
        }
        let price = self
            .price
            .filter(|p| p.is_finite())
            .ok_or_else(|| "El precio es requerido".to_string())?;
        if price < 0.0 {
            return Err("El precio no puede ser negativo".into());
        }
        let stock = self
            .stock
            .ok_or_else(|| "La cantidad en stock es requerida".to_string())?;
        if stock < 0 {
            return Err("La cantidad en stock no puede ser negativa".into());
        }
        let min_stock = self
            .min_stock
            .ok_or_else(|| "El stock mínimo es requerido".to_string())?;
        if min_stock < 0 {
            return Err("El stock mínimo no puede ser negativo".into());
        }
        let category_id = self
            .category_id
            .ok_or_else(|| "La categoría es requerida".to_string())?;
        let supplier_id = self
            .supplier_id
            .ok_or_else(|| "El proveedor es requerido".to_string())?;

        Ok(ProductFields {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            price,
            stock,
            min_stock,
            category_id,
            supplier_id,
        })
    }
}
