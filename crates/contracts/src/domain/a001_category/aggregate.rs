use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, InventoryEntity};

/// Maximum length of a category name
pub const CATEGORY_NAME_MAX_LEN: usize = 100;

// ============================================================================
// Entity
// ============================================================================

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl InventoryEntity for Category {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "categorias"
    }

    fn element_name() -> &'static str {
        "Categoría"
    }

    fn list_name() -> &'static str {
        "Categorías"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

impl CategoryDto {
    /// Business rules checked before any write
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre de la categoría es requerido".into());
        }
        if self.name.chars().count() > CATEGORY_NAME_MAX_LEN {
            return Err(format!(
                "El nombre de la categoría no puede exceder {} caracteres",
                CATEGORY_NAME_MAX_LEN
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_requires_name() {
        let dto = CategoryDto {
            name: "   ".into(),
            description: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_validate_name_length() {
        let dto = CategoryDto {
            name: "x".repeat(CATEGORY_NAME_MAX_LEN + 1),
            description: None,
        };
        assert!(dto.validate().is_err());

        let dto = CategoryDto {
            name: "x".repeat(CATEGORY_NAME_MAX_LEN),
            description: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_wire_names() {
        let parsed: Category = serde_json::from_value(json!({
            "id": 3,
            "nombre": "Hogar",
            "descripcion": null,
            "fecha_creacion": null
        }))
        .unwrap();
        assert_eq!(parsed.id, 3);
        assert_eq!(parsed.name, "Hogar");
        assert_eq!(parsed.description, None);
        assert_eq!(Category::api_path(), "/api/categorias");
    }
}
