use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, InventoryEntity};

// ============================================================================
// Entity
// ============================================================================

/// Supplier of products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "contacto", default)]
    pub contact: Option<String>,

    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "direccion", default)]
    pub address: Option<String>,

    #[serde(rename = "fecha_creacion", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl InventoryEntity for Supplier {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "proveedores"
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SupplierDto {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "contacto", default)]
    pub contact: Option<String>,

    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
}

impl SupplierDto {
    /// Business rules checked before any write
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre del proveedor es requerido".into());
        }
        if let Some(email) = self.email.as_deref() {
            if !email.trim().is_empty() && !is_valid_email(email.trim()) {
                return Err("El formato del email no es válido".into());
            }
        }
        Ok(())
    }
}

/// `local@domain.tld` with the character classes accepted by the
/// supplier form: letters, digits and `._%+-` locally, letters, digits
/// and `.-` in the domain, an alphabetic TLD of at least two characters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}
