use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierDto};
use leptos::prelude::RwSignal;

use crate::shared::crud::RestResource;
use crate::shared::dialogs::BrowserDialogs;
use crate::shared::list_controller::{ListController, ListMessages};
use crate::shared::list_view_model::{FormDraft, ListViewModel};

pub const MESSAGES: ListMessages = ListMessages {
    load_error: "Error al cargar proveedores",
    save_error: "Error al guardar proveedor",
    delete_error: "Error al eliminar proveedor",
    delete_confirm: "¿Estás seguro de eliminar este proveedor?",
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierDraft {
    pub name: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl FormDraft for SupplierDraft {
    type Entity = Supplier;
    type Payload = SupplierDto;

    fn from_entity(entity: &Supplier) -> Self {
        Self {
            name: entity.name.clone(),
            contact: entity.contact.clone().unwrap_or_default(),
            phone: entity.phone.clone().unwrap_or_default(),
            email: entity.email.clone().unwrap_or_default(),
            address: entity.address.clone().unwrap_or_default(),
        }
    }

    fn missing_required(&self) -> bool {
        self.name.is_empty()
    }

    fn to_payload(&self) -> SupplierDto {
        SupplierDto {
            name: self.name.clone(),
            contact: optional(&self.contact),
            phone: optional(&self.phone),
            email: optional(&self.email),
            address: optional(&self.address),
        }
    }
}

pub type SupplierViewModel = ListViewModel<Supplier, SupplierDraft>;
pub type SupplierStore = RwSignal<SupplierViewModel>;
pub type SupplierController =
    ListController<RestResource<Supplier, SupplierDto>, SupplierStore, BrowserDialogs>;
