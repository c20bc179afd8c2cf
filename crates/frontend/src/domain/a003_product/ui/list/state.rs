use contracts::domain::a003_product::aggregate::{Product, ProductDto};
use contracts::domain::common::InventoryEntity;
use leptos::prelude::RwSignal;

use crate::shared::crud::RestResource;
use crate::shared::dialogs::BrowserDialogs;
use crate::shared::list_controller::{ListController, ListMessages};
use crate::shared::list_view_model::{FormDraft, ListViewModel};
use crate::shared::number_parse::{parse_float, parse_int};

pub const MESSAGES: ListMessages = ListMessages {
    load_error: "Error al cargar productos",
    save_error: "Error al guardar producto",
    delete_error: "Error al eliminar producto",
    delete_confirm: "¿Estás seguro de eliminar este producto?",
};

/// Product form as typed; numbers stay text until submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub min_stock: String,
    pub category_id: String,
    pub supplier_id: String,
}

impl FormDraft for ProductDraft {
    type Entity = Product;
    type Payload = ProductDto;

    fn from_entity(entity: &Product) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
            price: entity.price.to_string(),
            stock: entity.stock.to_string(),
            min_stock: entity.min_stock.to_string(),
            category_id: entity.category_id.to_string(),
            supplier_id: entity.supplier_id.to_string(),
        }
    }

    fn missing_required(&self) -> bool {
        [
            &self.name,
            &self.price,
            &self.stock,
            &self.min_stock,
            &self.category_id,
            &self.supplier_id,
        ]
        .iter()
        .any(|field| field.is_empty())
    }

    /// Unparsable numbers travel as `null` and are rejected by the server
    fn to_payload(&self) -> ProductDto {
        ProductDto {
            name: self.name.clone(),
            description: Some(self.description.clone()).filter(|d| !d.trim().is_empty()),
            price: parse_float(&self.price),
            stock: parse_int(&self.stock),
            min_stock: parse_int(&self.min_stock),
            category_id: parse_int(&self.category_id),
            supplier_id: parse_int(&self.supplier_id),
        }
    }
}

pub type ProductViewModel = ListViewModel<Product, ProductDraft>;
pub type ProductStore = RwSignal<ProductViewModel>;
pub type ProductController =
    ListController<RestResource<Product, ProductDto>, ProductStore, BrowserDialogs>;

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn stock_class(product: &Product) -> &'static str {
    if product.is_below_minimum() {
        "stock-bajo"
    } else {
        "stock-ok"
    }
}

/// `(value, label)` pairs for a select over loaded records
pub fn select_options<E: InventoryEntity>(records: &[E]) -> Vec<(String, String)> {
    records
        .iter()
        .map(|r| (r.id().to_string(), r.name().to_string()))
        .collect()
}
