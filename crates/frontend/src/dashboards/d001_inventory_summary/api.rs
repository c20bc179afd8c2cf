use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::a003_product::aggregate::{Product, ProductDto};

use super::state::DashboardStats;
use crate::domain::a003_product::api::fetch_low_stock;
use crate::shared::crud::{CrudApi, RestResource};

/// Fetch the four collections concurrently and count them
pub async fn fetch_stats() -> DashboardStats {
    let products: RestResource<Product, ProductDto> = RestResource::new();
    let categories: RestResource<Category, CategoryDto> = RestResource::new();
    let suppliers: RestResource<Supplier, SupplierDto> = RestResource::new();

    let (products, low_stock, categories, suppliers) = futures::join!(
        products.list(),
        fetch_low_stock(),
        categories.list(),
        suppliers.list()
    );
    DashboardStats::from_results(products, low_stock, categories, suppliers)
}
