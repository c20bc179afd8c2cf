use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::common::InventoryEntity;

use crate::shared::api_client;

pub fn low_stock_path() -> String {
    format!("{}/bajo-stock", Product::api_path())
}

/// Products whose stock is below their minimum
pub async fn fetch_low_stock() -> Result<Vec<Product>, String> {
    api_client::get_data(&low_stock_path()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_path() {
        assert_eq!(low_stock_path(), "/api/productos/bajo-stock");
    }
}
