use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a003_product::aggregate::Product;

/// Counters shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_productos: usize,
    pub productos_bajo_stock: usize,
    pub total_categorias: usize,
    pub total_proveedores: usize,
}

fn count<T>(what: &str, result: Result<Vec<T>, String>) -> usize {
    match result {
        Ok(list) => list.len(),
        Err(e) => {
            log::error!("Error al cargar {}: {}", what, e);
            0
        }
    }
}

impl DashboardStats {
    /// A failed collection counts as zero without touching the others
    pub fn from_results(
        products: Result<Vec<Product>, String>,
        low_stock: Result<Vec<Product>, String>,
        categories: Result<Vec<Category>, String>,
        suppliers: Result<Vec<Supplier>, String>,
    ) -> Self {
        Self {
            total_productos: count("productos", products),
            productos_bajo_stock: count("productos con bajo stock", low_stock),
            total_categorias: count("categorías", categories),
            total_proveedores: count("proveedores", suppliers),
        }
    }

    pub fn show_low_stock_alert(&self) -> bool {
        self.productos_bajo_stock > 0
    }

    pub fn low_stock_message(&self) -> String {
        format!(
            "Tienes {} producto(s) que necesitan reabastecimiento",
            self.productos_bajo_stock
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32) -> Product {
        Product {
            id,
            name: format!("Producto {}", id),
            description: None,
            price: 10.0,
            stock: 1,
            min_stock: 5,
            category_id: 1,
            supplier_id: 1,
            category_name: None,
            supplier_name: None,
            needs_restock: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn category(id: i32) -> Category {
        Category {
            id,
            name: format!("Categoría {}", id),
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn test_counts_equal_collection_lengths() {
        let stats = DashboardStats::from_results(
            Ok((1..=9).map(product).collect()),
            Ok(vec![product(2), product(5), product(8)]),
            Ok((1..=5).map(category).collect()),
            Ok(Vec::new()),
        );
        assert_eq!(
            stats,
            DashboardStats {
                total_productos: 9,
                productos_bajo_stock: 3,
                total_categorias: 5,
                total_proveedores: 0,
            }
        );
        assert!(stats.show_low_stock_alert());
        assert_eq!(
            stats.low_stock_message(),
            "Tienes 3 producto(s) que necesitan reabastecimiento"
        );
    }

    #[test]
    fn test_failed_fetch_zeroes_only_its_counter() {
        let stats = DashboardStats::from_results(
            Ok(vec![product(1), product(2)]),
            Err("HTTP 500".into()),
            Ok(vec![category(1)]),
            Err("network".into()),
        );
        assert_eq!(stats.total_productos, 2);
        assert_eq!(stats.productos_bajo_stock, 0);
        assert_eq!(stats.total_categorias, 1);
        assert_eq!(stats.total_proveedores, 0);
        assert!(!stats.show_low_stock_alert());
    }

    #[test]
    fn test_default_hides_alert() {
        assert!(!DashboardStats::default().show_low_stock_alert());
    }
}
