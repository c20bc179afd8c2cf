use anyhow::Result;
use contracts::domain::a001_category::aggregate::CategoryDto;
use contracts::domain::a002_supplier::aggregate::SupplierDto;
use contracts::domain::a003_product::aggregate::ProductDto;
use sea_orm::DatabaseConnection;

use crate::domain::{a001_category, a002_supplier, a003_product};

const DEMO_CATEGORIES: &[(&str, &str)] = &[
    ("Electrónica", "Dispositivos electrónicos y accesorios"),
    ("Alimentos", "Productos alimenticios y bebidas"),
    ("Ropa", "Prendas de vestir y accesorios"),
    ("Hogar", "Artículos para el hogar"),
    ("Deportes", "Equipamiento deportivo"),
];

/// name, contact, phone, email, address
const DEMO_SUPPLIERS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "TechSupply SA",
        "Juan Pérez",
        "555-0101",
        "contacto@techsupply.com",
        "Av. Tecnología 123, Ciudad",
    ),
    (
        "AlimentosPlus",
        "María González",
        "555-0202",
        "ventas@alimentosplus.com",
        "Calle Comercio 456, Ciudad",
    ),
    (
        "Moda y Estilo",
        "Carlos Rodríguez",
        "555-0303",
        "info@modayestilo.com",
        "Boulevard Moda 789, Ciudad",
    ),
    (
        "Hogar Confort",
        "Ana Martínez",
        "555-0404",
        "contacto@hogarconfort.com",
        "Av. Hogar 321, Ciudad",
    ),
];

struct DemoProduct {
    name: &'static str,
    description: &'static str,
    price: f64,
    stock: i32,
    min_stock: i32,
    category: usize,
    supplier: usize,
}

const DEMO_PRODUCTS: &[DemoProduct] = &[
    DemoProduct {
        name: "Laptop HP Pavilion",
        description: "Laptop 15.6 pulgadas, 8GB RAM, 256GB SSD",
        price: 899.99,
        stock: 15,
        min_stock: 5,
        category: 0,
        supplier: 0,
    },
    DemoProduct {
        name: "Mouse Inalámbrico Logitech",
        description: "Mouse óptico inalámbrico",
        price: 29.99,
        stock: 3,
        min_stock: 10,
        category: 0,
        supplier: 0,
    },
    DemoProduct {
        name: "Teclado Mecánico RGB",
        description: "Teclado mecánico con iluminación RGB",
        price: 79.99,
        stock: 8,
        min_stock: 5,
        category: 0,
        supplier: 0,
    },
    DemoProduct {
        name: "Arroz Integral 1kg",
        description: "Arroz integral orgánico",
        price: 4.99,
        stock: 50,
        min_stock: 20,
        category: 1,
        supplier: 1,
    },
    DemoProduct {
        name: "Aceite de Oliva Extra Virgen",
        description: "Aceite de oliva 500ml",
        price: 12.99,
        stock: 5,
        min_stock: 15,
        category: 1,
        supplier: 1,
    },
    DemoProduct {
        name: "Camiseta Básica Algodón",
        description: "Camiseta 100% algodón",
        price: 19.99,
        stock: 30,
        min_stock: 10,
        category: 2,
        supplier: 2,
    },
    DemoProduct {
        name: "Jeans Clásicos",
        description: "Pantalón de mezclilla corte clásico",
        price: 49.99,
        stock: 2,
        min_stock: 8,
        category: 2,
        supplier: 2,
    },
    DemoProduct {
        name: "Juego de Sábanas Queen",
        description: "Sábanas de algodón egipcio",
        price: 39.99,
        stock: 12,
        min_stock: 6,
        category: 3,
        supplier: 3,
    },
    DemoProduct {
        name: "Mancuernas 5kg (par)",
        description: "Par de mancuernas de 5kg",
        price: 34.99,
        stock: 20,
        min_stock: 8,
        category: 4,
        supplier: 0,
    },
];

/// Insert the demo catalogue when the database has no categories yet
///
/// Returns `true` when data was inserted.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool> {
    if a001_category::repository::count(db).await? > 0 {
        tracing::debug!("Database already populated, skipping demo data");
        return Ok(false);
    }

    tracing::info!("Empty database. Inserting demo data...");

    let mut category_ids = Vec::with_capacity(DEMO_CATEGORIES.len());
    for (name, description) in DEMO_CATEGORIES {
        let category = a001_category::service::create(
            db,
            CategoryDto {
                name: name.to_string(),
                description: Some(description.to_string()),
            },
        )
        .await?;
        category_ids.push(category.id);
    }

    let mut supplier_ids = Vec::with_capacity(DEMO_SUPPLIERS.len());
    for (name, contact, phone, email, address) in DEMO_SUPPLIERS {
        let supplier = a002_supplier::service::create(
            db,
            SupplierDto {
                name: name.to_string(),
                contact: Some(contact.to_string()),
                phone: Some(phone.to_string()),
                email: Some(email.to_string()),
                address: Some(address.to_string()),
            },
        )
        .await?;
        supplier_ids.push(supplier.id);
    }

    for demo in DEMO_PRODUCTS {
        a003_product::service::create(
            db,
            ProductDto {
                name: demo.name.to_string(),
                description: Some(demo.description.to_string()),
                price: Some(demo.price),
                stock: Some(demo.stock),
                min_stock: Some(demo.min_stock),
                category_id: category_ids.get(demo.category).copied(),
                supplier_id: supplier_ids.get(demo.supplier).copied(),
            },
        )
        .await?;
    }

    tracing::info!(
        "Demo data inserted: {} categories, {} suppliers, {} products",
        category_ids.len(),
        supplier_ids.len(),
        DEMO_PRODUCTS.len()
    );
    Ok(true)
}
