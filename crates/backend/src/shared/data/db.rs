use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables created on startup when missing, in dependency order
const SCHEMA: &[(&str, &str)] = &[
    (
        "a001_category",
        r#"
        CREATE TABLE IF NOT EXISTS a001_category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            created_at TEXT
        );
        "#,
    ),
    (
        "a002_supplier",
        r#"
        CREATE TABLE IF NOT EXISTS a002_supplier (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            contact TEXT,
            phone TEXT,
            email TEXT,
            address TEXT,
            created_at TEXT
        );
        "#,
    ),
    (
        "a003_product",
        r#"
        CREATE TABLE IF NOT EXISTS a003_product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price REAL NOT NULL,
            stock INTEGER NOT NULL,
            min_stock INTEGER NOT NULL,
            category_id INTEGER NOT NULL REFERENCES a001_category(id),
            supplier_id INTEGER NOT NULL REFERENCES a002_supplier(id),
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
];

/// Open the SQLite file (creating it if needed), bootstrap the schema and
/// store the connection for [`get_connection`]
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database: {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Create every missing table
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    for (table, sql) in SCHEMA {
        tracing::debug!("Ensuring table {}", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Fresh in-memory database with the schema applied
#[cfg(test)]
pub async fn memory_connection() -> DatabaseConnection {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options)
        .await
        .expect("in-memory sqlite should open");
    bootstrap_schema(&conn)
        .await
        .expect("schema bootstrap should succeed");
    conn
}
