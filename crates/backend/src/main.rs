pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::shared::config;
use crate::shared::data::db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_source) = config::load_config()?;

    system::tracing::initialize(&config::get_log_dir(&config))?;
    tracing::info!("Configuration loaded from {}", config_source);

    db::initialize_database(&config::get_database_path(&config))
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    if config.database.seed_demo_data {
        system::initialization::seed_demo_data(db::get_connection()).await?;
    }

    let app = routes::configure_routes();

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
