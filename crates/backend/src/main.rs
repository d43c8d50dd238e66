pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::routes::AppState;
use crate::shared::config;
use crate::shared::options::CollectionRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config().context("loading config.toml")?;

    let registry = CollectionRegistry::from_config(&config.collections)?;
    tracing::info!(
        "Option collections: {}",
        registry.names().collect::<Vec<_>>().join(", ")
    );

    let db_path = config::get_database_path(&config);
    let db = shared::data::db::initialize_database(&db_path)
        .await
        .context("db init failed")?;

    let app = routes::configure_routes(AppState {
        db,
        registry: Arc::new(registry),
    });

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

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
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
