use std::sync::Arc;
use std::time::Duration;

use product_catalog::app::build_router;
use product_catalog::config::{load_config, Config, LoadedConfig};
use product_catalog::infrastructure::logger::Logger;
use product_catalog::{MemoryProductStore, ProductMapper, ProductService, ProductStore};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let LoadedConfig { config, source } = load_config()?;
    config.validate()?;
    Logger::init(&config.logging)?;
    match source {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let store = build_store(&config).await?;
    let service = ProductService::new(ProductMapper::new(store));
    let app = build_router(service, Duration::from_secs(config.http.timeout_seconds));

    let listener =
        TcpListener::bind((config.http.bind_address.as_str(), config.http.port)).await?;
    info!("Product catalog listening on http://{}", listener.local_addr()?);
    info!("   POST   /products         - Create product");
    info!("   GET    /products/:uuid   - Get product by uuid");
    info!("   GET    /health           - Health check");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(feature = "database")]
async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn ProductStore>> {
    use product_catalog::app::product::postgres::PgProductStore;
    use product_catalog::infrastructure::database::DatabaseManager;

    if config.database.url.is_empty() {
        warn!("No database url configured, products are kept in memory");
        return Ok(Arc::new(MemoryProductStore::new()));
    }

    let database = DatabaseManager::new(&config.database).await?;
    if config.database.auto_migrate {
        database.migrate().await?;
    }
    Ok(Arc::new(PgProductStore::new(database.get_pool().clone())))
}

#[cfg(not(feature = "database"))]
async fn build_store(_config: &Config) -> anyhow::Result<Arc<dyn ProductStore>> {
    warn!("Built without the `database` feature, products are kept in memory");
    Ok(Arc::new(MemoryProductStore::new()))
}
