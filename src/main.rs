//! Startup probe: loads configuration, loads the catalog once and reports
//! what the order store currently holds.
//!
//! `--reset-orders` wipes the order store first (development only).

use std::collections::BTreeSet;
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use secrecy::ExposeSecret;

use canteen_core::adapters::{
    HttpCatalogConfig, HttpCatalogSource, InMemoryOrderRepository, PostgresOrderRepository,
};
use canteen_core::application::{
    CatalogAggregator, ListOrdersHandler, ListOrdersQuery, ResetOrdersHandler,
};
use canteen_core::config::{AppConfig, DatabaseConfig};
use canteen_core::ports::OrderRepository;
use canteen_core::telemetry;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init(&config.logging)?;

    tracing::info!(environment = %config.environment, "Starting canteen-core probe");

    let mut catalog = HttpCatalogConfig::new(config.catalog.base_url.as_str())
        .with_timeout(config.catalog.timeout());
    if let Some(token) = &config.catalog.token {
        catalog = catalog.with_token(token.clone());
    }
    let aggregator = CatalogAggregator::new(
        Arc::new(HttpCatalogSource::new(catalog)?),
        config.matching.vendor_name,
    );

    let snapshot = aggregator.load().await;
    let vendors: BTreeSet<&str> = snapshot
        .items
        .iter()
        .map(|item| item.vendor_name.as_str())
        .collect();
    tracing::info!(
        phase = %snapshot.phase,
        items = snapshot.items.len(),
        vendors = vendors.len(),
        buildings = snapshot.buildings.len(),
        "Catalog summary"
    );

    let orders = order_repository(config.database.as_ref()).await?;
    if std::env::args().any(|arg| arg == "--reset-orders") {
        ResetOrdersHandler::new(Arc::clone(&orders), config.environment.allows_reset())
            .handle()
            .await?;
    }
    let open = ListOrdersHandler::new(Arc::clone(&orders))
        .handle(ListOrdersQuery::Available)
        .await?;
    let all = ListOrdersHandler::new(orders)
        .handle(ListOrdersQuery::All)
        .await?;
    tracing::info!(total = all.len(), open = open.len(), "Order store summary");

    if let Some(reason) = &snapshot.error {
        tracing::error!(%reason, "Catalog unavailable");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

async fn order_repository(
    database: Option<&DatabaseConfig>,
) -> Result<Arc<dyn OrderRepository>, Box<dyn Error>> {
    let Some(database) = database else {
        tracing::info!("No database configured, orders kept in memory");
        return Ok(Arc::new(InMemoryOrderRepository::new()));
    };

    let pool = database
        .pool_options()
        .connect(database.url.expose_secret())
        .await?;
    tracing::info!("Database pool created");

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Migrations applied");
    }

    Ok(Arc::new(PostgresOrderRepository::new(pool)))
}
