mod app_system;
mod clients;
mod domain;
mod error;
mod store;
mod transform;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, CatalogSystem};
use crate::transform::PriceDirection;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let base_url = std::env::var("CATALOG_API_URL")
        .unwrap_or_else(|_| "https://fakestoreapi.com".to_string());
    info!(%base_url, "Starting catalog demo");

    let system = CatalogSystem::new(base_url);

    let span = tracing::info_span!("catalog_fetch");
    async {
        info!("Fetching full product list");
        system.client.fetch_all().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let state = system.store.snapshot().await.map_err(|e| e.to_string())?;
    match &state.error_msg {
        Some(msg) => error!(error = %msg, "Catalog fetch failed"),
        None => info!(count = state.products.len(), "Catalog loaded"),
    }

    system
        .client
        .sort_by_price(PriceDirection::Low)
        .await
        .map_err(|e| e.to_string())?;

    let products = system.store.products().await.map_err(|e| e.to_string())?;
    if let Some(cheapest) = products.first() {
        info!(title = %cheapest.title, price = cheapest.price, "Cheapest product");
    }

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
