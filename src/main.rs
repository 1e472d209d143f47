//! Solar Storefront - catalog and related-products service

use anyhow::{Context, Result};
use solar_storefront::{api, AppConfig, Catalog, RelatedProductSelector};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();

    let config = AppConfig::from_env()?;
    let catalog = Catalog::load(&config.catalog_path).with_context(|| format!("loading catalog from {}", config.catalog_path.display()))?;
    let state = api::AppState::new(catalog, RelatedProductSelector::new(config.related_limit));
    let app = api::router(state);

    tracing::info!("🚀 Solar Storefront listening on 0.0.0.0:{} (related limit {})", config.port, config.related_limit);
    axum::serve(tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?, app).await?;
    Ok(())
}
