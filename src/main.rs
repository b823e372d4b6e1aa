//! Device Catalog server and client entry point.
//!
//! With the `server` feature this serves the server-rendered Dioxus app plus
//! the JSON API. Without it (WASM build) it launches the hydrating client.

use device_catalog::app::App;

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[cfg(feature = "server")]
mod server {
    use super::App;
    use anyhow::Result;
    use device_catalog::{api, catalog::Catalog, config};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    pub async fn run() -> Result<()> {
        // Initialize logging
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    "device_catalog=debug,tower_http=debug,axum::rejection=trace".into()
                }),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        tracing::info!("Starting Device Catalog");

        // Load configuration
        let config = config::load_config()?;
        tracing::info!(?config, "Configuration loaded");

        // Load the device array served to the UI
        let catalog = Catalog::load(config.catalog.path.as_deref()).await?;
        let state = api::AppState::new(catalog, config.author.as_str());

        // Dioxus SSR + hydration routes, then the JSON API
        let app = dioxus::server::router(App)
            .merge(api::router(state))
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            .layer(TraceLayer::new_for_http());

        // Start server
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        tracing::info!("Listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
