use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orders_core::constants::DEFAULT_REST_ADDR;
use orders_core::{OrderStore, SiteConfig};

/// Main entry point for the medical orders server
///
/// Seeds the order store, resolves the site configuration once, and serves the page plus the
/// JSON API until interrupted. The store lives for the lifetime of the process: restarting the
/// server resets every suggestion to its seeded status.
///
/// # Environment Variables
/// - `ORDERS_REST_ADDR`: listen address (default: "0.0.0.0:3000")
/// - `GITHUB_REPOSITORY`: `owner/name`; `name` becomes the base path for subpath deployments
/// - `GITHUB_PAGES`: set to `true` to serve under `/{name}`
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration or seed data is invalid,
/// - the server address cannot be parsed or bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("orders_run=info".parse()?)
                .add_directive("orders_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("ORDERS_REST_ADDR")
        .unwrap_or_else(|_| DEFAULT_REST_ADDR.into())
        .parse()?;
    let config = SiteConfig::from_env()?;
    let store = OrderStore::seeded()?;

    tracing::info!(
        "++ Starting medical orders on http://{}{}/",
        addr,
        config.base_path()
    );

    let app = api_rest::router(api_rest::AppState::new(store, config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Medical orders stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
