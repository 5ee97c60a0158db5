use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info};

use linkshelf::application::ports::link_store::LinkStore;
use linkshelf::bootstrap::app_context::{AppContext, AppServices};
use linkshelf::bootstrap::config::Config;
use linkshelf::infrastructure::storage::fs::MarkdownLinkStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "linkshelf=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return Err(e);
        }
    };
    info!(?cfg, "Starting linkshelf");

    let link_store: Arc<dyn LinkStore> = Arc::new(MarkdownLinkStore::new(&cfg.markdown_dir)?);
    info!(dir = %cfg.markdown_dir.display(), "Using markdown directory");

    if !cfg.static_dir.is_dir() {
        tracing::warn!(dir = %cfg.static_dir.display(), "Static asset directory not found");
    }

    let ctx = AppContext::new(cfg.clone(), AppServices::new(link_store));
    let app = linkshelf::presentation::http::build_router(ctx);

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(?e, "API server failed");
        return Err(e.into());
    }
    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
