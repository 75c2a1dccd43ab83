//! Items service binary: connects to storage, then serves the item routes.

use items_service::{app, store, AppState, ServiceConfig, StartupError};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("items_service=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let store = store::open(&config.store).await.map_err(|e| {
        tracing::error!(error = %e, kind = ?config.store.kind, "cannot reach storage");
        e
    })?;
    tracing::info!(kind = ?config.store.kind, "connected to storage");

    let app = app(AppState::new(store));
    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
