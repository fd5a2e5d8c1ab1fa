//! Web server implementation using Axum

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::email::Dispatcher;
use crate::routes::{router, AppState};

/// Bind the configured address and serve until the process is stopped.
pub async fn serve(config: Config, dispatcher: Arc<dyn Dispatcher>) -> anyhow::Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let app = router(AppState { config, dispatcher });

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
