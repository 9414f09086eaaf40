use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use todos::modules::todos::adapters::outbound::todo_store_in_memory::InMemoryTodoStore;
use todos::shell::config::AppConfig;
use todos::shell::http::router;
use todos::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let state = AppState {
        store: Arc::new(InMemoryTodoStore::new()),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
