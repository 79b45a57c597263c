//! TimeFlow API server entry point

use anyhow::Context;
use timeflow_api::{router, AppContext};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = timeflow_infra::config::load().context("failed to load configuration")?;
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    let ctx = AppContext::new(config).context("failed to build application context")?;
    let app = router(ctx);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "TimeFlow API listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
