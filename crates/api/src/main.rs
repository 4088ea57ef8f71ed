use anyhow::Context;

use menagerie_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    menagerie_observability::init();

    tracing::info!("Welcome to the server!");

    let config = ServerConfig::from_env()?;
    let app = menagerie_api::app::build_app(config.admin.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
