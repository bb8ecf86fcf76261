use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    faturas_observability::init();

    let config = faturas_api::config::Config::from_env();
    let app = faturas_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
