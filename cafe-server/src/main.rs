use cafe_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, configuration, logging
    let config = setup_environment()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Cafe server starting..."
    );

    // 2. Open the database
    let state = ServerState::initialize(&config).await?;
    tracing::info!(path = %config.database_path.display(), "Database ready");

    // 3. Serve until Ctrl-C
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
