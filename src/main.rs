//! Server: loads config, connects to PostgreSQL, ensures the `test` table, serves the API.

use std::sync::Arc;
use test_service::config::load as load_config;
use test_service::{app, connect, ensure_database_exists, ensure_test_table, logging, AppState, PgTestRepository};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init(&config.logging)?;
    tracing::debug!(?config, "loaded config");

    if config.db.create_database {
        ensure_database_exists(&config.db).await?;
    }
    let pool = connect(&config.db).await?;
    tracing::info!(
        host = %config.db.host,
        database = %config.db.database,
        version = config.db.version.as_deref().unwrap_or("unspecified"),
        "connected to database"
    );
    ensure_test_table(&pool).await?;

    let state = AppState::new(Arc::new(PgTestRepository::new(pool)));
    let router = app(state, &config.server);

    let listener = TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
