//! Database bootstrap: create the database if missing, open the pool, create the `test` table.

use crate::config::DbConfig;
use crate::dal::TEST_TABLE;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Ensure `config.database` exists; create it if not. Connects to the default
/// `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(config: &DbConfig) -> Result<(), AppError> {
    let db_name = config.database.as_str();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let mut conn: sqlx::PgConnection = config.connect_options_for("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Open the shared pool used by every request.
pub async fn connect(config: &DbConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(config.connect_options())
        .await?;
    Ok(pool)
}

/// Create the `test` table if it does not exist.
pub async fn ensure_test_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&test_table_ddl()).execute(pool).await?;
    Ok(())
}

fn test_table_ddl() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            courseid INTEGER NOT NULL,
            date TIMESTAMPTZ,
            updatedat TIMESTAMPTZ
        )
        "#,
        quote_ident(TEST_TABLE)
    )
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
