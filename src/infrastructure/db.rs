use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Embedded migrations from `migrations/`, applied on connect.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Opens a SQLite pool for the given URL and applies pending migrations.
///
/// Foreign keys are enabled explicitly; the team-delete cascade and the
/// match RESTRICT rule both depend on it. An in-memory database exists per
/// connection, so those pools are capped at a single connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}
