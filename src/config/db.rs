// src/config/db.rs
// DOCUMENTATION: PostgreSQL pool bootstrap for the db storage engine
// PURPOSE: Build pool options from Config and verify the connection

use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Pool settings derived from configuration
fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // idle connections are dropped after 5 minutes, all recycled after 30
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
}

/// Connection URL with the password masked, for logs
fn redacted(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    let user = credentials.split(':').next().unwrap_or_default();
    format!("{}://{}:***@{}", scheme, user, host)
}

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Called once by open_storage when HBNB_TYPE_STORAGE=db.
/// The returned pool is owned by DbStorage and closed on shutdown.
pub async fn init_db_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    log::info!(
        "Connecting to database: {}",
        redacted(&config.database_url)
    );

    let pool = pool_options(config).connect(&config.database_url).await?;
    sqlx::query("SELECT 1").execute(&pool).await?;

    log::info!(
        "Database pool ready (max {} connections)",
        config.db_max_connections
    );
    Ok(pool)
}
