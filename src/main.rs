// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, storage engine, and start HTTP server

mod app;
mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
#[cfg(test)]
mod test_support;

use actix_web::HttpServer;
use anyhow::Context;
use config::Config;
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},sqlx=warn", config.log_level));
    }
    env_logger::init();

    log::info!("Starting hbnb API...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Open the storage engine and load what it already holds
    let storage = db::open_storage(&config)
        .await
        .context("failed to open storage")?;

    // 5. Start HTTP server
    let server_storage = storage.clone();
    HttpServer::new(move || app::build(server_storage.clone()))
        .bind((config.server_address.as_str(), config.server_port))
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server_address, config.server_port
            )
        })?
        .run()
        .await?;

    // 6. Flush and release the engine once the server has stopped
    log::info!("Shutting down, closing storage");
    storage.close().await.context("failed to close storage")?;

    Ok(())
}
