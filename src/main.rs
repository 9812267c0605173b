// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, document store, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{anyhow, Context};
use config::Config;
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        return Err(anyhow!(e));
    }

    log::info!("Starting relationship tracker API...");
    log::info!("Environment: {}", config.environment);
    log::info!("Store backend: {}", config.store_backend);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize the document store; held here so it can be closed after shutdown
    let store = config::init_store(&config)
        .await
        .context("failed to initialize document store")?;

    // 5. Start HTTP server
    // No authentication and any origin may call the API: this is meant for
    // a single trusted user on a private deployment.
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let app_store = web::Data::from(store.clone());

    HttpServer::new(move || {
        App::new()
            .app_data(app_store.clone())
            .app_data(handlers::json_config())
            // Middleware
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::api_config)
    })
    .bind(&server_addr)
    .with_context(|| format!("failed to bind {}", server_addr))?
    .run()
    .await?;

    // 6. Release the store once every worker has stopped
    store.close().await;
    log::info!("Shutdown complete");

    Ok(())
}
