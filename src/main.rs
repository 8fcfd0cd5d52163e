//! Libris - Library Catalog and Lending Tracker

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::{
    config::AppConfig,
    repository::{schema, Repository},
    services::Services,
    shell::Shell,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing; logs go to stderr so they never interleave
    // with the menu on stdout
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libris={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Libris v{}", env!("CARGO_PKG_VERSION"));

    // Open the embedded store, creating the file on first run. A single
    // connection serializes all access; there is only one operator.
    let options = SqliteConnectOptions::from_str(&config.database.url)
        .expect("Invalid database URL")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Create tables if absent
    schema::init(&pool)
        .await
        .expect("Failed to initialize database schema");

    tracing::info!("Database schema ready");

    // Create repository and services
    let repository = Repository::new(pool.clone());
    let services = Services::new(repository);

    // Run the interactive shell over stdin/stdout
    let mut shell = Shell::new(
        services,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    shell.run().await?;

    // Release the store connection
    pool.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}
