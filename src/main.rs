//! Binary entry point.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use firequote::{api::create_router, config::Config, database::Database, error::Result};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting quote request service...");

    let config = Config::from_env()?;
    config.validate()?;
    info!(environment = ?config.environment, "Configuration loaded");

    let database = Database::connect(&config.database_url).await?;
    info!("Database connected");

    database.migrate().await?;
    info!("Database migrations applied");

    let app = create_router(database, config.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| firequote::error::AppError::Server(e.to_string()))?;

    Ok(())
}

/// Sets up structured logging from `RUST_LOG`, with a sane default filter.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("firequote=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .pretty(),
        )
        .init();
}
