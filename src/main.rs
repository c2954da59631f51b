mod app_system;
mod clients;
mod config;
mod domain;
mod error;
mod http;
mod messages;
mod user_actor;


use tracing::info;

use crate::app_system::{setup_tracing, UserSystem};
use crate::config::Config;
use crate::http::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    setup_tracing();

    let config = Config::from_env();
    let addr = config.bind_addr()?;
    info!(id_policy = %config.id_policy, "Starting users API");

    let system = UserSystem::new(config.id_policy);
    let app = http::router(AppState::new(system.user_client.clone()));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on port {}", config.port);
    info!("Health check: http://localhost:{}/health", config.port);
    info!("API endpoints: http://localhost:{}/api/users", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
