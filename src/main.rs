use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

use classcue::logging::{init_tracing, shutdown_tracer};
use classcue::metrics::{init_metrics, metrics_app};
use classcue::router::init_router;
use classcue::state::init_app_state;
use classcue_config::ServerConfig;
use classcue_db::run_migrations;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing().context("Failed to initialize logging")?;

    let server_config = ServerConfig::from_env();

    let state = init_app_state()
        .await
        .context("Failed to connect to database")?;
    run_migrations(&state.db)
        .await
        .context("Failed to run database migrations")?;

    if let Some(handle) = init_metrics().context("Failed to install metrics recorder")? {
        let metrics_addr = server_config.metrics_addr();
        let metrics_listener = TcpListener::bind(&metrics_addr)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {}", metrics_addr))?;
        info!(addr = %metrics_addr, "Metrics server listening");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);
    let api_addr = server_config.api_addr();
    let listener = TcpListener::bind(&api_addr)
        .await
        .with_context(|| format!("Failed to bind {}", api_addr))?;

    info!(addr = %api_addr, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", api_addr);
    info!("Scalar UI available at http://{}/scalar", api_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
