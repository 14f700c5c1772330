use axum::{Router, routing::get};
use kpa_api::{
    config::ApiConfig,
    metrics::{init_metrics, metrics_handler},
    state::ApiState,
    tracing::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    let config = ApiConfig::from_env()?;

    init_tracing(&config.env);

    let metrics_handle = init_metrics()?;
    let bind_addr = config.bind_addr();

    // Initialize the application state
    let state = ApiState::new(config)?;

    let app = kpa_api::router::app(state).merge(
        Router::new()
            .route("/metrics", get(metrics_handler))
            .with_state(metrics_handle),
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server running on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
    }
}
