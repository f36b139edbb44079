//! `roadnet-service` binary.
//!
//! # Configuration
//!
//! - `ROADNET_DATA_PATH` - Path to the GeoJSON road dataset (default: /data/roads.geojson)
//! - `SERVICE_PORT` - HTTP port (default: 3000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` - Set to `false` to disable Prometheus metrics

use std::net::SocketAddr;

use tracing::{error, info};

use roadnet_service::{app, ServiceConfig};
use roadnet_service_shared::{init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("roadnet");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        tracing::warn!(error = %e, "metrics not initialized, continuing without metrics");
    }

    let config = ServiceConfig::from_env();
    info!(data_path = %config.data_path.display(), port = config.port, "starting road network service");

    let state = AppState::load(&config.data_path).map_err(|e| {
        error!(error = %e, path = %config.data_path.display(), "failed to load application state");
        e
    })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
