use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use equipcert_common::{CertificationRegistry, ManufacturerRegistry, config::RegistryConfig};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{error, info, instrument, trace};

use crate::web_config::WebConfig;

mod error;
mod extract;
mod routes;
mod web_config;

/// Each registry sits behind its own lock so that mutations are serialized per registry.
#[derive(Clone)]
pub(crate) struct AppState {
    manufacturers: Arc<RwLock<ManufacturerRegistry>>,
    certifications: Arc<RwLock<CertificationRegistry>>,
}

impl AppState {
    pub(crate) fn from_config(config: &RegistryConfig) -> Result<Self> {
        let manufacturers = config.build_manufacturer_registry();
        let certifications = config
            .build_certification_registry()
            .context("Failed to seed certifiers")?;
        Ok(Self::from_registries(manufacturers, certifications))
    }

    pub(crate) fn from_registries(
        manufacturers: ManufacturerRegistry,
        certifications: CertificationRegistry,
    ) -> Self {
        Self {
            manufacturers: Arc::new(RwLock::new(manufacturers)),
            certifications: Arc::new(RwLock::new(certifications)),
        }
    }
}

pub(crate) fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .with_state(state)
}

#[instrument(skip_all, name = "start_web")]
pub async fn start() -> Result<()> {
    trace!("Starting web server");

    // Load configuration
    let config = match WebConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid web configuration");
            anyhow::bail!("Invalid web configuration: {}", e);
        }
    };
    info!("Starting web server with configuration: {:?}", config);

    let app_state = AppState::from_config(&config.registries)?;
    let app = app(app_state);

    // Start server
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .context("Socket binding failed")?;
    info!(%addr, "Listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
