use axum::{Json, extract::State};
use equipcert_common::Identity;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerInfo {
    name: String,
    version: String,
    manufacturer_admin: Identity,
    certification_admin: Identity,
}

#[instrument(skip_all)]
pub async fn info_handler(
    State(AppState {
        manufacturers,
        certifications,
    }): State<AppState>,
) -> Json<ServerInfo> {
    info!("Handling server info request");
    let manufacturer_admin = manufacturers.read().await.admin().clone();
    let certification_admin = certifications.read().await.admin().clone();
    Json(ServerInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        manufacturer_admin,
        certification_admin,
    })
}
