use axum::{Json, extract::State};
use equipcert_common::Identity;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{AppState, error::ApiError, extract::Caller, routes::Acknowledged};

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminStatus {
    admin: Identity,
    /// Whether the identity in `x-caller` is the admin; false without the header
    caller_is_admin: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferAdminRequest {
    new_admin: Identity,
}

#[instrument(skip_all)]
pub async fn manufacturer_admin_handler(
    State(AppState { manufacturers, .. }): State<AppState>,
    caller: Option<Caller>,
) -> Json<AdminStatus> {
    let registry = manufacturers.read().await;
    Json(AdminStatus {
        admin: registry.admin().clone(),
        caller_is_admin: caller.is_some_and(|Caller(caller)| registry.is_admin(&caller)),
    })
}

#[instrument(skip_all)]
pub async fn transfer_manufacturer_admin_handler(
    State(AppState { manufacturers, .. }): State<AppState>,
    Caller(caller): Caller,
    Json(TransferAdminRequest { new_admin }): Json<TransferAdminRequest>,
) -> Result<Json<Acknowledged>, ApiError> {
    info!(%caller, %new_admin, "Handling manufacturer admin transfer");
    manufacturers
        .write()
        .await
        .transfer_admin(&caller, new_admin)?;
    Ok(Json(Acknowledged::OK))
}

#[instrument(skip_all)]
pub async fn certification_admin_handler(
    State(AppState { certifications, .. }): State<AppState>,
    caller: Option<Caller>,
) -> Json<AdminStatus> {
    let registry = certifications.read().await;
    Json(AdminStatus {
        admin: registry.admin().clone(),
        caller_is_admin: caller.is_some_and(|Caller(caller)| registry.is_admin(&caller)),
    })
}

#[instrument(skip_all)]
pub async fn transfer_certification_admin_handler(
    State(AppState { certifications, .. }): State<AppState>,
    Caller(caller): Caller,
    Json(TransferAdminRequest { new_admin }): Json<TransferAdminRequest>,
) -> Result<Json<Acknowledged>, ApiError> {
    info!(%caller, %new_admin, "Handling certification admin transfer");
    certifications
        .write()
        .await
        .transfer_admin(&caller, new_admin)?;
    Ok(Json(Acknowledged::OK))
}
