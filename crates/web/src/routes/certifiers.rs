use axum::{
    Json,
    extract::{Path, State},
};
use equipcert_common::Identity;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{AppState, error::ApiError, extract::Caller, routes::Acknowledged};

#[derive(Debug, Serialize, Deserialize)]
pub struct CertifierStatus {
    certifier: Identity,
    authorized: bool,
}

#[instrument(skip_all)]
pub async fn list_certifiers_handler(
    State(AppState { certifications, .. }): State<AppState>,
) -> Json<Vec<Identity>> {
    Json(certifications.read().await.list_certifiers())
}

#[instrument(skip_all)]
pub async fn certifier_query_handler(
    State(AppState { certifications, .. }): State<AppState>,
    Path(certifier): Path<Identity>,
) -> Json<CertifierStatus> {
    let authorized = certifications
        .read()
        .await
        .is_authorized_certifier(&certifier);
    Json(CertifierStatus {
        certifier,
        authorized,
    })
}

#[instrument(skip_all)]
pub async fn add_certifier_handler(
    State(AppState { certifications, .. }): State<AppState>,
    Caller(caller): Caller,
    Path(certifier): Path<Identity>,
) -> Result<Json<Acknowledged>, ApiError> {
    info!(%caller, %certifier, "Handling add certifier request");
    certifications
        .write()
        .await
        .add_certifier(&caller, certifier)?;
    Ok(Json(Acknowledged::OK))
}

#[instrument(skip_all)]
pub async fn remove_certifier_handler(
    State(AppState { certifications, .. }): State<AppState>,
    Caller(caller): Caller,
    Path(certifier): Path<Identity>,
) -> Result<Json<Acknowledged>, ApiError> {
    info!(%caller, %certifier, "Handling remove certifier request");
    certifications
        .write()
        .await
        .remove_certifier(&caller, &certifier)?;
    Ok(Json(Acknowledged::OK))
}
