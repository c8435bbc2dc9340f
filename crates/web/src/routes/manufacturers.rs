use axum::{
    Json,
    extract::{Path, State},
};
use equipcert_common::Identity;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{AppState, error::ApiError, extract::Caller, routes::Acknowledged};

#[derive(Debug, Serialize, Deserialize)]
pub struct ManufacturerStatus {
    manufacturer: Identity,
    verified: bool,
}

#[instrument(skip_all)]
pub async fn list_manufacturers_handler(
    State(AppState { manufacturers, .. }): State<AppState>,
) -> Json<Vec<Identity>> {
    Json(manufacturers.read().await.list_manufacturers())
}

#[instrument(skip_all)]
pub async fn manufacturer_query_handler(
    State(AppState { manufacturers, .. }): State<AppState>,
    Path(manufacturer): Path<Identity>,
) -> Json<ManufacturerStatus> {
    let verified = manufacturers
        .read()
        .await
        .is_verified_manufacturer(&manufacturer);
    Json(ManufacturerStatus {
        manufacturer,
        verified,
    })
}

#[instrument(skip_all)]
pub async fn add_manufacturer_handler(
    State(AppState { manufacturers, .. }): State<AppState>,
    Caller(caller): Caller,
    Path(manufacturer): Path<Identity>,
) -> Result<Json<Acknowledged>, ApiError> {
    info!(%caller, %manufacturer, "Handling add manufacturer request");
    manufacturers
        .write()
        .await
        .add_manufacturer(&caller, manufacturer)?;
    Ok(Json(Acknowledged::OK))
}

#[instrument(skip_all)]
pub async fn remove_manufacturer_handler(
    State(AppState { manufacturers, .. }): State<AppState>,
    Caller(caller): Caller,
    Path(manufacturer): Path<Identity>,
) -> Result<Json<Acknowledged>, ApiError> {
    info!(%caller, %manufacturer, "Handling remove manufacturer request");
    manufacturers
        .write()
        .await
        .remove_manufacturer(&caller, &manufacturer)?;
    Ok(Json(Acknowledged::OK))
}
