use axum::{
    Json,
    extract::{Path, State},
};
use equipcert_common::CertificationRecord;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    AppState,
    error::ApiError,
    extract::{Caller, CurrentBlockHeight},
    routes::Acknowledged,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct CertificationStatus {
    equipment_id: String,
    standard_id: String,
    certified: bool,
    details: Option<CertificationRecord>,
}

#[instrument(skip_all)]
pub async fn certification_query_handler(
    State(AppState { certifications, .. }): State<AppState>,
    Path((equipment_id, standard_id)): Path<(String, String)>,
) -> Json<CertificationStatus> {
    let registry = certifications.read().await;
    let certified = registry.is_certified(&equipment_id, &standard_id);
    let details = registry.get_certification_details(&equipment_id, &standard_id);
    Json(CertificationStatus {
        equipment_id,
        standard_id,
        certified,
        details,
    })
}

#[instrument(skip_all)]
pub async fn certify_equipment_handler(
    State(AppState { certifications, .. }): State<AppState>,
    Caller(caller): Caller,
    CurrentBlockHeight(block_height): CurrentBlockHeight,
    Path((equipment_id, standard_id)): Path<(String, String)>,
) -> Result<Json<Acknowledged>, ApiError> {
    info!(%caller, %equipment_id, %standard_id, %block_height, "Handling certify equipment request");
    certifications.write().await.certify_equipment(
        &caller,
        &equipment_id,
        &standard_id,
        block_height,
    )?;
    Ok(Json(Acknowledged::OK))
}
