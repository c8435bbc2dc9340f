use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};

use crate::AppState;

mod admin;
mod certifications;
mod certifiers;
mod info;
mod manufacturers;

/// Body returned by every successful mutation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledged {
    ok: bool,
}

impl Acknowledged {
    pub const OK: Acknowledged = Acknowledged { ok: true };
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/info", get(info::info_handler))
        .route(
            "/manufacturers",
            get(manufacturers::list_manufacturers_handler),
        )
        .route(
            "/manufacturers/:manufacturer",
            get(manufacturers::manufacturer_query_handler)
                .post(manufacturers::add_manufacturer_handler)
                .delete(manufacturers::remove_manufacturer_handler),
        )
        .route("/certifiers", get(certifiers::list_certifiers_handler))
        .route(
            "/certifiers/:certifier",
            get(certifiers::certifier_query_handler)
                .post(certifiers::add_certifier_handler)
                .delete(certifiers::remove_certifier_handler),
        )
        .route(
            "/certifications/:equipment/:standard",
            get(certifications::certification_query_handler)
                .post(certifications::certify_equipment_handler),
        )
        .route(
            "/admin/manufacturers",
            get(admin::manufacturer_admin_handler)
                .post(admin::transfer_manufacturer_admin_handler),
        )
        .route(
            "/admin/certifications",
            get(admin::certification_admin_handler)
                .post(admin::transfer_certification_admin_handler),
        )
}
