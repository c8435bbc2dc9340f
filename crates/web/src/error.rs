use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use equipcert_common::RegistryError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Registry(#[from] RegistryError),
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),
    #[error("Invalid header {header}: {reason}")]
    InvalidHeader {
        header: &'static str,
        reason: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u32>,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Registry(e) => {
                let status = match e {
                    RegistryError::Unauthorized => StatusCode::FORBIDDEN,
                    RegistryError::AlreadyVerified | RegistryError::AlreadyCertified => {
                        StatusCode::CONFLICT
                    }
                    RegistryError::NotFound => StatusCode::NOT_FOUND,
                };
                (status, Some(e.code()))
            }
            ApiError::MissingHeader(_) | ApiError::InvalidHeader { .. } => {
                (StatusCode::BAD_REQUEST, None)
            }
        };
        let body = ErrorBody {
            code,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
