use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use equipcert_common::{BlockHeight, Identity};

use crate::error::ApiError;

pub const CALLER_HEADER: &str = "x-caller";
pub const BLOCK_HEIGHT_HEADER: &str = "x-block-height";

/// Caller identity resolved by the execution environment in front of this service.
#[derive(Debug, Clone)]
pub struct Caller(pub Identity);

/// Block height at which the execution environment is processing the call.
#[derive(Debug, Clone, Copy)]
pub struct CurrentBlockHeight(pub BlockHeight);

fn header_value<'a>(parts: &'a Parts, header: &'static str) -> Result<&'a str, ApiError> {
    let value = parts
        .headers
        .get(header)
        .ok_or(ApiError::MissingHeader(header))?;
    let value = value.to_str().map_err(|e| ApiError::InvalidHeader {
        header,
        reason: e.to_string(),
    })?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::InvalidHeader {
            header,
            reason: "value is empty".to_string(),
        });
    }
    Ok(value)
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_value(parts, CALLER_HEADER).map(|value| Caller(Identity::new(value)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentBlockHeight
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = header_value(parts, BLOCK_HEIGHT_HEADER)?;
        value
            .parse::<BlockHeight>()
            .map(CurrentBlockHeight)
            .map_err(|e| ApiError::InvalidHeader {
                header: BLOCK_HEIGHT_HEADER,
                reason: e.to_string(),
            })
    }
}
