//! JSON extractor for milestone configuration bodies that validates
//! the six required top-level keys are present before accepting

use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use hyper::StatusCode;
use log::error;
use serde_json::Value;
use thiserror::Error;

use crate::definitions::groups::GroupConfig;
use crate::http::models::errors::{DynHttpError, HttpError};

/// [axum::Json] extractor alternative for configuration writes: only
/// the presence of the required keys is checked, field values are
/// accepted as-is without any type validation
pub struct GroupConfigBody(pub GroupConfig);

/// Error types that could be returned on rejection
#[derive(Debug, Error)]
pub enum RejectionError {
    /// Unable to load the content
    #[error("Content error")]
    BadContent,
    /// The request carried no usable body
    #[error("No data provided")]
    EmptyBody,
    /// Failed to deserialize
    #[error(transparent)]
    Deserialize(serde_path_to_error::Error<serde_json::Error>),
    /// One of the required top-level keys is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl HttpError for RejectionError {
    fn status(&self) -> StatusCode {
        match self {
            RejectionError::BadContent
            | RejectionError::EmptyBody
            | RejectionError::Deserialize(_)
            | RejectionError::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl<S> FromRequest<S> for GroupConfigBody
where
    S: Send + Sync,
{
    type Rejection = DynHttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Get request bytes
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            error!("Failed to get request bytes: {}", err);
            RejectionError::BadContent
        })?;

        if bytes.is_empty() {
            return Err(RejectionError::EmptyBody.into());
        }

        // Deserialize value
        let deserializer = &mut serde_json::Deserializer::from_slice(&bytes);
        let value: Value =
            serde_path_to_error::deserialize(deserializer).map_err(RejectionError::Deserialize)?;

        // Bodies that aren't a non-empty object carry no configuration
        let map = match value {
            Value::Object(map) if !map.is_empty() => map,
            _ => return Err(RejectionError::EmptyBody.into()),
        };

        // Check key presence in the documented field order so the
        // first missing field is the one reported
        for field in GroupConfig::REQUIRED_FIELDS {
            if !map.contains_key(field) {
                return Err(RejectionError::MissingField(field).into());
            }
        }

        let config: GroupConfig =
            serde_json::from_value(Value::Object(map)).map_err(|err| {
                error!("Failed to deserialize config body: {}", err);
                RejectionError::BadContent
            })?;

        Ok(GroupConfigBody(config))
    }
}
