//! Conversions from transport, JSON and filesystem errors into [`HubError`].
//!
//! `HubError` lives in the domain crate, which knows nothing about reqwest,
//! so the `From` impls hang off the [`InfraError`] newtype instead.

use std::io::{Error as IoError, ErrorKind};

use creatorhub_domain::HubError;
use reqwest::StatusCode;

/// Infrastructure-side wrapper around a domain error.
#[derive(Debug)]
pub struct InfraError(pub HubError);

impl From<InfraError> for HubError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<HubError> for InfraError {
    fn from(value: HubError) -> Self {
        InfraError(value)
    }
}

/// Map a final HTTP status to a domain error. Rate limits (429) count as
/// network errors.
pub(crate) fn status_error(status: StatusCode) -> HubError {
    let message = format!("HTTP {} {}", status.as_u16(), status.canonical_reason().unwrap_or("unknown status"));
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => HubError::Auth(message),
        StatusCode::NOT_FOUND => HubError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => HubError::Network(message),
        s if s.is_client_error() => HubError::InvalidInput(message),
        _ => HubError::Network(message),
    }
}

impl From<reqwest::Error> for InfraError {
    fn from(err: reqwest::Error) -> Self {
        let mapped = if err.is_timeout() {
            HubError::Network("HTTP request timed out".into())
        } else if err.is_connect() {
            HubError::Network("HTTP connection failure".into())
        } else if err.is_decode() {
            HubError::Parse(format!("HTTP response body could not be decoded: {err}"))
        } else if let Some(status) = err.status() {
            status_error(status)
        } else {
            HubError::Network(err.to_string())
        };
        InfraError(mapped)
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        let mapped = if err.is_io() {
            HubError::Io(err.to_string())
        } else {
            HubError::Parse(format!("invalid JSON at line {} column {}: {err}", err.line(), err.column()))
        };
        InfraError(mapped)
    }
}

impl From<IoError> for InfraError {
    fn from(err: IoError) -> Self {
        let mapped = match err.kind() {
            ErrorKind::NotFound => HubError::NotFound(err.to_string()),
            ErrorKind::PermissionDenied => HubError::Io(format!("permission denied: {err}")),
            _ => HubError::Io(err.to_string()),
        };
        InfraError(mapped)
    }
}
