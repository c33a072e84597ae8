//! Transport - The Request/Response Collaborator
//!
//! The controller hands a serialized body to the transport exactly once
//! per validated submission and awaits a single JSON response. Everything
//! behind the call (HTTP client, retries, base URL) belongs to the
//! implementation, not to this contract.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The backend endpoints an account form can target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Account creation.
    Signup,
    /// Account update, keyed by the existing account id.
    UpdateProfile { account_id: String },
}

impl Endpoint {
    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::Signup => "POST",
            Endpoint::UpdateProfile { .. } => "PUT",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Signup => "/api/users/signup".to_string(),
            Endpoint::UpdateProfile { account_id } => {
                format!("/api/users/update/{account_id}")
            }
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// Transport-level faults. Application-level rejections (an `error` field
/// in the response body) are not transport errors; the controller
/// interprets those.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Request/response call to the backend.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `body` to `endpoint` and await the JSON-decoded response body.
    async fn call(&self, endpoint: &Endpoint, body: Value) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn call(&self, endpoint: &Endpoint, body: Value) -> Result<Value, TransportError> {
        (**self).call(endpoint, body).await
    }
}

/// `reqwest`-backed transport against a fixed base URL.
#[cfg(feature = "http")]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "http")]
impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, endpoint: &Endpoint, body: Value) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let request = match endpoint {
            Endpoint::Signup => self.client.post(&url),
            Endpoint::UpdateProfile { .. } => self.client.put(&url),
        };

        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
