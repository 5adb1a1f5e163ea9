//! HTTP client for the external contact submission endpoint.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`.
//! Server-side (SSR): the request is never issued and reports the transport as
//! unavailable, since submissions only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Anything that prevents a well-formed response from being read (network
//! failure, unreadable or non-JSON body) is a `TransportError`. A parsed
//! response is always a `ContactReply`, whatever its status.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::ContactReply;
use crate::state::contact::ContactFormData;

/// Submission endpoint. Override at build time with `PORTFOLIO_CONTACT_ENDPOINT`.
pub const CONTACT_ENDPOINT: &str = match option_env!("PORTFOLIO_CONTACT_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "/api/contact",
};

/// Failure to obtain a well-formed response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// A response arrived but its body was unreadable or not JSON.
    #[error("malformed response body: {0}")]
    MalformedBody(String),

    /// No HTTP transport exists in this environment.
    #[error("contact transport not available on server")]
    Unavailable,
}

/// One request/response exchange with the submission endpoint.
#[async_trait(?Send)]
pub trait ContactClient {
    async fn send(&self, payload: &ContactFormData) -> Result<ContactReply, TransportError>;
}

/// Classify a completed HTTP exchange by status and raw body.
///
/// # Errors
///
/// Returns `TransportError::MalformedBody` if `body` is not valid JSON,
/// including when it is empty.
pub fn classify_contact_response(ok: bool, body: &str) -> Result<ContactReply, TransportError> {
    let parsed: serde_json::Value =
        serde_json::from_str(body).map_err(|e| TransportError::MalformedBody(e.to_string()))?;
    if ok {
        Ok(ContactReply::Accepted)
    } else {
        Ok(ContactReply::rejected_from(&parsed))
    }
}

/// `fetch`-backed client posting JSON to [`CONTACT_ENDPOINT`] or a custom URL.
#[derive(Clone, Debug)]
pub struct HttpContactClient {
    endpoint: String,
}

impl HttpContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpContactClient {
    fn default() -> Self {
        Self::new(CONTACT_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl ContactClient for HttpContactClient {
    async fn send(&self, payload: &ContactFormData) -> Result<ContactReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(payload)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let ok = resp.ok();
            let body = resp
                .text()
                .await
                .map_err(|e| TransportError::MalformedBody(e.to_string()))?;
            log::debug!("contact endpoint answered {}", resp.status());
            classify_contact_response(ok, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(TransportError::Unavailable)
        }
    }
}
