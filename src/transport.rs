//! The transport seam: whatever actually puts a request on the wire.
//!
//! [`RequestExecutor`](crate::RequestExecutor) only talks to a [`Transport`].
//! Production code uses [`ReqwestTransport`]; tests substitute their own.

use crate::{metadata::RequestDescriptor, Error, Result};
use async_trait::async_trait;
use http::HeaderMap;

/// A response as handed back by a transport, before any interpretation.
///
/// The status is kept as a raw integer so the executor decides whether it is
/// a valid HTTP status at all.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// The raw status code.
    pub status: u16,

    /// The response headers.
    pub headers: HeaderMap,

    /// The full response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response with no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must be safe to share between concurrent calls.
///
/// # Examples
///
/// ```
/// use appservices::transport::{Transport, TransportResponse};
/// use appservices::metadata::RequestDescriptor;
///
/// struct AlwaysOk;
///
/// #[async_trait::async_trait]
/// impl Transport for AlwaysOk {
///     async fn send(&self, _request: RequestDescriptor) -> appservices::Result<TransportResponse> {
///         Ok(TransportResponse::new(200, r#"{"ok":true}"#))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the raw response.
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse>;
}

/// A [`Transport`] backed by `reqwest`.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport over a default `reqwest::Client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the TLS backend can't be initialized.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Creates a transport over an existing client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, status = status, "Failed to read response body");
            Error::ResponseConversionFailed
        })?;

        Ok(TransportResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
