//! The request executor: one request in, one decoded value or typed error out.
//!
//! The [`RequestExecutor`] type performs exactly one round trip per call.
//! Use [`ExecutorBuilder`] to swap the transport, the codec, or add headers
//! sent with every request.

use crate::{
    codec::{Codec, JsonCodec},
    metadata::{Headers, RequestDescriptor, ServiceMethod},
    transport::{ReqwestTransport, Transport},
    Error, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// Executes typed requests over a shared transport.
///
/// Clones share the same transport, so one executor can serve any number of
/// concurrent calls. Nothing is retried and nothing is cached.
///
/// # Examples
///
/// ```no_run
/// use appservices::{RequestExecutor, ServiceMethod};
/// use serde::Deserialize;
/// use url::Url;
///
/// #[derive(Deserialize)]
/// struct Title {
///     title: Option<String>,
/// }
///
/// # async fn example() -> Result<(), appservices::Error> {
/// let executor = RequestExecutor::new()?;
/// let url = Url::parse("https://dummyjson.com/products/1").unwrap();
///
/// let product: Title = executor.request(url, ServiceMethod::Get, None, None).await?;
/// println!("Title: {:?}", product.title);
/// # Ok(())
/// # }
/// ```
pub struct RequestExecutor<C = JsonCodec> {
    inner: Arc<ExecutorInner<C>>,
}

struct ExecutorInner<C> {
    transport: Arc<dyn Transport>,
    codec: C,
    default_headers: HeaderMap,
}

impl<C> Clone for RequestExecutor<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl RequestExecutor {
    /// Creates an executor over `reqwest` with the JSON codec.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client can't be created.
    pub fn new() -> Result<Self> {
        ExecutorBuilder::new().build()
    }

    /// Creates an executor over the given transport with the JSON codec.
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            inner: Arc::new(ExecutorInner {
                transport: Arc::new(transport),
                codec: JsonCodec,
                default_headers: HeaderMap::new(),
            }),
        }
    }

    /// Creates a new `ExecutorBuilder`.
    pub fn builder() -> ExecutorBuilder {
        ExecutorBuilder::new()
    }
}

impl<C: Codec> RequestExecutor<C> {
    /// Returns the codec used for request and response bodies.
    pub fn codec(&self) -> &C {
        &self.inner.codec
    }

    /// Performs one request and decodes the response into `T`.
    ///
    /// The body is attached only for `POST`. Caller headers are applied
    /// first, then `Content-Type` and `Accept` are set to `application/json`,
    /// replacing any caller value for those two names.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidHeader`] if a caller header is not legal HTTP
    /// * [`Error::Network`] if no response was received
    /// * [`Error::ResponseConversionFailed`] if the response can't be interpreted
    /// * [`Error::HttpStatus`] for any status outside `200..=299`
    /// * [`Error::Decode`] if the body is not a valid `T`
    pub async fn request<T>(
        &self,
        url: Url,
        method: ServiceMethod,
        body: Option<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut descriptor = RequestDescriptor::new(url, method).with_body(body);
        descriptor.headers = self.inner.default_headers.clone();
        let descriptor = descriptor.with_headers(headers)?;

        tracing::debug!(
            method = %descriptor.method,
            url = %descriptor.url,
            has_body = descriptor.body.is_some(),
            "Executing HTTP request"
        );

        let start_time = Instant::now();
        let response = self.inner.transport.send(descriptor).await?;
        let latency = start_time.elapsed();

        let status = StatusCode::from_u16(response.status).map_err(|e| {
            tracing::error!(status = response.status, error = %e, "Response has no valid status");
            Error::ResponseConversionFailed
        })?;

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            content_type = ?response.headers.get(header::CONTENT_TYPE),
            "Received HTTP response"
        );

        check_status(status)?;

        self.inner.codec.decode(&response.body).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to decode response");
        })
    }
}

/// Fails with [`Error::HttpStatus`] unless `status` is in `200..=299`.
fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    if status.is_client_error() {
        tracing::error!(status = status.as_u16(), "Client error (4xx)");
    } else if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), "Server error (5xx)");
    }

    Err(Error::HttpStatus(status.as_u16()))
}

/// Builder for configuring and creating a [`RequestExecutor`].
///
/// # Examples
///
/// ```no_run
/// use appservices::ExecutorBuilder;
///
/// # fn example() -> Result<(), appservices::Error> {
/// let executor = ExecutorBuilder::new()
///     .default_header("User-Agent", "tester/1.0")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ExecutorBuilder<C = JsonCodec> {
    transport: Option<Arc<dyn Transport>>,
    codec: C,
    default_headers: HeaderMap,
}

impl ExecutorBuilder {
    /// Creates a new `ExecutorBuilder` with the JSON codec and no transport set.
    pub fn new() -> Self {
        Self {
            transport: None,
            codec: JsonCodec,
            default_headers: HeaderMap::new(),
        }
    }
}

impl<C: Codec> ExecutorBuilder<C> {
    /// Sets the transport. Defaults to [`ReqwestTransport`].
    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    /// Sets a transport that is also used elsewhere.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Uses `reqwest` with an already configured client.
    pub fn reqwest_client(self, client: reqwest::Client) -> Self {
        self.transport(ReqwestTransport::from_client(client))
    }

    /// Replaces the codec.
    pub fn codec<D: Codec>(self, codec: D) -> ExecutorBuilder<D> {
        ExecutorBuilder {
            transport: self.transport,
            codec,
            default_headers: self.default_headers,
        }
    }

    /// Adds a header sent with every request.
    ///
    /// Caller headers of the same name replace it, and it never overrides
    /// `Content-Type` or `Accept`.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::InvalidHeader(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::InvalidHeader(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Builds the configured `RequestExecutor`.
    ///
    /// # Errors
    ///
    /// Returns an error if no transport was set and the default `reqwest`
    /// client can't be created.
    pub fn build(self) -> Result<RequestExecutor<C>> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new()?),
        };

        Ok(RequestExecutor {
            inner: Arc::new(ExecutorInner {
                transport,
                codec: self.codec,
                default_headers: self.default_headers,
            }),
        })
    }
}

impl Default for ExecutorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
