//! Typed service calls bound to a set of parameters and headers.

use crate::{
    codec::{Codec, JsonCodec},
    metadata::{Headers, Parameters, ServiceMethod},
    Error, RequestExecutor, Result,
};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use url::Url;

/// A call that decodes its response into `T`.
///
/// Create one per response shape. The held parameters are sent as a JSON
/// object body on `POST`; on `GET` they are encoded but never attached.
///
/// # Examples
///
/// ```no_run
/// use appservices::{AppService, ServiceMethod};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Product {
///     id: Option<u64>,
///     title: Option<String>,
/// }
///
/// # async fn example() -> Result<(), appservices::Error> {
/// let service = AppService::<Product>::new()?
///     .with_header("Authorization", "Bearer token")
///     .with_parameter("q", "phone");
///
/// let product = service
///     .call("https://dummyjson.com/products/1", ServiceMethod::Get)
///     .await?;
/// println!("{product:?}");
/// # Ok(())
/// # }
/// ```
pub struct AppService<T, C = JsonCodec> {
    executor: RequestExecutor<C>,
    headers: Option<Headers>,
    parameters: Option<Parameters>,
    _response: PhantomData<fn() -> T>,
}

impl<T> AppService<T> {
    /// Creates a service over a fresh `reqwest` executor.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client can't be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_executor(RequestExecutor::new()?))
    }
}

impl<T, C> AppService<T, C> {
    /// Creates a service over an existing executor.
    pub fn with_executor(executor: RequestExecutor<C>) -> Self {
        Self {
            executor,
            headers: None,
            parameters: None,
            _response: PhantomData,
        }
    }

    /// Replaces the held headers.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Adds one header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replaces the held parameters.
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Adds one parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(Parameters::new)
            .insert(key.into(), value.into());
        self
    }

    /// The held headers, if any.
    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    /// The held parameters, if any.
    pub fn parameters(&self) -> Option<&Parameters> {
        self.parameters.as_ref()
    }
}

impl<T, C> AppService<T, C>
where
    T: DeserializeOwned,
    C: Codec,
{
    /// Calls `url_string` with `method` and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// * [`Error::BadUrl`] if `url_string` is not an absolute URL
    /// * [`Error::SerializationFailed`] if the parameters can't be encoded
    /// * anything [`RequestExecutor::request`] returns
    pub async fn call(&self, url_string: &str, method: ServiceMethod) -> Result<T> {
        let url = Url::parse(url_string).map_err(|e| {
            tracing::debug!(url = url_string, error = %e, "Rejected malformed URL");
            Error::BadUrl
        })?;

        let empty = Parameters::new();
        let parameters = self.parameters.as_ref().unwrap_or(&empty);
        let body = self.executor.codec().encode_parameters(parameters)?;

        self.executor
            .request(url, method, Some(body), self.headers.as_ref())
            .await
    }
}
