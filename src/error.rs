//! Error types for typed service calls.
//!
//! Every failure aborts the call that produced it. Nothing here is retried
//! and no partial result is kept.

/// The error type for everything a service call can fail with.
///
/// # Examples
///
/// ```no_run
/// use appservices::{AppService, Error, ServiceMethod};
///
/// # async fn example() -> Result<(), Error> {
/// let service = AppService::<serde_json::Value>::new()?;
///
/// match service.call("https://api.example.com/products/1", ServiceMethod::Get).await {
///     Ok(value) => println!("Got: {value}"),
///     Err(Error::HttpStatus(code)) => eprintln!("Server answered {code}"),
///     Err(Error::Decode { message, raw_body }) => {
///         eprintln!("Unexpected shape: {message}");
///         eprintln!("Body was: {raw_body}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The URL string could not be parsed as an absolute URL.
    #[error("Malformed URL was sent to session.")]
    BadUrl,

    /// The transport returned something that can't be read as an HTTP response.
    ///
    /// Raised for an out-of-range status code or an unreadable body.
    #[error("Typecasting failed.")]
    ResponseConversionFailed,

    /// The server answered with a status outside `200..=299`.
    ///
    /// The body of such a response is never decoded.
    #[error("HTTP status error: {0}")]
    HttpStatus(u16),

    /// The parameter mapping could not be serialized to JSON.
    #[error("JSON Serialization Failed: {0}")]
    SerializationFailed(String),

    /// Catch-all for failures that have no better classification.
    #[error("Something went wrong!")]
    SomethingWentWrong,

    /// The response body did not match the expected type.
    ///
    /// # Fields
    ///
    /// * `message` - The decoder's diagnostic
    /// * `raw_body` - The body that failed to decode, lossily converted to UTF-8
    #[error("Failed to decode response: {message}")]
    Decode {
        /// The decoder's diagnostic
        message: String,
        /// The body that failed to decode
        raw_body: String,
    },

    /// The request never produced a response (DNS, connect, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A caller-supplied header name or value is not legal in HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl Error {
    /// Returns the HTTP status code for `HttpStatus` errors.
    ///
    /// ```
    /// use appservices::Error;
    ///
    /// assert_eq!(Error::HttpStatus(404).status(), Some(404));
    /// assert_eq!(Error::BadUrl.status(), None);
    /// ```
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` if the server answered with a non-2xx status.
    pub fn is_http_status(&self) -> bool {
        matches!(self, Error::HttpStatus(_))
    }

    /// Returns `true` if the body arrived but did not decode into the expected type.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}

/// A specialized `Result` type for service calls.
pub type Result<T> = std::result::Result<T, Error>;
