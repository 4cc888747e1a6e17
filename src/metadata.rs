//! Request descriptors and the header rules applied to every call.

use crate::{Error, Result};
use http::{header, HeaderMap, HeaderName, HeaderValue, Method};
use std::collections::HashMap;
use std::fmt;
use url::Url;

/// Header name to header value, as supplied by callers.
pub type Headers = HashMap<String, String>;

/// Parameters sent as a flat JSON object in the request body.
pub type Parameters = HashMap<String, String>;

/// `application/json`, the value of both default headers.
pub const APPLICATION_JSON: &str = "application/json";

/// `application/x-www-form-urlencoded`, for callers posting form data.
pub const FORM_URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// The HTTP methods a service call can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceMethod {
    /// `GET`. Never carries a body.
    Get,
    /// `POST`.
    Post,
}

impl ServiceMethod {
    /// Returns the method as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceMethod::Get => "GET",
            ServiceMethod::Post => "POST",
        }
    }

    /// Returns `true` if a body may be attached to requests using this method.
    pub fn allows_body(&self) -> bool {
        matches!(self, ServiceMethod::Post)
    }
}

impl fmt::Display for ServiceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ServiceMethod> for Method {
    fn from(method: ServiceMethod) -> Self {
        match method {
            ServiceMethod::Get => Method::GET,
            ServiceMethod::Post => Method::POST,
        }
    }
}

/// Everything needed to send a single request.
///
/// Built fresh for each call and handed to the transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// The absolute request URL.
    pub url: Url,

    /// The request method.
    pub method: ServiceMethod,

    /// The payload. Always `None` for `GET`.
    pub body: Option<Vec<u8>>,

    /// The effective request headers, defaults included.
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    /// Creates a descriptor with no body and no headers.
    pub fn new(url: Url, method: ServiceMethod) -> Self {
        Self {
            url,
            method,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Attaches `body` when the method allows one.
    ///
    /// A body given to a `GET` descriptor is dropped.
    ///
    /// ```
    /// use appservices::metadata::{RequestDescriptor, ServiceMethod};
    /// use url::Url;
    ///
    /// let url = Url::parse("https://example.test/ok").unwrap();
    /// let get = RequestDescriptor::new(url.clone(), ServiceMethod::Get).with_body(Some(b"{}".to_vec()));
    /// assert!(get.body.is_none());
    ///
    /// let post = RequestDescriptor::new(url, ServiceMethod::Post).with_body(Some(b"{}".to_vec()));
    /// assert_eq!(post.body.as_deref(), Some(&b"{}"[..]));
    /// ```
    pub fn with_body(mut self, body: Option<Vec<u8>>) -> Self {
        if self.method.allows_body() {
            self.body = body;
        }
        self
    }

    /// Applies caller headers followed by the default JSON headers.
    ///
    /// Caller entries are inserted first. The defaults are inserted last and
    /// replace any caller value for `Content-Type` or `Accept`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHeader`] if a caller header name or value is invalid.
    pub fn with_headers(mut self, headers: Option<&Headers>) -> Result<Self> {
        if let Some(headers) = headers {
            for (name, value) in headers {
                let name = HeaderName::try_from(name.as_str())
                    .map_err(|e| Error::InvalidHeader(format!("{name}: {e}")))?;
                let value = HeaderValue::try_from(value.as_str())
                    .map_err(|e| Error::InvalidHeader(format!("{name}: {e}")))?;
                self.headers.insert(name, value);
            }
        }
        apply_default_headers(&mut self.headers);
        Ok(self)
    }
}

/// Inserts `Content-Type: application/json` and `Accept: application/json`.
pub fn apply_default_headers(headers: &mut HeaderMap) {
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(header::ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.test/ok").unwrap()
    }

    #[test]
    fn test_no_headers_applies_only_defaults() {
        let descriptor = RequestDescriptor::new(url(), ServiceMethod::Get)
            .with_headers(None)
            .unwrap();

        assert_eq!(descriptor.headers.len(), 2);
        assert_eq!(descriptor.headers[header::CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(descriptor.headers[header::ACCEPT], APPLICATION_JSON);
    }

    #[test]
    fn test_empty_headers_applies_only_defaults() {
        let descriptor = RequestDescriptor::new(url(), ServiceMethod::Get)
            .with_headers(Some(&Headers::new()))
            .unwrap();

        assert_eq!(descriptor.headers.len(), 2);
    }

    #[test]
    fn test_caller_headers_are_merged_with_defaults() {
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer abc".to_string());
        headers.insert("X-Client".to_string(), "ios".to_string());

        let descriptor = RequestDescriptor::new(url(), ServiceMethod::Post)
            .with_headers(Some(&headers))
            .unwrap();

        assert_eq!(descriptor.headers.len(), 4);
        assert_eq!(descriptor.headers["authorization"], "Bearer abc");
        assert_eq!(descriptor.headers["x-client"], "ios");
        assert_eq!(descriptor.headers[header::CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(descriptor.headers[header::ACCEPT], APPLICATION_JSON);
    }

    #[test]
    fn test_default_content_type_wins_over_caller() {
        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), FORM_URL_ENCODED.to_string());

        let descriptor = RequestDescriptor::new(url(), ServiceMethod::Post)
            .with_headers(Some(&headers))
            .unwrap();

        let values: Vec<_> = descriptor.headers.get_all(header::CONTENT_TYPE).iter().collect();
        assert_eq!(values, vec![APPLICATION_JSON]);
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let mut headers = Headers::new();
        headers.insert("bad header".to_string(), "value".to_string());

        let result = RequestDescriptor::new(url(), ServiceMethod::Get).with_headers(Some(&headers));
        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn test_get_never_carries_a_body() {
        let descriptor =
            RequestDescriptor::new(url(), ServiceMethod::Get).with_body(Some(b"{\"a\":\"b\"}".to_vec()));
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn test_post_carries_body() {
        let descriptor =
            RequestDescriptor::new(url(), ServiceMethod::Post).with_body(Some(b"{}".to_vec()));
        assert_eq!(descriptor.body.as_deref(), Some(&b"{}"[..]));

        let descriptor = RequestDescriptor::new(url(), ServiceMethod::Post).with_body(None);
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn test_method_wire_names() {
        assert_eq!(ServiceMethod::Get.to_string(), "GET");
        assert_eq!(Method::from(ServiceMethod::Post), Method::POST);
    }
}
