//! # AppServices - typed JSON requests for app screens
//!
//! A thin layer over `reqwest` and `serde_json`: build a request from a URL,
//! a method, an optional body and headers, run it once, turn a non-2xx status
//! into a typed error, and decode the body into whatever type the caller asks for.
//!
//! ## Quick Start
//!
//! ```no_run
//! use appservices::{AppService, DisplayMode, ServiceMethod};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Product {
//!     id: Option<u64>,
//!     title: Option<String>,
//!     price: Option<f64>,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), appservices::Error> {
//!     let service = AppService::<Product>::new()?;
//!
//!     match service.call("https://dummyjson.com/products/1", ServiceMethod::Get).await {
//!         Ok(product) => println!("{product:?}"),
//!         Err(e) => println!("{}", e.showable_description(DisplayMode::from_env())),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`RequestExecutor`] performs one round trip over an injected [`Transport`]
//! - [`AppService`] holds parameters and headers and decodes into one type
//! - [`Error`] is the closed set of failures; [`DisplayMode`] decides how much
//!   of an error an end user gets to see
//!
//! ## Headers
//!
//! Every request carries `Content-Type: application/json` and
//! `Accept: application/json`. Caller headers are applied first, so a caller
//! value for either of those two names is replaced by the default.
//!
//! ## Testing
//!
//! The transport is a trait object handed to the executor, so tests can swap
//! the network out entirely:
//!
//! ```
//! use appservices::{RequestExecutor, ServiceMethod, Transport, TransportResponse};
//! use appservices::metadata::RequestDescriptor;
//!
//! struct Canned;
//!
//! #[async_trait::async_trait]
//! impl Transport for Canned {
//!     async fn send(&self, _request: RequestDescriptor) -> appservices::Result<TransportResponse> {
//!         Ok(TransportResponse::new(404, ""))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let executor = RequestExecutor::with_transport(Canned);
//! let url = url::Url::parse("https://example.test/missing").unwrap();
//! let result = executor
//!     .request::<serde_json::Value>(url, ServiceMethod::Get, None, None)
//!     .await;
//! assert_eq!(result.unwrap_err().status(), Some(404));
//! # }
//! ```

pub mod codec;
mod display;
mod error;
mod executor;
pub mod metadata;
mod response;
mod service;
pub mod transport;

pub use codec::{Codec, JsonCodec};
pub use display::{DisplayMode, ShowableError, DEVELOPER_MODE_ENV, SOMETHING_WENT_WRONG};
pub use error::{Error, Result};
pub use executor::{ExecutorBuilder, RequestExecutor};
pub use metadata::{Headers, Parameters, ServiceMethod};
pub use response::Envelope;
pub use service::AppService;
pub use transport::{ReqwestTransport, Transport, TransportResponse};
