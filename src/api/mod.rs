//! Catalog API
//!
//! HTTP access to the remote catalog, organized the same way for the browser
//! and for tests: a `CatalogTransport` does single GETs, `CatalogFetcher`
//! drives the list + batched detail requests on top of it.

mod catalog;
mod http;
#[cfg(test)]
pub(crate) mod fake;

use serde::de::DeserializeOwned;
use std::future::Future;
use thiserror::Error;

pub use catalog::*;
pub use http::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Status { status: u16, url: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// One JSON GET; non-success statuses come back as `FetchError::Status`
pub trait CatalogTransport {
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> impl Future<Output = Result<T, FetchError>>;
}
