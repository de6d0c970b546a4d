//! Browser Transport
//!
//! `fetch()` through gloo-net. No timeout of our own; the browser's applies.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::{CatalogTransport, FetchError};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl CatalogTransport for GlooTransport {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
