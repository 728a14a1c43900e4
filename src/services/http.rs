//! HTTP Fetch Capability
//!
//! One-shot unauthenticated GET returning a parsed JSON body. The loader only
//! depends on the [`HttpFetch`] trait so it can run against any transport.

use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::{Error, Result};

/// Fetch a URL and parse its body as JSON
pub trait HttpFetch: Send + Sync {
    /// Non-success statuses are errors, as are bodies that are not JSON
    fn get_json<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Value>>;
}

/// [`HttpFetch`] backed by a shared `reqwest` client
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (connection pool, proxy settings)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpFetch for ReqwestFetcher {
    fn get_json<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Value>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::HttpStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            let body = response.bytes().await?;
            let value: Value = serde_json::from_slice(&body)?;
            Ok(value)
        })
    }
}
