//! JSON Loader
//!
//! Never fails towards the caller: any transport, status or parse failure is
//! logged and replaced by an empty list.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::http::HttpFetch;

/// Fetch `url` and return its JSON body, or `[]` on any failure
pub async fn load_json<F>(fetcher: &F, url: &str) -> Value
where
    F: HttpFetch + ?Sized,
{
    match fetcher.get_json(url).await {
        Ok(value) => {
            tracing::debug!(url, "Loaded JSON");
            value
        }
        Err(e) => {
            tracing::error!(url, error = %e, "Error loading JSON");
            Value::Array(Vec::new())
        }
    }
}

/// Fetch `url` and decode it as a list of `T`, or an empty list on any failure
pub async fn load_json_list<T, F>(fetcher: &F, url: &str) -> Vec<T>
where
    T: DeserializeOwned,
    F: HttpFetch + ?Sized,
{
    let value = load_json(fetcher, url).await;
    match serde_json::from_value::<Vec<T>>(value) {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(url, error = %e, "Unexpected JSON shape");
            Vec::new()
        }
    }
}
