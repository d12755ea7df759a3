//! Shared HTTP plumbing for the dashboard API clients.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::{ClientError, ClientResult};

/// Thin wrapper around a reqwest client bound to one API origin.
///
/// All dashboard endpoints live under a single base URL; tests point this
/// at a local mock server. Failures map to [`ClientError`]: send errors
/// become `Transport`, non-2xx statuses go through
/// [`ClientError::from_status`] (which extracts the body's `error` field),
/// and undecodable bodies become `MalformedResponse`. No retries, no
/// backoff: failures surface to the caller unchanged.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given origin with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to build HTTP client: {e}")))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// The origin this client resolves paths against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with the given query pairs and decode a JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("GET {path} failed: {e}")))?;
        Self::decode(response, path).await
    }

    /// POST a JSON body to `path`, discarding the response body.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("POST {path} failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, &body));
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        path: &str,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_status(status, &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::MalformedResponse(format!("{path}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let client = ApiClient::new("http://localhost:8181//", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8181");
    }
}
