// client/src/lib.rs

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

mod api;

pub use api::AdminApi;
pub use reqwest::StatusCode;

/// Errors surfaced by the REST adapter.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{message}")]
    Status { status: StatusCode, message: String },
}

/// Pulls a human-readable message out of a failed response body.
///
/// The backing API answers failures with `{"message": "..."}`; anything else
/// falls back to the generic message the forms display.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Something went wrong".to_string())
}

/// Thin REST adapter over the booking platform's API.
///
/// Issues base-URL-relative GET/POST/PUT/DELETE calls with JSON bodies. No
/// timeouts, retries, or request de-duplication: a hung request leaves the
/// caller's state stale and that is the caller's problem.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        ApiClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: error_message(&body),
            });
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::read_json(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::read_json(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        debug!(path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::read_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let response = self.http.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: error_message(&body),
            });
        }
        Ok(())
    }
}
