//! reqwest-backed gateway against the demo user service.
//!
//! Endpoint shapes are fixed by the third-party service:
//! `GET /users?page=&per_page=` returns `{ data, total_pages }`,
//! `POST /users/register` answers 201, `PUT /users/{id}` answers 200,
//! `DELETE /users/{id}` answers 204. Any other status is a rejection.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use secrecy::{ExposeSecret, SecretBox};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Result, WardbookError};
use crate::types::{CandidatePage, UserRecord};

use super::UserGateway;

/// Error payload the demo service attaches to rejections
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    error: Option<String>,
}

/// Extract a human-readable rejection reason from a non-success response.
///
/// Prefers the server-supplied `error` field when the body carries one,
/// otherwise falls back to the status line.
fn rejection_reason(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<RemoteErrorBody>(body) {
        Ok(RemoteErrorBody { error: Some(msg) }) if !msg.is_empty() => msg,
        _ => format!("unexpected status {status}"),
    }
}

/// Mutations report every failure as a rejection, network errors included;
/// only the listing distinguishes transport problems.
fn rejected(err: reqwest::Error) -> WardbookError {
    WardbookError::RemoteRejected(err.to_string())
}

/// Gateway to the remote user service
pub struct HttpUserGateway {
    client: Client,
    base_url: String,
    api_key: Option<SecretBox<String>>,
}

impl fmt::Debug for HttpUserGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpUserGateway")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpUserGateway {
    /// Create a gateway from configuration
    ///
    /// Configures the HTTP client with a 10s connect timeout and the
    /// configured total timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.remote_timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(WardbookError::Transport)?;

        Ok(Self {
            client,
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            api_key: config
                .api_key()
                .map(|key| SecretBox::new(Box::new(key))),
        })
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key.expose_secret().as_str());
        }
        builder.header(header::ACCEPT, "application/json")
    }
}

impl UserGateway for HttpUserGateway {
    async fn list(&self, page: u32, per_page: u32) -> Result<CandidatePage> {
        tracing::debug!(page, per_page, "fetching remote user page");

        let response = self
            .request(reqwest::Method::GET, format!("{}/users", self.base_url))
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .map_err(WardbookError::Transport)?
            .error_for_status()
            .map_err(WardbookError::Transport)?;

        response
            .json::<CandidatePage>()
            .await
            .map_err(|e| WardbookError::Decode(e.to_string()))
    }

    async fn create(&self, record: &UserRecord) -> Result<()> {
        let response = self
            .request(
                reqwest::Method::POST,
                format!("{}/users/register", self.base_url),
            )
            .json(record)
            .send()
            .await
            .map_err(rejected)?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(WardbookError::RemoteRejected(rejection_reason(
            status, &body,
        )))
    }

    async fn update(&self, id: i64, record: &UserRecord) -> Result<()> {
        let response = self
            .request(
                reqwest::Method::PUT,
                format!("{}/users/{id}", self.base_url),
            )
            .json(record)
            .send()
            .await
            .map_err(rejected)?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(WardbookError::RemoteRejected(rejection_reason(
            status, &body,
        )))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let response = self
            .request(
                reqwest::Method::DELETE,
                format!("{}/users/{id}", self.base_url),
            )
            .send()
            .await
            .map_err(rejected)?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(WardbookError::RemoteRejected(rejection_reason(
            status, &body,
        )))
    }
}
