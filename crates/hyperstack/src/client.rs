//! HTTP adapter for the Hyperstack API.
//!
//! Sends exactly one request per call. Authentication, JSON encoding and
//! error translation all happen here so callers only deal in
//! [`Request`] and [`serde_json::Value`].
//!
//! # Example
//!
//! ```rust,no_run
//! use hyperstack::{ApiKey, ClientConfig, HyperstackClient, Request};
//!
//! # async fn example() -> hyperstack::Result<()> {
//! let client = HyperstackClient::new(ClientConfig::default())?;
//! let key = ApiKey::new("my-key").expect("non-empty key");
//! let vms = client
//!     .send(&Request::get("/core/virtual-machines").with_query("environment", "default"), &key)
//!     .await?;
//! println!("{vms}");
//! # Ok(())
//! # }
//! ```

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{StatusCode, Url};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::credentials::ApiKey;
use crate::error::{Error, Result};
use crate::request::Request;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api_key";

/// Body fields checked, in order, for an error message.
const ERROR_MESSAGE_FIELDS: [&str; 3] = ["message", "error", "detail"];

/// Hyperstack API client.
#[derive(Debug, Clone)]
pub struct HyperstackClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HyperstackClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the base URL is not an absolute
    /// hierarchical URL, or [`Error::Transport`] if the HTTP stack cannot be
    /// initialised.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::Configuration(format!("invalid base URL '{}': {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "invalid base URL '{}': cannot carry a path",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(Error::Transport)?;

        Ok(Self { http, base_url })
    }

    /// Full URL for `request`: the base URL followed by its segments, each
    /// percent-encoded as one path segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the base URL cannot carry a path.
    pub fn url_for(&self, request: &Request) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::Configuration(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(request.segments());
        Ok(url)
    }

    /// Sends `request` authenticated with `key` and returns the JSON body.
    ///
    /// An empty success body is returned as an empty object.
    ///
    /// # Errors
    ///
    /// - [`Error::Api`] on a non-2xx status
    /// - [`Error::Transport`] if no response was received
    /// - [`Error::Decode`] if a success body is not JSON
    /// - [`Error::Configuration`] if the key cannot be sent as a header
    pub async fn send(&self, request: &Request, key: &ApiKey) -> Result<Value> {
        let url = self.url_for(request)?;
        let mut api_key = HeaderValue::from_str(key.expose()).map_err(|_| {
            Error::Configuration("API key contains characters not allowed in a header".into())
        })?;
        api_key.set_sensitive(true);

        debug!(method = %request.method(), url = %url, "sending request");

        let mut builder = self
            .http
            .request(request.method().clone(), url.clone())
            .header(API_KEY_HEADER, api_key)
            .header(ACCEPT, "application/json");
        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        if let Some(body) = request.body() {
            // `json` also sets `Content-Type: application/json`.
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "request failed");
            Error::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(Error::Transport)?;
        debug!(status = status.as_u16(), bytes = text.len(), "received response");

        if !status.is_success() {
            let message = error_message(status, &text);
            warn!(status = status.as_u16(), message = %message, "API returned an error");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        parse_body(&text)
    }
}

/// Picks the most useful message out of an error response body.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        let message = ERROR_MESSAGE_FIELDS
            .iter()
            .find_map(|name| fields.get(*name).and_then(Value::as_str));
        if let Some(message) = message {
            return message.to_string();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        body.to_string()
    }
}

/// Parses a success body; an empty body becomes `{}`.
fn parse_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))
}
