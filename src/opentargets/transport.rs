use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use super::error::FetchError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport: Send + 'static {
    fn post_json(&self, endpoint: &str, body: &Value) -> Result<HttpReply, FetchError>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, endpoint: &str, body: &Value) -> Result<HttpReply, FetchError> {
        let transport_error = |error: reqwest::Error| FetchError::Transport {
            endpoint: endpoint.to_owned(),
            message: error.to_string(),
        };

        let response = self
            .client
            .post(endpoint)
            .json(body)
            .send()
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        debug!(status, "association query answered");
        let body = response.text().map_err(transport_error)?;

        Ok(HttpReply { status, body })
    }
}
