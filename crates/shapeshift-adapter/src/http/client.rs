/*
[INPUT]:  HTTP configuration (base URL, timeouts) and an injected transport
[OUTPUT]: Configured async client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

use crate::http::endpoint::ApiRequest;
use crate::http::error::Result;
use crate::http::transport::{HttpTransport, Transport};

/// Base URL for the ShapeShift API
pub(crate) const BASE_URL: &str = "https://shapeshift.io";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Async client for the ShapeShift API.
///
/// Holds exactly one transport, fixed at construction; every call made
/// through this instance is non-blocking. The blocking twin is
/// [`crate::http::blocking::BlockingShapeshiftClient`].
#[derive(Debug)]
pub struct ShapeshiftClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: Url,
}

impl ShapeshiftClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        Self::with_transport(HttpTransport::new(&config)?, base_url)
    }
}

impl<T: Transport> ShapeshiftClient<T> {
    /// Create a client from an explicit transport implementation.
    pub fn with_transport(transport: T, base_url: &str) -> Result<Self> {
        Ok(Self {
            transport,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Base URL all request paths are joined onto
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute one endpoint request through the injected transport.
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<Value> {
        match request {
            ApiRequest::Get { path } => {
                let url = self.base_url.join(&path)?;
                self.transport.get(url).await
            }
            ApiRequest::PostForm { path, form } => {
                let url = self.base_url.join(&path)?;
                self.transport.post_form(url, &form).await
            }
        }
    }
}
