/*
[INPUT]:  Fully-formed URLs and form payloads
[OUTPUT]: Parsed JSON response values
[POS]:    HTTP layer - transport seam (async and blocking implementations)
[UPDATE]: When changing how requests are executed or errors propagate
*/

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::http::client::ClientConfig;
use crate::http::endpoint::Form;
use crate::http::error::Result;

/// Async transport capability: a GET/POST pair returning parsed JSON.
///
/// Transport errors (connection failure, timeout, non-JSON body) are
/// propagated unmodified; no retry happens at this layer. Responses are
/// not inspected for success or failure content - a structurally valid
/// JSON error body passes through like any other value.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<Value>;

    async fn post_form(&self, url: Url, form: &Form) -> Result<Value>;
}

/// Blocking twin of [`Transport`]; identical request content, the call
/// occupies the calling thread until the round trip completes.
pub trait BlockingTransport {
    fn get(&self, url: Url) -> Result<Value>;

    fn post_form(&self, url: Url, form: &Form) -> Result<Value>;
}

/// Async transport over a shared reqwest client.
///
/// The pooled connection is returned on every exit path - success,
/// non-2xx response, or failure - once the body future resolves or the
/// response is dropped.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<Value> {
        debug!(method = "GET", url = %url, "dispatching request");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let value = response.json::<Value>().await?;
        debug!(url = %url, status = status.as_u16(), "response received");
        Ok(value)
    }

    async fn post_form(&self, url: Url, form: &Form) -> Result<Value> {
        debug!(method = "POST", url = %url, fields = form.len(), "dispatching request");
        let response = self.client.post(url.clone()).form(form).send().await?;
        let status = response.status();
        let value = response.json::<Value>().await?;
        debug!(url = %url, status = status.as_u16(), "response received");
        Ok(value)
    }
}

/// Blocking transport over `reqwest::blocking`.
///
/// Must not be used from within an async runtime; construct the async
/// client instead.
#[derive(Debug, Clone)]
pub struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
}

impl BlockingHttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl BlockingTransport for BlockingHttpTransport {
    fn get(&self, url: Url) -> Result<Value> {
        debug!(method = "GET", url = %url, "dispatching request");
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        let value = response.json::<Value>()?;
        debug!(url = %url, status = status.as_u16(), "response received");
        Ok(value)
    }

    fn post_form(&self, url: Url, form: &Form) -> Result<Value> {
        debug!(method = "POST", url = %url, fields = form.len(), "dispatching request");
        let response = self.client.post(url.clone()).form(form).send()?;
        let status = response.status();
        let value = response.json::<Value>()?;
        debug!(url = %url, status = status.as_u16(), "response received");
        Ok(value)
    }
}
