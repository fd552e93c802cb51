//! [`HttpSend`] implementation backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};
use tosspayments_core::constants::DEFAULT_CONNECT_TIMEOUT;
use tosspayments_core::{Error, HttpSend, Result};

/// ReqwestHttpSend sends requests with a [`reqwest::Client`].
///
/// Every response is returned as is, whatever its status.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new ReqwestHttpSend whose client gives up connecting after `timeout`.
    ///
    /// No read or request timeout is applied.
    pub fn with_connect_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| Error::execution_failure("failed to build http client").with_source(e))?;

        Ok(Self { client })
    }

    /// Create a new ReqwestHttpSend using the default connect timeout of 10 seconds.
    pub fn with_default_connect_timeout() -> Result<Self> {
        Self::with_connect_timeout(DEFAULT_CONNECT_TIMEOUT)
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::execution_failure("failed to convert request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::execution_failure("failed to send request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::execution_failure("failed to read response body").with_source(e))?;
        debug!("received {} bytes with status {}", bs.len(), parts.status);

        Ok(http::Response::from_parts(parts, bs))
    }
}
