//! Reqwest-based HTTP transport for the seewo client.
//!
//! This crate provides `ReqwestHttpSend`, an HTTP dispatcher that implements
//! the `HttpSend` trait from `seewo_core` using a `reqwest::Client`.
//!
//! Connection pooling and timeouts belong to the `reqwest::Client` passed in;
//! this layer neither retries nor interprets responses. Network, DNS, TLS and
//! timeout failures surface as `ErrorKind::TransportFailed`.
//!
//! ## Example
//!
//! ```no_run
//! use seewo_core::Context;
//! use seewo_http_send_reqwest::ReqwestHttpSend;
//!
//! // Bring your own reqwest::Client to control pooling and timeouts.
//! let client = reqwest::Client::new();
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use seewo_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// Reqwest-based implementation of the `HttpSend` trait.
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport_failed("failed to send request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport_failed("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
