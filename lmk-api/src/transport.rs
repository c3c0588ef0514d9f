//! HTTP transport seam.
//!
//! [`LmkClient`](crate::LmkClient) never talks to reqwest directly. It
//! assembles an [`ApiRequest`] (method, full URL, headers, optional JSON
//! body) and hands it to a [`Transport`], which returns the raw status and
//! body bytes. [`ReqwestTransport`] is the production implementation; tests
//! plug in a recording mock.

use crate::error::Result;
use reqwest::Method;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// A fully assembled request, ready to go on the wire.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL including the encoded query string.
    pub url: String,
    /// Header name/value pairs in send order. Names are lowercase.
    pub headers: Vec<(&'static str, String)>,
    /// JSON body for POST/PUT calls that carry one.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Look up a header value by (lowercase) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response as returned by a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Decode the body as JSON, regardless of the status code.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Sends one [`ApiRequest`] and returns its response.
///
/// Implementations must not retry and must not inspect the status code;
/// a non-2xx answer is still `Ok`.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// Blocking [`reqwest`] transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut req = self.http.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            req = req.header(*name, value);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        Ok(ApiResponse { status, body })
    }
}
