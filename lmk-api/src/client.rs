//! HTTP client for the LMK API.
//!
//! Every operation is one request against `https://api.lmk.chat{path}`
//! carrying the fixed Android-app header set:
//!
//! | Header               | Value                              |
//! |----------------------|------------------------------------|
//! | `user-agent`         | `okhttp/4.8.0`                     |
//! | `x-deviceid`         | session device id                  |
//! | `x-lmk-app-id`       | `888888`                           |
//! | `x-lmk-app-locale`   | session locale                     |
//! | `x-lmk-app-version`  | `android2.53`                      |
//! | `x-lmk-carrier-name` | `Mobile+TeleSystems`               |
//! | `authorization`      | `Bearer <token>` once logged in    |
//!
//! # Response format
//!
//! Most endpoints answer with a JSON object which is returned as-is, even
//! for non-2xx statuses (the service sends JSON error bodies). A handful of
//! endpoints return nothing useful and only their HTTP status is reported.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::session::Session;
use crate::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

const USER_AGENT: &str = "okhttp/4.8.0";
const APP_ID: &str = "888888";
const APP_VERSION: &str = "android2.53";
const CARRIER_NAME: &str = "Mobile+TeleSystems";

/// Blocking client for the LMK audio-room API.
///
/// Holds a [`Transport`] and a [`Session`]. API methods are implemented in
/// separate modules (`auth`, `user`, `room`, `social`, `wallet`, `post`)
/// as `impl LmkClient` blocks.
pub struct LmkClient<T: Transport = ReqwestTransport> {
    transport: T,
    base_url: String,
    session: Session,
}

impl LmkClient {
    /// Create a client for the production host with the given locale.
    pub fn new(locale: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default().with_locale(locale))
    }

    /// Create a client backed by reqwest from an explicit [`ClientConfig`].
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> LmkClient<T> {
    /// Create a client over any [`Transport`]. `config.timeout` is ignored;
    /// timeouts belong to the transport.
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            session: Session::new(config.locale),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Headers sent with every request in the current session state.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("user-agent", USER_AGENT.to_owned()),
            ("x-deviceid", self.session.device_id().to_owned()),
            ("x-lmk-app-id", APP_ID.to_owned()),
            ("x-lmk-app-locale", self.session.locale().to_owned()),
            ("x-lmk-app-version", APP_VERSION.to_owned()),
            ("x-lmk-carrier-name", CARRIER_NAME.to_owned()),
        ];
        if let Some(bearer) = self.session.bearer() {
            headers.push(("authorization", bearer));
        }
        headers
    }

    /// Assemble a request for `path` with an encoded query string.
    pub(crate) fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> ApiRequest {
        let mut url = format!("{}{path}", self.base_url);
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        ApiRequest {
            method,
            url,
            headers: self.headers(),
            body,
        }
    }

    /// Send an assembled request through the transport.
    pub(crate) fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let path = request
            .url
            .strip_prefix(self.base_url.as_str())
            .unwrap_or(&request.url);
        let path = path.split('?').next().unwrap_or(path);
        debug!(
            method = %request.method,
            path,
            authenticated = self.session.is_authenticated(),
            "sending request"
        );

        let resp = self.transport.send(request)?;
        debug!(status = resp.status, bytes = resp.body.len(), "received response");
        Ok(resp)
    }

    /// One request whose body is decoded as JSON.
    pub(crate) fn request_json(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value> {
        let request = self.build_request(method, path, query, body);
        self.dispatch(&request)?.json()
    }

    /// One request whose HTTP status code is the result.
    pub(crate) fn request_status(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<u16> {
        let request = self.build_request(method, path, &[], body);
        Ok(self.dispatch(&request)?.status)
    }

    pub(crate) fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        self.request_json(Method::GET, path, query, None)
    }

    /// Session user id for `/users/{me}/...` paths. Empty when logged out;
    /// the service rejects such requests itself.
    pub(crate) fn own_user_id(&self) -> &str {
        self.session.user_id().unwrap_or_default()
    }
}

/// Query-string spelling of booleans expected by the service.
pub(crate) fn flag(value: bool) -> String {
    let spelled = if value { "True" } else { "False" };
    spelled.to_owned()
}
