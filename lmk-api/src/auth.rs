//! Phone-number login and access-token restore.
//!
//! # Verification-code flow
//!
//! 1. `GET /verification-tokens?countryCode=7&phoneNumber=9001234567` sends
//!    the SMS code. Only the HTTP status is reported.
//! 2. `POST /authentication?provider=phone` exchanges the code for a session:
//!
//! ```json
//! {
//!   "acquisitionChannel": "Null",
//!   "eventTime": "2024-03-05T07:08:09.042+08:00",
//!   "phone": { "countryCode": 7, "number": 9001234567, "verificationCode": 123456 },
//!   "provider": "phone"
//! }
//! ```
//!
//! This is the only request carrying the `current_datetime` signing header.
//! A successful answer looks like
//! `{ "id": "...", "session": { "accessToken": "..." }, ... }`; a failed one
//! has no `id`.
//!
//! # Stored-token flow
//!
//! A token from an earlier login is reused together with the device id it was
//! issued to, and checked by fetching the current user.

use crate::client::LmkClient;
use crate::error::Result;
use crate::time::{event_time_now, signing_time_now};
use crate::transport::Transport;
use reqwest::Method;
use serde_json::{Value, json};
use tracing::{info, warn};

/// Header carrying the signing timestamp.
pub const SIGNING_HEADER: &str = "current_datetime";

impl<T: Transport> LmkClient<T> {
    /// Ask the service to text a verification code to the phone number.
    ///
    /// Returns the HTTP status; any 2xx means the code was sent.
    pub fn request_verification_code(&self, country_code: u32, phone_number: u64) -> Result<u16> {
        let request = self.build_request(
            Method::GET,
            "/verification-tokens",
            &[
                ("countryCode", country_code.to_string()),
                ("phoneNumber", phone_number.to_string()),
            ],
            None,
        );
        Ok(self.dispatch(&request)?.status)
    }

    /// Log in with a texted verification code.
    ///
    /// On success the user id and access token are stored in the session and
    /// every later request is sent with `authorization: Bearer <token>`. On
    /// failure the session is left as it was. Either way the response body
    /// is returned unchanged; check it for `id` to tell the two apart.
    pub fn login(
        &mut self,
        country_code: u32,
        phone_number: u64,
        verification_code: u32,
    ) -> Result<Value> {
        let data = json!({
            "acquisitionChannel": "Null",
            "eventTime": event_time_now(),
            "phone": {
                "countryCode": country_code,
                "number": phone_number,
                "verificationCode": verification_code,
            },
            "provider": "phone",
        });
        let mut request = self.build_request(
            Method::POST,
            "/authentication",
            &[("provider", "phone".into())],
            Some(data),
        );
        request.headers.push((SIGNING_HEADER, signing_time_now()));

        let resp = self.dispatch(&request)?.json()?;
        match credentials(&resp) {
            Some((user_id, token)) => {
                info!(user_id = %user_id, "logged in");
                self.session_mut().authenticate(user_id, token);
            }
            None => warn!("login rejected: response has no user id or access token"),
        }
        Ok(resp)
    }

    /// Resume a session from a stored access token.
    ///
    /// Replaces the device id and token, then calls
    /// [`get_current_user`](Self::get_current_user). If that returns an
    /// object with `id`, it becomes the session user id. An invalid token
    /// yields the service's error body, returned as-is with the user id left
    /// unset.
    pub fn login_with_access_token(&mut self, access_token: &str, device_id: &str) -> Result<Value> {
        self.session_mut().restore(access_token, device_id);

        let user = self.get_current_user(None)?;
        match user.get("id").and_then(id_string) {
            Some(user_id) => {
                info!(user_id = %user_id, "session restored from access token");
                self.session_mut().set_user_id(user_id);
            }
            None => warn!("access token rejected: current user has no id"),
        }
        Ok(user)
    }
}

/// `(id, session.accessToken)` from a login response, only if both exist.
fn credentials(resp: &Value) -> Option<(String, String)> {
    let user_id = resp.get("id").and_then(id_string)?;
    let token = resp
        .get("session")
        .and_then(|s| s.get("accessToken"))
        .and_then(Value::as_str)?;
    Some((user_id, token.to_owned()))
}

// Ids are strings today; accept numbers too rather than dropping them.
fn id_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
