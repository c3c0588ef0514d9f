//! Client configuration.

use serde::Deserialize;
use std::time::Duration;

/// Production API host.
pub const BASE_URL: &str = "https://api.lmk.chat";
/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en_US";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for building an [`LmkClient`](crate::LmkClient).
///
/// Deserializable so callers can keep it in their own config files:
///
/// ```json
/// { "base_url": "https://api.lmk.chat", "locale": "ru_RU", "timeout_secs": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing slash.
    #[serde(deserialize_with = "trimmed_url")]
    pub base_url: String,
    /// Sent as `x-lmk-app-locale` on every request.
    pub locale: String,
    /// Transport timeout for the default reqwest transport.
    #[serde(rename = "timeout_secs", deserialize_with = "secs")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn trimmed_url<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    String::deserialize(deserializer).map(|url| url.trim_end_matches('/').to_owned())
}

fn secs<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.lmk.chat");
        assert_eq!(config.locale, "en_US");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn deserialized_base_url_is_trimmed() {
        let config: ClientConfig = serde_json::from_str(r#"{"base_url":"http://h/"}"#).unwrap();
        assert_eq!(config.base_url, "http://h");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"locale":"ru_RU","timeout_secs":5}"#).unwrap();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.locale, "ru_RU");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
