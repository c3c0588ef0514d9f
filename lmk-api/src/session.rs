//! Per-client identity and authentication state.
//!
//! A [`Session`] lives inside one [`LmkClient`](crate::LmkClient) and is
//! never persisted. It starts unauthenticated with a freshly generated
//! device id; `login` and `login_with_access_token` are the only
//! operations that change it.

use crate::error::{LmkError, Result};
use rand::Rng;
use rand::seq::index;

const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated device ids.
pub const DEVICE_ID_LEN: usize = 16;

/// Device, user and token state of one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    device_id: String,
    user_id: Option<String>,
    access_token: Option<String>,
    locale: String,
}

impl Session {
    /// Unauthenticated session with a random device id.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            device_id: generate_device_id(),
            user_id: None,
            access_token: None,
            locale: locale.into(),
        }
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// `true` once an access token is held. The token is not validated.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Value for the `authorization` header, if a token is held.
    pub fn bearer(&self) -> Option<String> {
        self.access_token.as_deref().map(|t| format!("Bearer {t}"))
    }

    /// Store the identity returned by a successful phone login.
    pub(crate) fn authenticate(&mut self, user_id: String, access_token: String) {
        self.user_id = Some(user_id);
        self.access_token = Some(access_token);
    }

    /// Adopt a previously issued token and the device id it was bound to.
    ///
    /// Any user id from an earlier login is dropped; it is set again only
    /// once the new token is confirmed.
    pub(crate) fn restore(&mut self, access_token: &str, device_id: &str) {
        self.user_id = None;
        self.access_token = Some(access_token.to_owned());
        self.device_id = device_id.to_owned();
    }

    pub(crate) fn set_user_id(&mut self, user_id: String) {
        self.user_id = Some(user_id);
    }
}

/// Generate a 16-character device id.
///
/// Characters come from `a-z0-9` and are drawn without replacement, so no
/// character appears twice.
pub fn generate_device_id() -> String {
    sample_alphabet(&mut rand::rng(), DEVICE_ID_LEN)
}

/// Like [`generate_device_id`] with an explicit length.
///
/// Fails with [`LmkError::DeviceIdLength`] when `len` exceeds the 36
/// characters available.
pub fn generate_device_id_of_len(len: usize) -> Result<String> {
    if len > ALPHABET.len() {
        return Err(LmkError::DeviceIdLength {
            requested: len,
            max: ALPHABET.len(),
        });
    }
    Ok(sample_alphabet(&mut rand::rng(), len))
}

// `index::sample` returns distinct indices in random order.
fn sample_alphabet<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    index::sample(rng, ALPHABET.len(), len)
        .iter()
        .map(|i| char::from(ALPHABET[i]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn device_ids_are_sixteen_distinct_alphanumerics() {
        for _ in 0..500 {
            let id = generate_device_id();
            assert_eq!(id.len(), DEVICE_ID_LEN);
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "unexpected character in {id}"
            );
            let unique: HashSet<char> = id.chars().collect();
            assert_eq!(unique.len(), DEVICE_ID_LEN, "repeated character in {id}");
        }
    }

    #[test]
    fn device_ids_differ_between_calls() {
        let ids: HashSet<String> = (0..50).map(|_| generate_device_id()).collect();
        assert!(ids.len() > 1);
    }

    #[test]
    fn full_alphabet_is_a_permutation() {
        let id = generate_device_id_of_len(36).unwrap();
        let mut chars: Vec<u8> = id.into_bytes();
        chars.sort_unstable();
        let mut expected = ALPHABET.to_vec();
        expected.sort_unstable();
        assert_eq!(chars, expected);
    }

    #[test]
    fn longer_than_alphabet_is_rejected() {
        let err = generate_device_id_of_len(37).unwrap_err();
        assert!(matches!(
            err,
            LmkError::DeviceIdLength {
                requested: 37,
                max: 36
            }
        ));
    }

    #[test]
    fn new_session_is_unauthenticated() {
        let session = Session::new("en_US");
        assert_eq!(session.locale(), "en_US");
        assert_eq!(session.device_id().len(), DEVICE_ID_LEN);
        assert!(session.user_id().is_none());
        assert!(session.access_token().is_none());
        assert!(session.bearer().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn authenticate_sets_both_fields() {
        let mut session = Session::new("en_US");
        session.authenticate("u1".into(), "tok".into());
        assert_eq!(session.user_id(), Some("u1"));
        assert_eq!(session.access_token(), Some("tok"));
        assert_eq!(session.bearer().as_deref(), Some("Bearer tok"));
    }

    #[test]
    fn restore_replaces_device_id_but_not_user() {
        let mut session = Session::new("en_US");
        session.restore("tok2", "dev2");
        assert_eq!(session.device_id(), "dev2");
        assert_eq!(session.access_token(), Some("tok2"));
        assert!(session.user_id().is_none());
    }

    #[test]
    fn restore_drops_previous_user() {
        let mut session = Session::new("en_US");
        session.authenticate("u1".into(), "tok".into());
        session.restore("tok2", "dev2");
        assert!(session.user_id().is_none());
        assert_eq!(session.bearer().as_deref(), Some("Bearer tok2"));
    }
}
