//! Current user, other users' profiles, and account extras.
//!
//! | Method                     | Request                                    |
//! |----------------------------|--------------------------------------------|
//! | `get_current_user`         | `GET /user?withExtra=True`                 |
//! | `get_wallet`               | `GET /user/wallet`                         |
//! | `get_user_match`           | `GET /users/{id}/match`                    |
//! | `get_badge_counts`         | `GET /user/badge-counts`                   |
//! | `get_restriction`          | `GET /user/restriction`                    |
//! | `get_interests`            | `GET /interests/v2`                        |
//! | `get_user_info`            | `GET /users/{id}?trackView=False`          |
//! | `get_profile_visitors`     | `GET /user/visitors`                       |
//! | `get_journey`              | `GET /user/journey`                        |
//! | `claim_journey`            | `POST /user/journey:markCompleted`         |
//! | `redeem_code`              | `POST /influencer/invitation-rewards`      |
//! | `edit_profile`             | `PUT /user`                                |

use crate::client::{LmkClient, flag};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::ProfileEdit;
use reqwest::Method;
use serde_json::{Value, json};

impl<T: Transport> LmkClient<T> {
    /// Profile of the logged-in user. `with_extra` defaults to `true`.
    pub fn get_current_user(&self, with_extra: Option<bool>) -> Result<Value> {
        self.get_json("/user", &[("withExtra", flag(with_extra.unwrap_or(true)))])
    }

    pub fn get_wallet(&self) -> Result<Value> {
        self.get_json("/user/wallet", &[])
    }

    /// Match data between the logged-in user and `user_id`.
    pub fn get_user_match(&self, user_id: &str) -> Result<Value> {
        self.get_json(&format!("/users/{user_id}/match"), &[])
    }

    pub fn get_badge_counts(&self) -> Result<Value> {
        self.get_json("/user/badge-counts", &[])
    }

    pub fn get_restriction(&self) -> Result<Value> {
        self.get_json("/user/restriction", &[])
    }

    /// Catalog of interest tags.
    pub fn get_interests(&self) -> Result<Value> {
        self.get_json("/interests/v2", &[])
    }

    /// Another user's public profile.
    ///
    /// With `track_view` (default `false`) the visit shows up in that user's
    /// visitor list.
    pub fn get_user_info(&self, user_id: &str, track_view: Option<bool>) -> Result<Value> {
        self.get_json(
            &format!("/users/{user_id}"),
            &[("trackView", flag(track_view.unwrap_or(false)))],
        )
    }

    pub fn get_profile_visitors(&self) -> Result<Value> {
        self.get_json("/user/visitors", &[])
    }

    pub fn get_journey(&self) -> Result<Value> {
        self.get_json("/user/journey", &[])
    }

    /// Mark journey step `journey` (default `0`) as completed.
    pub fn claim_journey(&self, journey: Option<u32>) -> Result<Value> {
        let data = json!({ "journey": journey.unwrap_or(0) });
        self.request_json(Method::POST, "/user/journey:markCompleted", &[], Some(data))
    }

    /// Redeem an influencer invitation code.
    pub fn redeem_code(&self, code: &str) -> Result<Value> {
        let data = json!({ "invitationCode": code });
        self.request_json(Method::POST, "/influencer/invitation-rewards", &[], Some(data))
    }

    /// Update profile fields. Only the fields set in `edit` are sent.
    pub fn edit_profile(&self, edit: &ProfileEdit) -> Result<Value> {
        let data = serde_json::to_value(edit)?;
        self.request_json(Method::PUT, "/user", &[], Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{MockTransport, client};

    fn ok() -> MockTransport {
        MockTransport::default().reply_json(200, &json!({ "ok": true }))
    }

    #[test]
    fn current_user_defaults_to_extra() {
        let c = client(ok().reply_json(200, &json!({})));
        c.get_current_user(None).unwrap();
        assert_eq!(c.transport().last().url, "https://lmk.test/user?withExtra=True");
        c.get_current_user(Some(false)).unwrap();
        assert_eq!(c.transport().last().url, "https://lmk.test/user?withExtra=False");
    }

    #[test]
    fn plain_getters_hit_their_paths() {
        let c = client(
            ok().reply_json(200, &json!({}))
                .reply_json(200, &json!({}))
                .reply_json(200, &json!({}))
                .reply_json(200, &json!({}))
                .reply_json(200, &json!({})),
        );
        c.get_wallet().unwrap();
        c.get_badge_counts().unwrap();
        c.get_restriction().unwrap();
        c.get_interests().unwrap();
        c.get_profile_visitors().unwrap();
        c.get_journey().unwrap();

        let urls: Vec<String> = c.transport().requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            [
                "https://lmk.test/user/wallet",
                "https://lmk.test/user/badge-counts",
                "https://lmk.test/user/restriction",
                "https://lmk.test/interests/v2",
                "https://lmk.test/user/visitors",
                "https://lmk.test/user/journey",
            ]
        );
    }

    #[test]
    fn other_user_paths() {
        let c = client(ok().reply_json(200, &json!({})));
        c.get_user_info("abc", None).unwrap();
        assert_eq!(c.transport().last().url, "https://lmk.test/users/abc?trackView=False");
        c.get_user_match("abc").unwrap();
        assert_eq!(c.transport().last().url, "https://lmk.test/users/abc/match");
    }

    #[test]
    fn claim_journey_defaults_to_zero() {
        let c = client(ok());
        c.claim_journey(None).unwrap();
        let req = c.transport().last();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.url, "https://lmk.test/user/journey:markCompleted");
        assert_eq!(req.body, Some(json!({ "journey": 0 })));
        assert!(req.header("current_datetime").is_none());
    }

    #[test]
    fn redeem_code_body() {
        let c = client(ok());
        c.redeem_code("FRIEND42").unwrap();
        let req = c.transport().last();
        assert_eq!(req.url, "https://lmk.test/influencer/invitation-rewards");
        assert_eq!(req.body, Some(json!({ "invitationCode": "FRIEND42" })));
    }

    #[test]
    fn edit_profile_sends_only_set_fields() {
        let c = client(ok());
        let edit = ProfileEdit {
            first_name: Some("Ann".into()),
            ..ProfileEdit::default()
        };
        let resp = c.edit_profile(&edit).unwrap();
        assert_eq!(resp, json!({ "ok": true }));

        let req = c.transport().last();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.url, "https://lmk.test/user");
        let body = req.body.unwrap();
        assert_eq!(body.as_object().unwrap().len(), 1);
        assert_eq!(body["firstName"], "Ann");
    }
}
