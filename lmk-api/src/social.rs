//! Social graph: followers, followings, follow and unfollow.
//!
//! Follow and unfollow act on the logged-in user's own `following` list
//! (`/users/{me}/following`) and report only the HTTP status.

use crate::client::LmkClient;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{DEFAULT_FOLLOW_ORIGIN, DEFAULT_LIMIT, DEFAULT_PAGE};
use reqwest::Method;
use serde_json::{Value, json};

impl<T: Transport> LmkClient<T> {
    /// Users that `user_id` follows. Default page `0`, limit `10`.
    pub fn get_user_followings(
        &self,
        user_id: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value> {
        self.get_json(&format!("/users/{user_id}/following"), &paging(page, limit))
    }

    /// Users following `user_id`. Default page `0`, limit `10`.
    pub fn get_user_followers(
        &self,
        user_id: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value> {
        self.get_json(&format!("/users/{user_id}/followers"), &paging(page, limit))
    }

    /// Follow `user_id`. Returns the HTTP status.
    ///
    /// `origin` names the UI surface the follow came from and defaults to
    /// `profile_followUser_onProfilePage`.
    pub fn follow_user(&self, user_id: &str, origin: Option<&str>) -> Result<u16> {
        let data = json!({
            "followeeId": user_id,
            "origin": origin.unwrap_or(DEFAULT_FOLLOW_ORIGIN),
        });
        self.request_status(
            Method::POST,
            &format!("/users/{}/following", self.own_user_id()),
            Some(data),
        )
    }

    /// Unfollow `user_id`. Returns the HTTP status.
    pub fn unfollow_user(&self, user_id: &str) -> Result<u16> {
        self.request_status(
            Method::DELETE,
            &format!("/users/{}/following/{user_id}", self.own_user_id()),
            None,
        )
    }
}

fn paging(page: Option<u32>, limit: Option<u32>) -> [(&'static str, String); 2] {
    [
        ("page", page.unwrap_or(DEFAULT_PAGE).to_string()),
        ("limit", limit.unwrap_or(DEFAULT_LIMIT).to_string()),
    ]
}
