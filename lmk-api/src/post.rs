//! Feed posts, comments, likes and notifications.
//!
//! Endpoints live under `/sydney`. Creating a post takes already-uploaded
//! media descriptors:
//!
//! ```json
//! { "description": "hello", "images": [ ... ], "videos": [ ... ] }
//! ```
//!
//! Delete and like/unlike calls answer with an empty body, so only their
//! HTTP status is returned.

use crate::client::LmkClient;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{DEFAULT_LIMIT, DEFAULT_PAGE};
use reqwest::Method;
use serde_json::{Value, json};

impl<T: Transport> LmkClient<T> {
    pub fn get_post_info(&self, post_id: &str) -> Result<Value> {
        self.get_json(&format!("/sydney/posts/{post_id}"), &[])
    }

    /// Comments on a post, default page `0`, limit `10`.
    pub fn get_post_comments(
        &self,
        post_id: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value> {
        self.get_json(
            &format!("/sydney/posts/{post_id}/comments"),
            &[
                ("page", page.unwrap_or(DEFAULT_PAGE).to_string()),
                ("limit", limit.unwrap_or(DEFAULT_LIMIT).to_string()),
            ],
        )
    }

    pub fn send_comment(&self, post_id: &str, content: &str) -> Result<Value> {
        self.request_json(
            Method::POST,
            &format!("/sydney/posts/{post_id}/comments"),
            &[],
            Some(json!({ "content": content })),
        )
    }

    pub fn delete_comment(&self, post_id: &str, comment_id: &str) -> Result<u16> {
        self.request_status(
            Method::DELETE,
            &format!("/sydney/posts/{post_id}/comments/{comment_id}"),
            None,
        )
    }

    pub fn like_post(&self, post_id: &str) -> Result<u16> {
        self.request_status(Method::POST, &format!("/sydney/posts/{post_id}/likes"), None)
    }

    pub fn unlike_post(&self, post_id: &str) -> Result<u16> {
        self.request_status(Method::DELETE, &format!("/sydney/posts/{post_id}/likes"), None)
    }

    /// Publish a post. `images`/`videos` are sent verbatim.
    pub fn create_post(&self, description: &str, images: &[Value], videos: &[Value]) -> Result<Value> {
        let data = json!({
            "description": description,
            "images": images,
            "videos": videos,
        });
        self.request_json(Method::POST, "/sydney/posts", &[], Some(data))
    }

    pub fn delete_post(&self, post_id: &str) -> Result<u16> {
        self.request_status(Method::DELETE, &format!("/sydney/posts/{post_id}"), None)
    }

    /// Home feed. `limit` defaults to `10`; there is no page parameter.
    pub fn get_feed(&self, limit: Option<u32>) -> Result<Value> {
        self.get_json(
            "/sydney/user-feed",
            &[("limit", limit.unwrap_or(DEFAULT_LIMIT).to_string())],
        )
    }

    /// The logged-in user's notifications, default page `0`, limit `10`.
    pub fn get_notifications(&self, page: Option<u32>, limit: Option<u32>) -> Result<Value> {
        self.get_json(
            &format!("/sydney/users/{}/notifications", self.own_user_id()),
            &[
                ("page", page.unwrap_or(DEFAULT_PAGE).to_string()),
                ("limit", limit.unwrap_or(DEFAULT_LIMIT).to_string()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{MockTransport, client};

    #[test]
    fn status_endpoints_pass_codes_through() {
        let c = client(
            MockTransport::default()
                .reply_status(204)
                .reply_status(201)
                .reply_status(204)
                .reply_status(404),
        );
        assert_eq!(c.delete_comment("p1", "c1").unwrap(), 204);
        assert_eq!(c.like_post("p1").unwrap(), 201);
        assert_eq!(c.unlike_post("p1").unwrap(), 204);
        assert_eq!(c.delete_post("p1").unwrap(), 404);

        let sent: Vec<(Method, String)> = c
            .transport()
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect();
        assert_eq!(
            sent,
            [
                (Method::DELETE, "https://lmk.test/sydney/posts/p1/comments/c1".to_owned()),
                (Method::POST, "https://lmk.test/sydney/posts/p1/likes".to_owned()),
                (Method::DELETE, "https://lmk.test/sydney/posts/p1/likes".to_owned()),
                (Method::DELETE, "https://lmk.test/sydney/posts/p1".to_owned()),
            ]
        );
    }

    #[test]
    fn like_has_no_body() {
        let c = client(MockTransport::default().reply_status(204));
        c.like_post("p1").unwrap();
        assert!(c.transport().last().body.is_none());
    }

    #[test]
    fn comments_listing_and_sending() {
        let c = client(
            MockTransport::default()
                .reply_json(200, &json!({ "comments": [] }))
                .reply_json(200, &json!({ "id": "c2" })),
        );
        c.get_post_comments("p1", None, None).unwrap();
        assert_eq!(
            c.transport().last().url,
            "https://lmk.test/sydney/posts/p1/comments?page=0&limit=10"
        );

        let resp = c.send_comment("p1", "nice").unwrap();
        assert_eq!(resp, json!({ "id": "c2" }));
        let req = c.transport().last();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.body, Some(json!({ "content": "nice" })));
    }

    #[test]
    fn create_post_sends_empty_media_lists() {
        let c = client(MockTransport::default().reply_json(200, &json!({ "id": "p9" })));
        c.create_post("hello", &[], &[]).unwrap();
        let req = c.transport().last();
        assert_eq!(req.url, "https://lmk.test/sydney/posts");
        assert_eq!(
            req.body,
            Some(json!({ "description": "hello", "images": [], "videos": [] }))
        );
    }

    #[test]
    fn feed_and_notifications() {
        let mut c = client(
            MockTransport::default()
                .reply_json(200, &json!({}))
                .reply_json(200, &json!({}))
                .reply_json(200, &json!({})),
        );
        c.get_post_info("p1").unwrap();
        assert_eq!(c.transport().last().url, "https://lmk.test/sydney/posts/p1");
        c.get_feed(None).unwrap();
        assert_eq!(c.transport().last().url, "https://lmk.test/sydney/user-feed?limit=10");

        c.session_mut().authenticate("me1".into(), "tok".into());
        c.get_notifications(None, Some(25)).unwrap();
        assert_eq!(
            c.transport().last().url,
            "https://lmk.test/sydney/users/me1/notifications?page=0&limit=25"
        );
    }
}
