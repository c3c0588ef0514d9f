//! LMK audio-room API client library.
//!
//! Blocking access to the LMK social audio-room HTTP API: phone login,
//! profiles, room discovery, gifts, wallet, follows and feed posts. Each
//! method performs exactly one HTTP request and returns the decoded JSON
//! body, or the bare HTTP status for endpoints that answer with nothing.
//!
//! # Authentication
//!
//! Log in with a texted verification code, or resume with a token kept from
//! an earlier login. Tokens are not persisted by this crate.
//!
//! ```no_run
//! use lmk_api::LmkClient;
//!
//! let mut client = LmkClient::new("en_US").unwrap();
//! client.request_verification_code(7, 9_001_234_567).unwrap();
//! let resp = client.login(7, 9_001_234_567, 123_456).unwrap();
//! if resp.get("id").is_none() {
//!     eprintln!("login failed: {resp}");
//! }
//!
//! // Later, in another process:
//! let mut client = LmkClient::new("en_US").unwrap();
//! client.login_with_access_token("SAVED_TOKEN", "SAVED_DEVICE_ID").unwrap();
//! let feed = client.get_feed(None).unwrap();
//! ```
//!
//! # API endpoint mapping
//!
//! | Area            | Methods                                                         | Path prefix            |
//! |-----------------|-----------------------------------------------------------------|------------------------|
//! | auth            | `request_verification_code`, `login`, `login_with_access_token` | `/verification-tokens`, `/authentication` |
//! | user            | `get_current_user`, `get_user_info`, `edit_profile`, ...        | `/user`, `/users/{id}` |
//! | rooms           | `get_rooms`, `search_audio_room`, `join_room`, gifts, ...       | `/mario/audio-room`    |
//! | social graph    | `get_user_followers`, `follow_user`, `unfollow_user`, ...       | `/users/{id}/follow*`  |
//! | wallet / store  | `get_wallet_transactions`, `get_store_gem_packets`              | `/user`, `/store`      |
//! | posts           | `create_post`, `send_comment`, `like_post`, `get_feed`, ...     | `/sydney`              |
//!
//! Methods returning `u16` (status only): `request_verification_code`,
//! `follow_user`, `unfollow_user`, `delete_comment`, `like_post`,
//! `unlike_post`, `delete_post`.
//!
//! # Errors
//!
//! Non-2xx responses are not errors; their JSON body is returned like any
//! other. [`LmkError`] covers transport failures and bodies that are not
//! JSON.

mod auth;
pub mod client;
pub mod config;
pub mod error;
mod post;
mod room;
pub mod session;
mod social;
pub mod time;
pub mod transport;
pub mod types;
mod user;
mod wallet;

pub use auth::SIGNING_HEADER;
pub use client::LmkClient;
pub use config::ClientConfig;
pub use error::{LmkError, Result};
pub use session::{Session, generate_device_id};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
pub use types::{ProfileEdit, RoomCategory};
