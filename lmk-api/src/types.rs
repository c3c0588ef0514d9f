//! Request-side types and parameter defaults.
//!
//! Response bodies are not modelled: rooms, posts, gifts and wallet data are
//! returned to the caller as raw [`serde_json::Value`].

use serde::Serialize;

/// Default page index for `page`-based listings.
pub const DEFAULT_PAGE: u32 = 0;
/// Default page size for most listings.
pub const DEFAULT_LIMIT: u32 = 10;
/// Default page size for gift and wallet-transaction listings.
pub const DEFAULT_LEDGER_LIMIT: u32 = 20;
/// Default `action` for room recommendation feeds.
pub const DEFAULT_ROOM_ACTION: &str = "Pull_Down_To_Refresh";
/// Default `origin` code sent when joining a room.
pub const DEFAULT_JOIN_ORIGIN: u32 = 303;
/// Default `origin` sent when following a user.
pub const DEFAULT_FOLLOW_ORIGIN: &str = "profile_followUser_onProfilePage";

/// Room recommendation feed, mapped to the `category` query parameter.
///
/// | Variant         | `category`      |
/// |-----------------|-----------------|
/// | `All`           | *(omitted)*     |
/// | `Interests`     | `Interests`     |
/// | `Discussion`    | `Discussion`    |
/// | `Music`         | `Music`         |
/// | `Gaming`        | `Gaming`        |
/// | `Motivational`  | `Motivational`  |
/// | `Casual`        | `Casual`        |
/// | `Relationships` | `Relationships` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomCategory {
    #[default]
    All,
    Interests,
    Discussion,
    Music,
    Gaming,
    Motivational,
    Casual,
    Relationships,
}

impl RoomCategory {
    /// Value of the `category` parameter, `None` for the unfiltered feed.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Interests => Some("Interests"),
            Self::Discussion => Some("Discussion"),
            Self::Music => Some("Music"),
            Self::Gaming => Some("Gaming"),
            Self::Motivational => Some("Motivational"),
            Self::Casual => Some("Casual"),
            Self::Relationships => Some("Relationships"),
        }
    }
}

/// Fields for `PUT /user`.
///
/// Unset and empty fields are left out of the body entirely, so the server
/// keeps their current values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEdit {
    #[serde(skip_serializing_if = "is_blank")]
    pub profile_message: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub job: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub school: Option<String>,
}

#[allow(clippy::ref_option)]
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
