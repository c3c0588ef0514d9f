//! Audio-room discovery, joining, room media and gifts.
//!
//! All endpoints live under `/mario/audio-room`.
//!
//! ## Recommendation feeds
//!
//! `GET /mario/audio-room/recommendation-rooms?category=Music&action=Pull_Down_To_Refresh&miniOnBoarding=True`
//!
//! `category` is omitted for the unfiltered feed; see [`RoomCategory`].
//!
//! ## Joining
//!
//! `GET /mario/audio-room/join-room?roomId=...&impressionId=...&origin=303`
//!
//! `impressionId` comes from the feed entry the room was picked from.

use crate::client::{LmkClient, flag};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{
    DEFAULT_JOIN_ORIGIN, DEFAULT_LEDGER_LIMIT, DEFAULT_LIMIT, DEFAULT_PAGE, DEFAULT_ROOM_ACTION,
    RoomCategory,
};
use serde_json::Value;

const ROOM_BASE: &str = "/mario/audio-room";

impl<T: Transport> LmkClient<T> {
    /// Recommended rooms for a category.
    ///
    /// `action` defaults to `Pull_Down_To_Refresh`, `mini_on_boarding` to
    /// `true`.
    pub fn get_rooms(
        &self,
        category: RoomCategory,
        action: Option<&str>,
        mini_on_boarding: Option<bool>,
    ) -> Result<Value> {
        let mut query = Vec::with_capacity(3);
        if let Some(category) = category.as_param() {
            query.push(("category", category.to_owned()));
        }
        query.push(("action", action.unwrap_or(DEFAULT_ROOM_ACTION).to_owned()));
        query.push(("miniOnBoarding", flag(mini_on_boarding.unwrap_or(true))));
        self.get_json(&format!("{ROOM_BASE}/recommendation-rooms"), &query)
    }

    pub fn get_all_rooms(&self, action: Option<&str>, mini_on_boarding: Option<bool>) -> Result<Value> {
        self.get_rooms(RoomCategory::All, action, mini_on_boarding)
    }

    pub fn get_interests_rooms(
        &self,
        action: Option<&str>,
        mini_on_boarding: Option<bool>,
    ) -> Result<Value> {
        self.get_rooms(RoomCategory::Interests, action, mini_on_boarding)
    }

    pub fn get_discussion_rooms(
        &self,
        action: Option<&str>,
        mini_on_boarding: Option<bool>,
    ) -> Result<Value> {
        self.get_rooms(RoomCategory::Discussion, action, mini_on_boarding)
    }

    pub fn get_music_rooms(&self, action: Option<&str>, mini_on_boarding: Option<bool>) -> Result<Value> {
        self.get_rooms(RoomCategory::Music, action, mini_on_boarding)
    }

    pub fn get_gaming_rooms(&self, action: Option<&str>, mini_on_boarding: Option<bool>) -> Result<Value> {
        self.get_rooms(RoomCategory::Gaming, action, mini_on_boarding)
    }

    pub fn get_motivational_rooms(
        &self,
        action: Option<&str>,
        mini_on_boarding: Option<bool>,
    ) -> Result<Value> {
        self.get_rooms(RoomCategory::Motivational, action, mini_on_boarding)
    }

    pub fn get_casual_rooms(&self, action: Option<&str>, mini_on_boarding: Option<bool>) -> Result<Value> {
        self.get_rooms(RoomCategory::Casual, action, mini_on_boarding)
    }

    pub fn get_relationships_rooms(
        &self,
        action: Option<&str>,
        mini_on_boarding: Option<bool>,
    ) -> Result<Value> {
        self.get_rooms(RoomCategory::Relationships, action, mini_on_boarding)
    }

    /// Live rooms hosted by people the user follows. Offset-based, default
    /// `0`/`10`.
    pub fn get_following_rooms(&self, offset: Option<u32>, limit: Option<u32>) -> Result<Value> {
        self.get_json(
            &format!("{ROOM_BASE}/followee-rooms"),
            &[
                ("offset", offset.unwrap_or(0).to_string()),
                ("limit", limit.unwrap_or(DEFAULT_LIMIT).to_string()),
            ],
        )
    }

    pub fn search_audio_room(&self, search_key: &str) -> Result<Value> {
        self.get_json(
            &format!("{ROOM_BASE}/room"),
            &[("searchKey", search_key.to_owned())],
        )
    }

    /// Join a room. `origin` defaults to `303` (recommendation feed).
    pub fn join_room(&self, room_id: &str, impression_id: &str, origin: Option<u32>) -> Result<Value> {
        self.get_json(
            &format!("{ROOM_BASE}/join-room"),
            &[
                ("roomId", room_id.to_owned()),
                ("impressionId", impression_id.to_owned()),
                ("origin", origin.unwrap_or(DEFAULT_JOIN_ORIGIN).to_string()),
            ],
        )
    }

    pub fn get_room_last_messages(&self, room_id: &str) -> Result<Value> {
        self.get_json(&format!("{ROOM_BASE}/rooms/{room_id}/last-messages"), &[])
    }

    pub fn get_room_video(&self, room_id: &str) -> Result<Value> {
        self.get_json(&format!("{ROOM_BASE}/rooms/{room_id}/video"), &[])
    }

    pub fn get_room_boost(&self, room_id: &str) -> Result<Value> {
        self.get_json(&format!("{ROOM_BASE}/rooms/{room_id}/boost"), &[])
    }

    /// Gifts received in rooms, default page `0`, limit `20`.
    pub fn get_received_gifts(&self, page: Option<u32>, limit: Option<u32>) -> Result<Value> {
        self.gift_listing("received-gifts", page, limit)
    }

    /// Gifts sent in rooms, default page `0`, limit `20`.
    pub fn get_sent_gifts(&self, page: Option<u32>, limit: Option<u32>) -> Result<Value> {
        self.gift_listing("sent-gifts", page, limit)
    }

    fn gift_listing(&self, kind: &str, page: Option<u32>, limit: Option<u32>) -> Result<Value> {
        self.get_json(
            &format!("{ROOM_BASE}/user/{kind}"),
            &[
                ("page", page.unwrap_or(DEFAULT_PAGE).to_string()),
                ("limit", limit.unwrap_or(DEFAULT_LEDGER_LIMIT).to_string()),
            ],
        )
    }
}
