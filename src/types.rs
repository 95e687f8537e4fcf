//! Wire types for the GroupMe v3 API
//!
//! Shapes follow the upstream docs ([https://dev.groupme.com/docs/v3]).
//! Messages come back newest-first from the index endpoints; both message
//! kinds carry the string `id` that drives cursor pagination.

use crate::pagination::{Page, PagedMessage};
use chrono::{DateTime, Utc};
use serde::Deserialize;

// ============================================================================
// Attachments
// ============================================================================

/// A message attachment (image, location, split, emoji, or mentions).
///
/// The upstream API multiplexes all attachment kinds over one object with a
/// `type` tag; fields not belonging to the tagged kind are absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Attachment kind: `"image"`, `"location"`, `"split"`, `"emoji"`, `"mentions"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Image URL (`image`)
    #[serde(default)]
    pub url: Option<String>,
    /// Latitude (`location`)
    #[serde(default)]
    pub lat: Option<f32>,
    /// Longitude (`location`)
    #[serde(default)]
    pub lng: Option<f32>,
    /// Location name (`location`)
    #[serde(default)]
    pub name: Option<String>,
    /// Split token (`split`)
    #[serde(default)]
    pub token: Option<String>,
    /// Emoji placeholder character (`emoji`)
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Emoji pack/index pairs (`emoji`)
    #[serde(default)]
    pub charmap: Option<Vec<Vec<i32>>>,
    /// Mentioned user ids (`mentions`)
    #[serde(default)]
    pub user_ids: Option<Vec<String>>,
}

// ============================================================================
// Messages
// ============================================================================

/// A message posted in a group.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupMessage {
    /// Message id, the pagination cursor key
    pub id: String,
    /// Client-supplied guid used for send deduplication
    pub source_guid: String,
    /// When the message was created
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    /// Id of the posting user
    pub user_id: String,
    /// Id of the group the message belongs to
    pub group_id: String,
    /// Display name of the poster at post time
    pub name: String,
    /// Avatar of the poster, if set
    pub avatar_url: Option<String>,
    /// Message text; absent for attachment-only messages
    pub text: Option<String>,
    /// True for service-generated messages (joins, kicks, ...)
    pub system: bool,
    /// Ids of users who liked the message
    pub favorited_by: Vec<String>,
    /// Attachments carried by the message
    pub attachments: Vec<Attachment>,
}

/// A message exchanged between two users.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectMessage {
    /// Message id, the pagination cursor key
    pub id: String,
    /// Client-supplied guid used for send deduplication
    pub source_guid: String,
    /// When the message was created
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    /// Id of the sender
    pub user_id: String,
    /// Id of the recipient
    pub recipient_id: String,
    /// Display name of the sender
    pub name: String,
    /// Avatar of the sender, if set
    pub avatar_url: Option<String>,
    /// Message text; absent for attachment-only messages
    pub text: Option<String>,
    /// True for service-generated messages
    pub system: bool,
    /// Ids of users who liked the message
    pub favorited_by: Vec<String>,
    /// Attachments carried by the message
    pub attachments: Vec<Attachment>,
}

impl PagedMessage for GroupMessage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl PagedMessage for DirectMessage {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Index payloads
// ============================================================================

/// Payload of `GET /groups/:group_id/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupMessagesIndex {
    /// Total number of messages in the group
    pub count: u64,
    /// One page of messages, newest first
    pub messages: Vec<GroupMessage>,
}

/// Payload of `GET /direct_messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectMessagesIndex {
    /// Total number of messages in the conversation
    pub count: u64,
    /// One page of messages, newest first
    pub direct_messages: Vec<DirectMessage>,
}

impl From<GroupMessagesIndex> for Page<GroupMessage> {
    fn from(index: GroupMessagesIndex) -> Self {
        Page {
            count: index.count,
            messages: index.messages,
        }
    }
}

impl From<DirectMessagesIndex> for Page<DirectMessage> {
    fn from(index: DirectMessagesIndex) -> Self {
        Page {
            count: index.count,
            messages: index.direct_messages,
        }
    }
}
