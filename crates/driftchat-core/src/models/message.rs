use serde::{Deserialize, Serialize};

/// Message type tag as synced from the server.
///
/// Plain text messages arrive with no tag at all; system-generated entries
/// (joins, removals, renames, ...) carry a short tag string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    Audio,
    Image,
    Video,
    UserJoined,
    UserLeft,
    UserAdded,
    UserRemoved,
    Welcome,
    MessageRemoved,
    RoomNameChanged,
    MessagePinned,
}

impl MessageKind {
    /// Map a wire type tag to a kind. An absent or empty tag is a plain text
    /// message; unrecognized tags are rejected so ingestion can decide what
    /// to do with them.
    pub fn from_tag(tag: Option<&str>) -> Option<Self> {
        match tag {
            None | Some("") => Some(Self::Text),
            Some("audio") => Some(Self::Audio),
            Some("image") => Some(Self::Image),
            Some("video") => Some(Self::Video),
            Some("uj") => Some(Self::UserJoined),
            Some("ul") => Some(Self::UserLeft),
            Some("au") => Some(Self::UserAdded),
            Some("ru") => Some(Self::UserRemoved),
            Some("wm") => Some(Self::Welcome),
            Some("rm") => Some(Self::MessageRemoved),
            Some("r") => Some(Self::RoomNameChanged),
            Some("message_pinned") => Some(Self::MessagePinned),
            Some(_) => None,
        }
    }

    /// Wire tag for this kind. Plain text is sent without a tag.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Text => None,
            Self::Audio => Some("audio"),
            Self::Image => Some("image"),
            Self::Video => Some("video"),
            Self::UserJoined => Some("uj"),
            Self::UserLeft => Some("ul"),
            Self::UserAdded => Some("au"),
            Self::UserRemoved => Some("ru"),
            Self::Welcome => Some("wm"),
            Self::MessageRemoved => Some("rm"),
            Self::RoomNameChanged => Some("r"),
            Self::MessagePinned => Some("message_pinned"),
        }
    }

    /// Whether a user can act on messages of this kind (star, pin).
    /// System-generated kinds never are.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Text | Self::Audio | Self::Image | Self::Video)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub content: String,
    pub kind: MessageKind,
    /// Creation time in Unix seconds. Informational only; it does not gate
    /// whether the message is actionable.
    pub created_at: u64,
}

impl Message {
    pub fn is_actionable(&self) -> bool {
        self.kind.is_actionable()
    }
}
