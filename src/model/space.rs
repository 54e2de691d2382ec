use serde::{Deserialize, Serialize};

use super::Room;

/// In-session space handle, same lifetime rules as [`RoomId`](super::RoomId).
pub type SpaceId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceType {
    Apartment,
    Office,
    PublicSpace,
    Outdoor,
    Technical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    /// Transient handle, assigned by the owning building's id generator.
    #[serde(skip)]
    pub id: SpaceId,
    /// Free text, e.g. "кв 3" or "офис 12".
    pub identifier: String,
    pub kind: SpaceType,
    pub position: usize,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Space {
    #[must_use]
    pub fn new(id: SpaceId, identifier: impl Into<String>, kind: SpaceType, position: usize) -> Self {
        Self {
            id,
            identifier: identifier.into(),
            kind,
            position,
            rooms: Vec::new(),
        }
    }

    #[must_use]
    pub fn room(&self, id: super::RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}
