use serde::{Deserialize, Serialize};

/// In-session room handle. Unique only within one loaded [`Building`],
/// never persisted and never compared across reloads or structural copies.
///
/// [`Building`]: crate::model::Building
pub type RoomId = u32;

/// Which persisted selection flag a subsystem reads and writes.
///
/// Noise and ventilation share the generic flag; radiation and microclimate
/// each have their own (see [`Subsystem::kind`](crate::select::Subsystem::kind)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    General,
    Radiation,
    Microclimate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Transient handle, assigned by the owning building's id generator.
    #[serde(skip)]
    pub id: RoomId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_walls: Option<u32>,
    /// Set by copy/split operators to trace a room back to the room it was
    /// produced from. References an in-session id, so it is not persisted.
    #[serde(skip)]
    pub original_room_id: Option<RoomId>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub radiation_selected: bool,
    #[serde(default)]
    pub microclimate_selected: bool,
}

impl Room {
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            volume: None,
            external_walls: None,
            original_room_id: None,
            selected: false,
            radiation_selected: false,
            microclimate_selected: false,
        }
    }

    /// Reads the persisted flag for `kind`.
    #[must_use]
    pub fn flag(&self, kind: SelectionKind) -> bool {
        match kind {
            SelectionKind::General => self.selected,
            SelectionKind::Radiation => self.radiation_selected,
            SelectionKind::Microclimate => self.microclimate_selected,
        }
    }

    pub fn set_flag(&mut self, kind: SelectionKind, value: bool) {
        match kind {
            SelectionKind::General => self.selected = value,
            SelectionKind::Radiation => self.radiation_selected = value,
            SelectionKind::Microclimate => self.microclimate_selected = value,
        }
    }
}
