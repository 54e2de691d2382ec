use std::collections::HashMap;

use crate::model::{Building, Room, RoomId, SelectionKind};

/// In-memory "what is checked right now" for one subsystem.
///
/// Toggling checkboxes mutates only this store; the entity tree keeps its
/// persisted flags until [`commit`](Self::commit) pushes the store back.
/// The two-phase design lets a user toggle freely and persist once.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    kind: SelectionKind,
    values: HashMap<RoomId, bool>,
}

impl SelectionStore {
    #[must_use]
    pub fn new(kind: SelectionKind) -> Self {
        Self {
            kind,
            values: HashMap::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    /// Current value for a room: the store entry if the room was touched
    /// this session, otherwise the room's persisted flag.
    #[must_use]
    pub fn get(&self, room: &Room) -> bool {
        self.values
            .get(&room.id)
            .copied()
            .unwrap_or_else(|| room.flag(self.kind))
    }

    pub fn set(&mut self, room_id: RoomId, value: bool) {
        self.values.insert(room_id, value);
    }

    pub fn toggle(&mut self, room: &Room) {
        let value = self.get(room);
        self.set(room.id, !value);
    }

    /// Drops every pending value. Rooms fall back to their persisted flags.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Pushes the store into the entity tree: every reachable room's
    /// persisted flag is set to its current store value.
    ///
    /// Must run before the tree is written out or structurally rebuilt,
    /// or pending checkbox state is lost.
    pub fn commit(&self, building: &mut Building) {
        building.for_each_room_mut(|room| {
            let value = self
                .values
                .get(&room.id)
                .copied()
                .unwrap_or_else(|| room.flag(self.kind));
            room.set_flag(self.kind, value);
        });
    }
}
