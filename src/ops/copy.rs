//! Structural copy operators.
//!
//! Copies always get new in-session ids; what happens to the selection
//! flags depends on the caller's intent, and the two intents are kept as
//! distinct entry points:
//!
//! - [`copy_room`] / [`CopyMode::ResetSelections`]: duplicating structure
//!   ("add a floor like this one"): the copy starts unselected everywhere.
//! - [`copy_room_preserve`] / [`CopyMode::PreserveSelections`]: saving a
//!   project as a new version: report contents must carry over unchanged.

use crate::model::{Building, Floor, IdGen, Room, Space};

use super::numbering::{next_floor_label, renumber_spaces};

/// What a recursive copy does with per-room selection flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    ResetSelections,
    PreserveSelections,
}

/// Copies a room with a fresh id and cleared selection flags.
/// `original_room_id` records where the copy came from.
#[must_use]
pub fn copy_room(original: &Room, ids: &mut IdGen) -> Room {
    let mut room = copy_room_preserve(original, ids);
    room.selected = false;
    room.radiation_selected = false;
    room.microclimate_selected = false;
    room
}

/// Copies a room with a fresh id, keeping every selection flag.
#[must_use]
pub fn copy_room_preserve(original: &Room, ids: &mut IdGen) -> Room {
    Room {
        id: ids.next_id(),
        name: original.name.clone(),
        volume: original.volume,
        external_walls: original.external_walls,
        original_room_id: Some(original.id),
        selected: original.selected,
        radiation_selected: original.radiation_selected,
        microclimate_selected: original.microclimate_selected,
    }
}

#[must_use]
pub fn copy_space(original: &Space, mode: CopyMode, ids: &mut IdGen) -> Space {
    let id = ids.next_id();
    let rooms = original
        .rooms
        .iter()
        .map(|room| match mode {
            CopyMode::ResetSelections => copy_room(room, ids),
            CopyMode::PreserveSelections => copy_room_preserve(room, ids),
        })
        .collect();
    Space {
        id,
        identifier: original.identifier.clone(),
        kind: original.kind,
        position: original.position,
        rooms,
    }
}

#[must_use]
pub fn copy_floor(original: &Floor, mode: CopyMode, ids: &mut IdGen) -> Floor {
    Floor {
        label: original.label.clone(),
        kind: original.kind,
        section_index: original.section_index,
        position: original.position,
        spaces: original
            .spaces
            .iter()
            .map(|space| copy_space(space, mode, ids))
            .collect(),
    }
}

/// Appends a copy of `building.floors[floor_index]` to the building:
/// fresh ids, cleared selections, the next free label in the section, and
/// space identifiers renumbered past the section's current maximum.
///
/// Returns the index of the new floor, or `None` for an out-of-range index.
pub fn duplicate_floor(building: &mut Building, floor_index: usize) -> Option<usize> {
    let source = building.floors.get(floor_index)?.clone();

    let mut copy = copy_floor(&source, CopyMode::ResetSelections, &mut building.ids);
    copy.label = next_floor_label(building, source.section_index, &source.label);
    renumber_spaces(building, source.section_index, &mut copy);
    copy.position = building
        .floors
        .iter()
        .filter(|f| f.section_index == source.section_index)
        .map(|f| f.position + 1)
        .max()
        .unwrap_or(0);

    building.floors.push(copy);
    Some(building.floors.len() - 1)
}

/// Deep-copies a building for a "save as new version": same structure and
/// labels, every selection flag preserved, all in-session ids fresh.
#[must_use]
pub fn save_as_new_version(original: &Building) -> Building {
    let mut ids = IdGen::default();
    let floors = original
        .floors
        .iter()
        .map(|floor| copy_floor(floor, CopyMode::PreserveSelections, &mut ids))
        .collect();
    Building {
        name: original.name.clone(),
        sections: original.sections.clone(),
        floors,
        ids,
    }
}
