use serde::{Deserialize, Serialize};

use super::key::structural_key;
use super::{Floor, Room, RoomId, Space};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub position: usize,
}

/// In-session id source for spaces and rooms.
///
/// Ids are scoped to one loaded building and start over on every load;
/// cross-session identity is the structural key, never these handles.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    next: u32,
}

impl IdGen {
    pub fn next_id(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub floors: Vec<Floor>,
    #[serde(skip)]
    pub ids: IdGen,
}

/// A room together with its ancestor chain, as produced by [`Building::rooms`].
#[derive(Debug, Clone, Copy)]
pub struct RoomPath<'a> {
    pub section_index: Option<usize>,
    pub floor: &'a Floor,
    pub space: &'a Space,
    pub room: &'a Room,
}

impl RoomPath<'_> {
    /// Structural key of this room, see [`structural_key`].
    #[must_use]
    pub fn key(&self) -> String {
        structural_key(
            self.section_index,
            &self.floor.label,
            &self.space.identifier,
            &self.room.name,
        )
    }
}

impl Building {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
            floors: Vec::new(),
            ids: IdGen::default(),
        }
    }

    /// Assigns fresh in-session ids to every space and room.
    ///
    /// Called after deserialization (ids are not persisted) and after
    /// whole-tree copies. Any ids held outside the building are stale
    /// afterwards.
    pub fn assign_ids(&mut self) {
        self.ids = IdGen::default();
        for floor in &mut self.floors {
            for space in &mut floor.spaces {
                space.id = self.ids.next_id();
                for room in &mut space.rooms {
                    room.id = self.ids.next_id();
                }
            }
        }
    }

    /// Every room reachable from this building, in deterministic traversal
    /// order: floors ordered by (section, position), spaces by position,
    /// rooms in list order.
    ///
    /// This order is what makes key collisions resolve predictably
    /// (last match wins) in the snapshot engine.
    #[must_use]
    pub fn rooms(&self) -> Vec<RoomPath<'_>> {
        let mut floors: Vec<&Floor> = self.floors.iter().collect();
        floors.sort_by_key(|f| (f.section_index, f.position));

        let mut paths = Vec::new();
        for floor in floors {
            let mut spaces: Vec<&Space> = floor.spaces.iter().collect();
            spaces.sort_by_key(|s| s.position);
            for space in spaces {
                for room in &space.rooms {
                    paths.push(RoomPath {
                        section_index: floor.section_index,
                        floor,
                        space,
                        room,
                    });
                }
            }
        }
        paths
    }

    /// Visits every room mutably. Traversal order is not significant here;
    /// this is the write side used by selection commits.
    pub fn for_each_room_mut(&mut self, mut f: impl FnMut(&mut Room)) {
        for floor in &mut self.floors {
            for space in &mut floor.spaces {
                for room in &mut space.rooms {
                    f(room);
                }
            }
        }
    }

    #[must_use]
    pub fn find_room(&self, id: RoomId) -> Option<&Room> {
        self.floors
            .iter()
            .flat_map(|f| &f.spaces)
            .find_map(|s| s.room(id))
    }

    #[must_use]
    pub fn section_name(&self, index: Option<usize>) -> Option<&str> {
        index
            .and_then(|i| self.sections.get(i))
            .map(|s| s.name.as_str())
    }

    #[must_use]
    pub fn total_spaces(&self) -> usize {
        self.floors.iter().map(|f| f.spaces.len()).sum()
    }

    #[must_use]
    pub fn total_rooms(&self) -> usize {
        self.floors
            .iter()
            .flat_map(|f| &f.spaces)
            .map(|s| s.rooms.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FloorType, SpaceType};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn building_with_two_floors() -> Building {
        let mut building = Building::new("Дом 7");
        building.sections.push(Section {
            name: "Секция 1".to_string(),
            position: 0,
        });

        let mut first = Floor::new("1 этаж", FloorType::Residential, Some(0), 0);
        let mut flat = Space::new(0, "кв 1", SpaceType::Apartment, 0);
        flat.rooms.push(Room::new(0, "Кухня"));
        flat.rooms.push(Room::new(0, "Жилая комната"));
        first.spaces.push(flat);

        let mut second = Floor::new("2 этаж", FloorType::Residential, Some(0), 1);
        let mut flat = Space::new(0, "кв 2", SpaceType::Apartment, 0);
        flat.rooms.push(Room::new(0, "Кухня"));
        second.spaces.push(flat);

        // Out of order on purpose: traversal must sort by position.
        building.floors.push(second);
        building.floors.push(first);
        building.assign_ids();
        building
    }

    #[test]
    fn assign_ids_makes_unique_handles() {
        let building = building_with_two_floors();
        let mut seen = HashSet::new();
        for floor in &building.floors {
            for space in &floor.spaces {
                assert!(seen.insert(space.id));
                for room in &space.rooms {
                    assert!(seen.insert(room.id));
                }
            }
        }
    }

    #[test]
    fn rooms_iterates_floors_by_position_not_insertion_order() {
        let building = building_with_two_floors();
        let labels: Vec<&str> = building
            .rooms()
            .iter()
            .map(|p| p.floor.label.as_str())
            .collect();
        assert_eq!(labels, vec!["1 этаж", "1 этаж", "2 этаж"]);
    }

    #[test]
    fn room_path_key_includes_full_ancestor_chain() {
        let building = building_with_two_floors();
        let paths = building.rooms();
        assert_eq!(paths[0].key(), "0|1 этаж|кв 1|Кухня");
    }
}
