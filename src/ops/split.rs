//! Splitting a room into several measurement points.
//!
//! A split replaces one room with one fragment per suffix. Fragments are
//! new rooms, but they stand for the same physical room, so the original's
//! selection flags propagate to every fragment and `original_room_id`
//! points at the start of the chain even across repeated splits.

use crate::model::{Building, Room, RoomId, SpaceId};

/// Splits room `room_id` of space `space_id` into one fragment per suffix.
///
/// Fragment names are `original.name + suffix`. Each fragment carries the
/// original's volume, wall count and selection flags; `original_room_id`
/// is the original's own origin when it was itself a fragment, otherwise
/// the original's id.
///
/// Returns the new room ids in order. With zero suffixes or an unknown
/// space/room id nothing changes and the result is empty.
pub fn split_room<S: AsRef<str>>(
    building: &mut Building,
    space_id: SpaceId,
    room_id: RoomId,
    suffixes: &[S],
) -> Vec<RoomId> {
    if suffixes.is_empty() {
        return Vec::new();
    }
    let space = match building
        .floors
        .iter_mut()
        .find_map(|f| f.space_mut(space_id))
    {
        Some(space) => space,
        None => return Vec::new(),
    };
    let position = match space.rooms.iter().position(|r| r.id == room_id) {
        Some(position) => position,
        None => return Vec::new(),
    };

    let original = space.rooms.remove(position);
    let origin = original.original_room_id.unwrap_or(original.id);

    let mut fragment_ids = Vec::with_capacity(suffixes.len());
    for (offset, suffix) in suffixes.iter().enumerate() {
        let fragment = Room {
            id: building.ids.next_id(),
            name: format!("{}{}", original.name, suffix.as_ref()),
            volume: original.volume,
            external_walls: original.external_walls,
            original_room_id: Some(origin),
            selected: original.selected,
            radiation_selected: original.radiation_selected,
            microclimate_selected: original.microclimate_selected,
        };
        fragment_ids.push(fragment.id);
        space.rooms.insert(position + offset, fragment);
    }
    fragment_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Floor, FloorType, Space, SpaceType};
    use pretty_assertions::assert_eq;

    fn one_space_building() -> (Building, SpaceId) {
        let mut building = Building::new("Дом");
        let mut floor = Floor::new("1 этаж", FloorType::Residential, None, 0);
        let mut flat = Space::new(0, "кв 1", SpaceType::Apartment, 0);
        flat.rooms.push(Room::new(0, "Кухня"));
        flat.rooms.push(Room::new(0, "Жилая комната"));
        floor.spaces.push(flat);
        building.floors.push(floor);
        building.assign_ids();
        let space_id = building.floors[0].spaces[0].id;
        (building, space_id)
    }

    #[test]
    fn split_propagates_checked_state_to_every_fragment() {
        let (mut building, space_id) = one_space_building();
        let room_id = building.floors[0].spaces[0].rooms[1].id;
        building.floors[0].spaces[0].rooms[1].selected = true;
        building.floors[0].spaces[0].rooms[1].radiation_selected = true;

        let fragments = split_room(&mut building, space_id, room_id, &[" т.1", " т.2", " т.3"]);

        assert_eq!(fragments.len(), 3);
        for id in &fragments {
            let fragment = building.find_room(*id).unwrap();
            assert!(fragment.selected);
            assert!(fragment.radiation_selected);
            assert_eq!(fragment.original_room_id, Some(room_id));
        }
        let names: Vec<&str> = building.floors[0].spaces[0]
            .rooms
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Кухня",
                "Жилая комната т.1",
                "Жилая комната т.2",
                "Жилая комната т.3"
            ]
        );
    }

    #[test]
    fn split_of_unchecked_room_yields_unchecked_fragments() {
        let (mut building, space_id) = one_space_building();
        let room_id = building.floors[0].spaces[0].rooms[0].id;

        let fragments = split_room(&mut building, space_id, room_id, &[" т.1", " т.2"]);

        for id in fragments {
            let fragment = building.find_room(id).unwrap();
            assert!(!fragment.selected);
            assert!(!fragment.radiation_selected);
            assert!(!fragment.microclimate_selected);
        }
    }

    #[test]
    fn zero_suffixes_is_a_no_op() {
        let (mut building, space_id) = one_space_building();
        let room_id = building.floors[0].spaces[0].rooms[0].id;

        let fragments = split_room::<&str>(&mut building, space_id, room_id, &[]);

        assert!(fragments.is_empty());
        assert!(building.find_room(room_id).is_some());
        assert_eq!(building.total_rooms(), 2);
    }

    #[test]
    fn splitting_a_fragment_keeps_the_original_origin() {
        let (mut building, space_id) = one_space_building();
        let first = building.floors[0].spaces[0].rooms[0].id;

        let fragments = split_room(&mut building, space_id, first, &[" т.1", " т.2"]);
        let again = split_room(&mut building, space_id, fragments[0], &[" а", " б"]);

        for id in again {
            assert_eq!(
                building.find_room(id).unwrap().original_room_id,
                Some(first)
            );
        }
    }

    #[test]
    fn unknown_room_id_is_a_no_op() {
        let (mut building, space_id) = one_space_building();

        let fragments = split_room(&mut building, space_id, 999, &[" т.1"]);

        assert!(fragments.is_empty());
        assert_eq!(building.total_rooms(), 2);
    }
}
