//! Key-indexed snapshots of a selection store.
//!
//! A snapshot survives what in-session ids cannot: reloading a project,
//! saving it as a new version, or any structural edit that rebuilds the
//! tree with fresh room ids. Save before the tree changes, restore after.

use std::collections::HashMap;

use crate::model::Building;

use super::SelectionStore;

/// Structural key → selection value.
pub type Snapshot = HashMap<String, bool>;

/// Captures the current selection of every room reachable from `building`,
/// indexed by structural key.
///
/// On key collision (two rooms with the same name in the same space) the
/// value written last wins; traversal order is deterministic, so the
/// surviving value is the last room in position order. This lossiness is
/// accepted; the key is positional identity, not a unique id.
#[must_use]
pub fn save_selections(building: &Building, store: &SelectionStore) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for path in building.rooms() {
        snapshot.insert(path.key(), store.get(path.room));
    }
    snapshot
}

/// Reconciles a snapshot onto a (possibly rebuilt) tree.
///
/// Rooms whose key is present in the snapshot get the snapshot value;
/// rooms without a counterpart keep their current value; a partial
/// restore never resets anything to false. Snapshot entries whose key
/// matches no room refer to structure that no longer exists and are
/// ignored.
pub fn restore_selections(building: &Building, store: &mut SelectionStore, snapshot: &Snapshot) {
    for path in building.rooms() {
        if let Some(&value) = snapshot.get(&path.key()) {
            store.set(path.room.id, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Building, Floor, FloorType, Room, SelectionKind, Space, SpaceType};
    use pretty_assertions::assert_eq;

    fn small_building() -> Building {
        let mut building = Building::new("Дом");
        let mut floor = Floor::new("1 этаж", FloorType::Residential, None, 0);
        let mut flat = Space::new(0, "кв 1", SpaceType::Apartment, 0);
        flat.rooms.push(Room::new(0, "Кухня"));
        flat.rooms.push(Room::new(0, "Жилая комната"));
        flat.rooms.push(Room::new(0, "Санузел"));
        floor.spaces.push(flat);
        building.floors.push(floor);
        building.assign_ids();
        building
    }

    fn room_ids(building: &Building) -> Vec<u32> {
        building.rooms().iter().map(|p| p.room.id).collect()
    }

    #[test]
    fn save_then_restore_is_identity_on_same_tree() {
        let building = small_building();
        let ids = room_ids(&building);

        let mut store = SelectionStore::new(SelectionKind::General);
        store.set(ids[0], true);
        store.set(ids[2], true);

        let snapshot = save_selections(&building, &store);

        let mut restored = SelectionStore::new(SelectionKind::General);
        restore_selections(&building, &mut restored, &snapshot);

        for path in building.rooms() {
            assert_eq!(restored.get(path.room), store.get(path.room));
        }
    }

    #[test]
    fn rooms_without_snapshot_counterpart_keep_their_value() {
        let building = small_building();
        let snapshot = save_selections(&building, &SelectionStore::new(SelectionKind::General));

        // Same structure plus one brand-new room, checked before restore.
        let mut grown = small_building();
        let new_id = grown.ids.next_id();
        let mut new_room = Room::new(new_id, "Кладовая");
        new_room.selected = true;
        grown.floors[0].spaces[0].rooms.push(new_room);

        let mut store = SelectionStore::new(SelectionKind::General);
        restore_selections(&grown, &mut store, &snapshot);

        let added = grown.find_room(new_id).unwrap();
        assert!(store.get(added), "new room must not be reset to false");
    }

    #[test]
    fn unmatched_snapshot_entries_are_ignored() {
        let building = small_building();
        let mut snapshot = Snapshot::new();
        snapshot.insert("|Этаж, которого нет|кв 9|Кухня".to_string(), true);

        let mut store = SelectionStore::new(SelectionKind::General);
        restore_selections(&building, &mut store, &snapshot);

        for path in building.rooms() {
            assert!(!store.get(path.room));
        }
    }

    #[test]
    fn colliding_keys_resolve_to_last_room_in_traversal_order() {
        let mut building = small_building();
        // Second "Кухня" in the same space: same structural key.
        let dup_id = building.ids.next_id();
        building.floors[0].spaces[0]
            .rooms
            .push(Room::new(dup_id, "Кухня"));

        let first_kitchen = room_ids(&building)[0];
        let mut store = SelectionStore::new(SelectionKind::General);
        store.set(first_kitchen, true);
        store.set(dup_id, false);

        let snapshot = save_selections(&building, &store);
        assert_eq!(snapshot.get("|1 этаж|кв 1|Кухня"), Some(&false));
    }

    #[test]
    fn snapshot_survives_a_reload_with_fresh_ids() {
        let building = small_building();
        let ids = room_ids(&building);

        let mut store = SelectionStore::new(SelectionKind::Microclimate);
        store.set(ids[1], true);
        let snapshot = save_selections(&building, &store);

        // A reload produces the same structure under different ids.
        let mut reloaded = small_building();
        reloaded.for_each_room_mut(|room| room.id += 100);

        let mut restored = SelectionStore::new(SelectionKind::Microclimate);
        restore_selections(&reloaded, &mut restored, &snapshot);

        let values: Vec<bool> = reloaded
            .rooms()
            .iter()
            .map(|p| restored.get(p.room))
            .collect();
        assert_eq!(values, vec![false, true, false]);
    }
}
