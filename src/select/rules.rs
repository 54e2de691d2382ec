//! One-shot default selections applied when a space is first shown.
//!
//! The defaults cut down manual checkbox work; they never override a
//! selection the user has already seen. A space is applied at most once
//! per session, tracked by in-session space id.

use std::collections::HashSet;

use crate::model::{Floor, Space, SpaceId, SpaceType};

use super::SelectionStore;

/// Room names that identify wet rooms, excluded from default selections.
const WET_ROOM_TERMS: &[&str] = &[
    "санузел",
    "с/у",
    "ванн",
    "туалет",
    "душ",
    "уборн",
];

const KITCHEN_TERM: &str = "кухн";

#[must_use]
pub fn is_wet_room(name: &str) -> bool {
    let name = name.to_lowercase();
    WET_ROOM_TERMS.iter().any(|term| name.contains(term))
}

#[must_use]
pub fn is_kitchen(name: &str) -> bool {
    name.to_lowercase().contains(KITCHEN_TERM)
}

/// Applies default selections, once per space per session.
///
/// Reset on project load; holds no state besides the processed set
/// (see the design ledger for why this is a field, not a global).
#[derive(Debug, Default)]
pub struct AutoSelector {
    processed: HashSet<SpaceId>,
}

impl AutoSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every processed space. Call when a new building is loaded;
    /// the old ids are meaningless against the new tree.
    pub fn reset(&mut self) {
        self.processed.clear();
    }

    #[must_use]
    pub fn is_processed(&self, space_id: SpaceId) -> bool {
        self.processed.contains(&space_id)
    }

    /// Applies the default selection for `space` to `store`.
    ///
    /// - Office and public spaces: every room except wet rooms.
    /// - Apartments: only the first apartment per floor gets defaults,
    ///   the kitchen plus one more eligible room, or two eligible rooms
    ///   when there is no kitchen.
    /// - An empty space is left unprocessed so the rule fires again once
    ///   rooms have been added.
    pub fn apply(&mut self, floor: &Floor, space: &Space, store: &mut SelectionStore) {
        if self.processed.contains(&space.id) {
            return;
        }
        if space.rooms.is_empty() {
            return;
        }

        match space.kind {
            SpaceType::Office | SpaceType::PublicSpace => {
                for room in &space.rooms {
                    if !is_wet_room(&room.name) {
                        store.set(room.id, true);
                    }
                }
            }
            SpaceType::Apartment => {
                let sibling_done = floor.spaces.iter().any(|s| {
                    s.id != space.id
                        && s.kind == SpaceType::Apartment
                        && self.processed.contains(&s.id)
                });
                if !sibling_done {
                    Self::select_apartment_defaults(space, store);
                }
            }
            SpaceType::Outdoor | SpaceType::Technical => {}
        }

        self.processed.insert(space.id);
    }

    fn select_apartment_defaults(space: &Space, store: &mut SelectionStore) {
        if let Some(kitchen) = space.rooms.iter().find(|r| is_kitchen(&r.name)) {
            store.set(kitchen.id, true);
            let extra = space
                .rooms
                .iter()
                .find(|r| r.id != kitchen.id && !is_kitchen(&r.name) && !is_wet_room(&r.name));
            if let Some(extra) = extra {
                store.set(extra.id, true);
            }
        } else {
            for room in space.rooms.iter().filter(|r| !is_wet_room(&r.name)).take(2) {
                store.set(room.id, true);
            }
        }
    }
}
