//! Entity Search Module
//!
//! Many handlers take a string from user input and need to match it to an item
//! the player can reach. Resolution runs in three tiers over an ordered set of
//! candidates:
//!
//! 1. the query equals a candidate's id exactly
//! 2. the query equals a candidate's display name, ignoring case
//! 3. the query is a substring of a candidate's display name, ignoring case
//!
//! The first tier with a hit wins; inside a tier the first candidate wins.
//!
//! Callers send an immutable `GrueWorld`, the search string and the scope, and
//! get back either the id of the found entity or the reason there is none
//! (`SearchError`).

use thiserror::Error;

use crate::{GrueWorld, Id, WorldObject};

/// The container a search looks into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    /// Items listed in the given room, in room order.
    RoomItems(Id),
    /// Items the player carries, in inventory order.
    Inventory,
}

/// Possible errors / situations causing a failed entity search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no entity in scope with a name matching user input '{0}'")]
    NoMatchingName(String),
    #[error("found no room with the id '{0}'")]
    InvalidRoomId(Id),
}

/// Resolve `query` against `candidates` using the three resolution tiers.
pub fn resolve_entity_name<'a, T: WorldObject>(query: &str, candidates: &[&'a T]) -> Option<&'a T> {
    if let Some(exact) = candidates.iter().find(|c| c.id() == query) {
        return Some(*exact);
    }
    let lc_query = query.to_lowercase();
    if let Some(named) = candidates.iter().find(|c| c.name().to_lowercase() == lc_query) {
        return Some(*named);
    }
    candidates
        .iter()
        .find(|c| c.name().to_lowercase().contains(&lc_query))
        .copied()
}

/// Find an `Item` with name matching `pattern` in the given `SearchScope` and return its id.
pub fn find_item_match(world: &GrueWorld, pattern: &str, scope: &SearchScope) -> Result<Id, SearchError> {
    let ids = match scope {
        SearchScope::RoomItems(room_id) => {
            &world
                .rooms()
                .get(room_id)
                .ok_or_else(|| SearchError::InvalidRoomId(room_id.clone()))?
                .items
        },
        SearchScope::Inventory => &world.player().inventory,
    };
    let candidates: Vec<_> = ids.iter().filter_map(|id| world.items().get(id)).collect();

    resolve_entity_name(pattern, &candidates)
        .map(|item| item.id.clone())
        .ok_or_else(|| SearchError::NoMatchingName(pattern.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, ItemHolder, Location, Room};

    fn insert_room(world: &mut GrueWorld, id: &str) {
        world.rooms.insert(Room {
            id: id.into(),
            name: format!("Room {id}"),
            description: String::new(),
            exits: Vec::new(),
            items: Vec::new(),
            characters: Vec::new(),
            first_visit: true,
        });
    }

    fn insert_item(world: &mut GrueWorld, id: &str, name: &str, room_id: &str) {
        world.items.insert(Item {
            id: id.into(),
            name: name.into(),
            location: Location::Room(room_id.into()),
            portable: true,
            visible: true,
            ..Item::default()
        });
        world.rooms.get_mut(room_id).unwrap().add_item(id.into());
    }

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.into(),
            name: name.into(),
            ..Item::default()
        }
    }

    #[test]
    fn exact_id_beats_substring_match() {
        let old_torch = item("old_torch", "Old Torch");
        let torch = item("torch", "Stick");
        let found = resolve_entity_name("torch", &[&old_torch, &torch]).unwrap();
        assert_eq!(found.id, "torch");
    }

    #[test]
    fn exact_name_beats_earlier_substring_match() {
        let lantern = item("lantern", "Key Lantern");
        let key = item("k1", "Key");
        let found = resolve_entity_name("KEY", &[&lantern, &key]).unwrap();
        assert_eq!(found.id, "k1");
    }

    #[test]
    fn substring_ties_go_to_first_candidate() {
        let rusty = item("rusty_sword", "Rusty Sword");
        let rusted = item("lever", "Rusted Lever");
        let found = resolve_entity_name("rust", &[&rusty, &rusted]).unwrap();
        assert_eq!(found.id, "rusty_sword");
        assert!(resolve_entity_name("lamp", &[&rusty, &rusted]).is_none());
    }

    #[test]
    fn find_item_match_only_searches_its_scope() {
        let mut world = GrueWorld::new_empty();
        insert_room(&mut world, "hall");
        insert_room(&mut world, "cell");
        insert_item(&mut world, "torch", "Wall Torch", "hall");
        insert_item(&mut world, "chain", "Broken Chain", "cell");

        let scope = SearchScope::RoomItems("hall".into());
        assert_eq!(find_item_match(&world, "wall torch", &scope).unwrap(), "torch");
        assert_eq!(
            find_item_match(&world, "chain", &scope).unwrap_err(),
            SearchError::NoMatchingName("chain".into())
        );
        assert_eq!(
            find_item_match(&world, "torch", &SearchScope::Inventory).unwrap_err(),
            SearchError::NoMatchingName("torch".into())
        );
    }

    #[test]
    fn find_item_match_errors_when_room_missing() {
        let world = GrueWorld::new_empty();
        let err = find_item_match(&world, "coin", &SearchScope::RoomItems("attic".into())).unwrap_err();
        assert_eq!(err, SearchError::InvalidRoomId("attic".into()));
    }
}
