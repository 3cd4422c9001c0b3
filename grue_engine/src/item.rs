//! Item types and related helpers.
//!
//! Items are the things a player can pick up, carry, drop and examine.
//! Non-portable items are fixtures of the room they sit in.

use crate::{Id, Location, WorldObject};

use grue_data::PropertyValue;
use std::collections::BTreeMap;

/// Anything in a `GrueWorld` that can be inspected or carried apart from characters.
///
/// `actions` and `properties` are descriptive metadata from the content pack
/// (verbs the author had in mind, weight, what a key opens...). The interpreter
/// does not consult them when deciding what a command does.
#[derive(Debug, Clone, Default)]
pub struct Item {
    /// The stable id of this item.
    pub id: Id,
    /// The display name of the item.
    pub name: String,
    /// Text shown by the examine command.
    pub description: String,
    /// The current `Location` of the item.
    pub location: Location,
    /// Whether the item may enter the player's inventory.
    pub portable: bool,
    /// Whether the item is listed in room views.
    pub visible: bool,
    pub actions: Vec<String>,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl WorldObject for Item {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl Item {
    /// Set location to a `Room` by id.
    pub fn set_location_room(&mut self, room_id: Id) {
        self.location = Location::Room(room_id);
    }
    /// Set location to player inventory.
    pub fn set_location_inventory(&mut self) {
        self.location = Location::Inventory;
    }
    /// Returns true if the item is a fixture that can never be carried.
    pub fn is_fixture(&self) -> bool {
        !self.portable
    }
    /// Look up a property by key.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_setters_update_location() {
        let mut item = Item {
            id: "torch".into(),
            name: "Wall Torch".into(),
            portable: true,
            ..Item::default()
        };
        assert!(item.location.is_nowhere());
        item.set_location_room("dungeon_hall".into());
        assert_eq!(item.location, Location::Room("dungeon_hall".into()));
        item.set_location_inventory();
        assert!(item.location.is_inventory());
        assert!(!item.is_fixture());
    }

    #[test]
    fn properties_are_readable() {
        let mut item = Item::default();
        item.properties.insert("weight".into(), PropertyValue::Number(3));
        assert_eq!(item.property("weight"), Some(&PropertyValue::Number(3)));
        assert!(item.property("lit").is_none());
    }
}
