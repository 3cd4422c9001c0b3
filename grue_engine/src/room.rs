//! Room definitions.
//!
//! Any location a player can stand in is represented as a "Room", whether it's
//! a prison cell or an overgrown garden. Rooms own the ordered lists of items
//! and characters present in them.

use crate::{Id, ItemHolder, WorldObject};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A one-way exit from one room to another.
pub struct Exit {
    pub direction: String,
    pub to: Id,
}
impl Exit {
    /// Create an exit leading `direction` to the room with the given id.
    pub fn new(direction: impl Into<String>, to: impl Into<Id>) -> Self {
        Self {
            direction: direction.into(),
            to: to.into(),
        }
    }
}

/// A location in the world.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: Id,
    pub name: String,
    pub description: String,
    /// Exits in the order the content pack lists them.
    pub exits: Vec<Exit>,
    pub items: Vec<Id>,
    pub characters: Vec<Id>,
    /// True until the player first enters. Never reset.
    pub first_visit: bool,
}
impl Room {
    /// Find the exit leading in `direction`, if any.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.direction == direction)
    }

    pub fn exit_directions(&self) -> impl Iterator<Item = &str> {
        self.exits.iter().map(|exit| exit.direction.as_str())
    }
}
impl WorldObject for Room {
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
impl ItemHolder for Room {
    fn add_item(&mut self, item_id: Id) {
        if !self.contains_item(&item_id) {
            self.items.push(item_id);
        }
    }

    fn remove_item(&mut self, item_id: &str) {
        self.items.retain(|id| id != item_id);
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|id| id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hallway() -> Room {
        Room {
            id: "hallway".into(),
            name: "Main Corridor".into(),
            description: "A long corridor.".into(),
            exits: vec![Exit::new("south", "start"), Exit::new("east", "garden")],
            items: vec!["old_key".into()],
            characters: Vec::new(),
            first_visit: true,
        }
    }

    #[test]
    fn exit_lookup_is_exact() {
        let room = hallway();
        assert_eq!(room.exit("east").map(|e| e.to.as_str()), Some("garden"));
        assert!(room.exit("e").is_none());
        assert!(room.exit("East").is_none());
        assert_eq!(room.exit_directions().collect::<Vec<_>>(), ["south", "east"]);
    }

    #[test]
    fn add_item_appends_without_duplicating() {
        let mut room = hallway();
        room.add_item("lamp".into());
        room.add_item("old_key".into());
        assert_eq!(room.items, ["old_key", "lamp"]);
        room.remove_item("old_key");
        assert_eq!(room.items, ["lamp"]);
        assert!(!room.contains_item("old_key"));
    }
}
