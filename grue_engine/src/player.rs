//! Player -- the single adventurer of a session
use crate::{Id, ItemHolder};

use grue_data::StatsDef;

/// Counters kept for the player. Health is carried for content packs but never changes.
pub type Stats = StatsDef;

#[derive(Debug, Clone)]
pub struct Player {
    /// Id of the room the player is standing in.
    pub location: Id,
    /// Held item ids, oldest first.
    pub inventory: Vec<Id>,
    pub max_inventory: usize,
    pub stats: Stats,
}
impl Default for Player {
    fn default() -> Player {
        Self {
            location: Id::default(),
            inventory: Vec::new(),
            max_inventory: 10,
            stats: Stats::default(),
        }
    }
}
impl Player {
    /// True when no further item can be taken.
    pub fn inventory_full(&self) -> bool {
        self.inventory.len() >= self.max_inventory
    }
}
impl ItemHolder for Player {
    fn add_item(&mut self, item_id: Id) {
        if !self.contains_item(&item_id) {
            self.inventory.push(item_id);
        }
    }

    fn remove_item(&mut self, item_id: &str) {
        self.inventory.retain(|id| id != item_id);
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_full_respects_capacity() {
        let mut player = Player {
            max_inventory: 2,
            ..Player::default()
        };
        assert!(!player.inventory_full());
        player.add_item("a".into());
        player.add_item("b".into());
        assert!(player.inventory_full());
        player.remove_item("a");
        assert!(!player.inventory_full());
        assert_eq!(player.inventory, ["b"]);
    }
}
