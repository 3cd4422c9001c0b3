use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier used across `PackDef` references.
pub type Id = String;

/// Top-level content pack: everything needed to start one session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackDef {
    pub game: GameDef,
    pub player: PlayerDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub characters: Vec<CharacterDef>,
}

/// Pack-level metadata shown by the launcher and at session start.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub id: Id,
    pub title: String,
    /// One-line blurb for the pack menu.
    #[serde(default)]
    pub description: String,
    pub intro: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub version: String,
}

/// Starting state of the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub start_room: Id,
    #[serde(default)]
    pub inventory: Vec<Id>,
    #[serde(default = "default_max_inventory")]
    pub max_inventory: usize,
    #[serde(default)]
    pub stats: StatsDef,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            start_room: String::new(),
            inventory: Vec::new(),
            max_inventory: default_max_inventory(),
            stats: StatsDef::default(),
        }
    }
}

fn default_max_inventory() -> usize {
    10
}

/// Player statistics. Health values are carried but never consulted by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDef {
    #[serde(default)]
    pub moves: u32,
    pub health: Option<u32>,
    pub max_health: Option<u32>,
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    #[serde(default)]
    pub items: Vec<Id>,
    #[serde(default)]
    pub characters: Vec<Id>,
    #[serde(default = "default_first_visit")]
    pub first_visit: bool,
}

fn default_first_visit() -> bool {
    true
}

/// One-way passage from a room; listed in the order exits are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: Id,
}

/// Loosely typed property value attached to items and characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

/// Item definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default = "default_true")]
    pub portable: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

fn default_true() -> bool {
    true
}

/// Character definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default = "default_true")]
    pub friendly: bool,
    #[serde(default)]
    pub dialogue: BTreeMap<String, String>,
    #[serde(default)]
    pub inventory: Vec<Id>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_def_defaults_fill_optional_fields() {
        let src = r#"
            [game]
            id = "tiny"
            title = "Tiny"
            intro = "Hello."

            [player]
            start_room = "start"

            [[rooms]]
            id = "start"
            name = "Start"
            desc = "A room."

            [[items]]
            id = "pebble"
            name = "Pebble"
            desc = "Smooth."
            properties = { weight = 1, lit = false, opens = "door" }
        "#;
        let pack: PackDef = toml::from_str(src).unwrap();
        assert_eq!(pack.player.max_inventory, 10);
        assert_eq!(pack.player.stats.moves, 0);
        assert!(pack.rooms[0].first_visit);
        assert!(pack.rooms[0].exits.is_empty());
        let pebble = &pack.items[0];
        assert!(pebble.portable && pebble.visible);
        assert_eq!(pebble.properties.get("weight"), Some(&PropertyValue::Number(1)));
        assert_eq!(pebble.properties.get("lit"), Some(&PropertyValue::Flag(false)));
        assert_eq!(pebble.properties.get("opens"), Some(&PropertyValue::Text("door".into())));
    }

    #[test]
    fn exits_keep_definition_order() {
        let src = r#"
            id = "hall"
            name = "Hall"
            desc = "Long."
            exits = [
                { direction = "west", to = "a" },
                { direction = "east", to = "b" },
                { direction = "north", to = "c" },
            ]
        "#;
        let room: RoomDef = toml::from_str(src).unwrap();
        let dirs: Vec<_> = room.exits.iter().map(|e| e.direction.as_str()).collect();
        assert_eq!(dirs, ["west", "east", "north"]);
    }
}
