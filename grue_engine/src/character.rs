//! Character Module

use grue_data::PropertyValue;
use log::warn;
use std::collections::BTreeMap;

use crate::{Id, WorldObject};

/// Dialogue key answered by `talk to`.
pub const GREETING: &str = "greeting";

/// A non-player character. Characters stay in the room the content pack puts them in.
#[derive(Debug, Clone, Default)]
pub struct Character {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub friendly: bool,
    /// Lines of speech keyed by topic ("greeting", "help", "quest", ...).
    pub dialogue: BTreeMap<String, String>,
    /// Carried for content packs; no command moves items to or from it.
    pub inventory: Vec<Id>,
    pub properties: BTreeMap<String, PropertyValue>,
}
impl Character {
    /// The line spoken when the player talks to this character.
    pub fn greeting(&self) -> &str {
        self.dialogue_line(GREETING).unwrap_or_else(|| {
            warn!("character '{}' has no greeting dialogue", self.id);
            "..."
        })
    }

    /// Dialogue for a topic, matched case-insensitively.
    pub fn dialogue_line(&self, topic: &str) -> Option<&str> {
        let topic = topic.trim().to_lowercase();
        self.dialogue
            .iter()
            .find(|(key, _)| key.to_lowercase() == topic)
            .map(|(_, line)| line.as_str())
    }

    /// Overwrite a property, but only one the content pack already declared.
    /// Returns true if the property existed.
    pub fn update_property(&mut self, key: &str, value: PropertyValue) -> bool {
        match self.properties.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }
}
impl WorldObject for Character {
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
