//! `repl::npc` module
//!
//! Contains repl loop handlers for conversations with characters

use crate::character::GREETING;
use crate::{GrueWorld, Id, View, ViewItem, repl::find_world_object};

use anyhow::{Context, Result};
use grue_data::PropertyValue;
use log::info;
use std::iter;

/// Dialogue topic that switches on a character's `quest_active` property.
const QUEST_TOPIC: &str = "quest";
const QUEST_FLAG: &str = "quest_active";

/// Selects a character in the player's room by first partial name match.
fn select_character(world: &GrueWorld, query: &str) -> Result<Option<Id>> {
    let room = world.player_room_ref()?;
    Ok(find_world_object(iter::empty::<&Id>(), &room.characters, world, query)
        .and_then(|entity| entity.character())
        .map(|character| character.id.clone()))
}

/// Handles TalkTo(character) commands
pub fn talk_to_handler(world: &mut GrueWorld, view: &mut View, name: &str) -> Result<()> {
    ask_handler(world, view, name, GREETING)
}

/// Handles `ask <character> about <topic>`. Talking to someone is asking about the greeting.
pub fn ask_handler(world: &mut GrueWorld, view: &mut View, name: &str, topic: &str) -> Result<()> {
    let Some(character_id) = select_character(world, name)? else {
        view.push(ViewItem::ActionFailure(format!("There's no {name} here to talk to.")));
        return Ok(());
    };
    let character = world
        .characters()
        .get(&character_id)
        .with_context(|| format!("looking up character {character_id}"))?;

    let line = if topic == GREETING {
        Some(character.greeting())
    } else {
        character.dialogue_line(topic)
    };
    let Some(line) = line else {
        view.push(ViewItem::ActionFailure(format!(
            "{} has nothing to say about {}.",
            character.name,
            topic.trim()
        )));
        return Ok(());
    };
    info!("player talked to \"{}\" ({character_id}) about '{}'", character.name, topic.trim());
    view.push(ViewItem::NpcSpeech {
        speaker: character.name.clone(),
        quote: line.to_string(),
    });

    if topic.trim().eq_ignore_ascii_case(QUEST_TOPIC)
        && let Some(character) = world.character_mut(&character_id)
        && character.update_property(QUEST_FLAG, PropertyValue::Flag(true))
    {
        info!("quest activated for character '{character_id}'");
    }
    Ok(())
}
