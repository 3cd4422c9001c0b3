//! Observation and examination command handlers.
//!
//! These handlers let the player examine the current room, items and
//! characters without modifying world state.
//!
//! # Scope
//!
//! `examine` looks through what the player can reach, in order: carried items,
//! then items in the room, then characters in the room. The first display name
//! containing the search text (ignoring case) wins.

use crate::{GrueWorld, View, ViewItem, WorldObject, repl::find_world_object};

use anyhow::Result;
use log::info;

/// Shows description of surroundings.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(world: &GrueWorld, view: &mut View) -> Result<()> {
    push_location_view(world, view)?;
    info!("player looked around '{}'", world.player().location);
    Ok(())
}

/// Push the full location view of the player's room: name, description, exits,
/// visible items and characters present.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn push_location_view(world: &GrueWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    view.push(ViewItem::RoomDescription {
        name: room.name().to_string(),
        description: room.description().to_string(),
    });
    view.push(ViewItem::RoomExits(
        room.exit_directions().map(str::to_string).collect(),
    ));
    view.push(ViewItem::RoomItems(
        room.items
            .iter()
            .filter_map(|id| world.items().get(id))
            .filter(|item| item.visible)
            .map(|item| item.name.clone())
            .collect(),
    ));
    view.push(ViewItem::RoomNpcs(
        room.characters
            .iter()
            .filter_map(|id| world.characters().get(id))
            .map(|character| character.name.clone())
            .collect(),
    ));
    Ok(())
}

/// Examine an item or character the player can reach.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_at_handler(world: &GrueWorld, view: &mut View, thing: &str) -> Result<()> {
    let room = world.player_room_ref()?;
    let reachable_items = world.player().inventory.iter().chain(room.items.iter());
    if let Some(entity) = find_world_object(reachable_items, &room.characters, world, thing) {
        info!("player examined {} ({})", entity.name(), entity.id());
        view.push(ViewItem::EntityDescription(entity.description().to_string()));
    } else {
        view.push(ViewItem::ActionFailure(format!("You don't see any {thing} here.")));
    }
    Ok(())
}
