//! Loader utilities for building a `GrueWorld` from a content pack.
//!
//! A content pack is a TOML document deserialized into [`PackDef`]. It is
//! validated as a whole, then turned into freshly owned registries, so every
//! call to [`build_world`] yields an independent session.

pub mod help;
pub mod registry;

pub use registry::{PackEntry, PackRegistry};

use crate::room::Exit;
use crate::world::{GameInfo, Registry};
use crate::{Character, GrueWorld, Id, Item, Location, Player, Room};

use anyhow::{Context, Result, bail};
use grue_data::{CharacterDef, ItemDef, PackDef, RoomDef};
use log::{info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse a content pack from TOML source. `origin` names the source in error messages.
/// # Errors
/// - on TOML syntax errors or missing required fields
pub fn parse_pack(src: &str, origin: &str) -> Result<PackDef> {
    toml::from_str(src).with_context(|| format!("parsing content pack from '{origin}'"))
}

/// Read and parse a content pack file.
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_pack_file(path: &Path) -> Result<PackDef> {
    let src = fs::read_to_string(path).with_context(|| format!("reading content pack '{}'", path.display()))?;
    parse_pack(&src, &path.display().to_string())
}

/// Build a ready-to-play `GrueWorld` from a pack definition.
///
/// The player starts in the pack's start room, which counts as visited.
/// # Errors
/// - if the pack fails validation (all problems are reported together)
pub fn build_world(pack: PackDef) -> Result<GrueWorld> {
    validate(&pack)?;
    for item_id in grue_data::unplaced_items(&pack) {
        warn!("item '{item_id}' in pack '{}' is not placed anywhere; it stays out of play", pack.game.id);
    }

    let placements = item_placements(&pack);
    let PackDef {
        game,
        player,
        rooms,
        items,
        characters,
    } = pack;

    let rooms: Registry<Room> = rooms.into_iter().map(build_room).collect();
    let items: Registry<Item> = items
        .into_iter()
        .map(|def| {
            let location = placements.get(&def.id).cloned().unwrap_or_default();
            build_item(def, location)
        })
        .collect();
    let characters: Registry<Character> = characters.into_iter().map(build_character).collect();
    info!("{} rooms added to GrueWorld", rooms.len());
    info!("{} items added to GrueWorld", items.len());
    info!("{} characters added to GrueWorld", characters.len());

    let start_room = player.start_room.clone();
    let player = Player {
        location: player.start_room,
        inventory: player.inventory,
        max_inventory: player.max_inventory,
        stats: player.stats,
    };
    let game = GameInfo {
        id: game.id,
        title: game.title,
        description: game.description,
        intro: game.intro,
        author: game.author,
        version: game.version,
    };

    let mut world = GrueWorld::from_parts(game, rooms, items, characters, player);
    world
        .relocate_player(&start_room)
        .with_context(|| format!("placing player in start room '{start_room}'"))?;
    info!("player placed in start room '{start_room}' of pack '{}'", world.game().id);
    Ok(world)
}

/// Validate the pack and return a single aggregated error.
fn validate(pack: &PackDef) -> Result<()> {
    let errors = grue_data::validate_pack(pack);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("content pack '{}' failed validation:\n{details}", pack.game.id);
}

/// Where each placed item starts, keyed by item id.
fn item_placements(pack: &PackDef) -> HashMap<Id, Location> {
    let mut placements = HashMap::new();
    for room in &pack.rooms {
        for item_id in &room.items {
            placements.insert(item_id.clone(), Location::Room(room.id.clone()));
        }
    }
    for item_id in &pack.player.inventory {
        placements.insert(item_id.clone(), Location::Inventory);
    }
    placements
}

fn build_room(def: RoomDef) -> Room {
    Room {
        id: def.id,
        name: def.name,
        description: def.desc,
        exits: def.exits.into_iter().map(|exit| Exit::new(exit.direction, exit.to)).collect(),
        items: def.items,
        characters: def.characters,
        first_visit: def.first_visit,
    }
}

fn build_item(def: ItemDef, location: Location) -> Item {
    Item {
        id: def.id,
        name: def.name,
        description: def.desc,
        location,
        portable: def.portable,
        visible: def.visible,
        actions: def.actions,
        properties: def.properties,
    }
}

fn build_character(def: CharacterDef) -> Character {
    Character {
        id: def.id,
        name: def.name,
        description: def.desc,
        friendly: def.friendly,
        dialogue: def.dialogue,
        inventory: def.inventory,
        properties: def.properties,
    }
}
