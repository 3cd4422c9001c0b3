//! Data structures representing the game world.
//!
//! This module defines [`GrueWorld`], the single owner of every room, item and
//! character of a session, together with the player. Handlers never hold on to
//! raw references into the registries; all state changes go through the
//! methods on [`GrueWorld`].

use crate::{Character, GRUE_VERSION, Id, Item, Player, Room};

use anyhow::{Context, Result, anyhow, bail};
use log::info;
use std::collections::HashMap;
use variantly::Variantly;

/// Kinds of places where an item may be located.
/// Items a content pack never places are `Nowhere` and stay out of play.
#[derive(Debug, Default, Clone, Variantly, PartialEq, Eq)]
pub enum Location {
    Inventory,
    #[default]
    Nowhere,
    Room(Id),
}

/// Methods common to any object in the world.
pub trait WorldObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

/// Anything that keeps an ordered list of item ids.
pub trait ItemHolder {
    /// Append an item to the holder's contents.
    fn add_item(&mut self, item_id: Id);
    /// Remove an item from the holder's contents.
    fn remove_item(&mut self, item_id: &str);
    /// Return `true` when the holder already contains the given item.
    fn contains_item(&self, item_id: &str) -> bool;
}

/// Insertion-ordered collection of world objects keyed by id.
///
/// Name resolution breaks ties by registry order, so iteration always follows
/// the order in which the content pack defined the entries.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: HashMap<Id, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: WorldObject> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Returns false (and keeps the existing entry) if the id is taken.
    pub fn insert(&mut self, entry: T) -> bool {
        if self.index.contains_key(entry.id()) {
            return false;
        }
        self.index.insert(entry.id().to_string(), self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&idx| &self.entries[idx])
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        let idx = *self.index.get(id)?;
        self.entries.get_mut(idx)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: WorldObject> FromIterator<T> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for entry in iter {
            registry.insert(entry);
        }
        registry
    }
}

/// Display-only metadata of the loaded content pack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameInfo {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub intro: String,
    pub author: String,
    pub version: String,
}

/// A session runs until the player quits; a stopped session never resumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Variantly)]
pub enum SessionState {
    #[default]
    Running,
    Stopped,
}

/// Complete state of one play session.
///
/// Built from a freshly parsed content pack, so two sessions never share
/// registries.
#[derive(Debug, Clone, Default)]
pub struct GrueWorld {
    pub(crate) rooms: Registry<Room>,
    pub(crate) items: Registry<Item>,
    pub(crate) characters: Registry<Character>,
    pub(crate) player: Player,
    pub(crate) game: GameInfo,
    pub(crate) state: SessionState,
    pub version: String,
}

impl GrueWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> GrueWorld {
        let world = Self {
            version: GRUE_VERSION.to_string(),
            ..Self::default()
        };
        info!("new, empty 'GrueWorld' created");
        world
    }

    /// Assemble a world from already-built parts. The loader is the usual caller.
    pub fn from_parts(
        game: GameInfo,
        rooms: Registry<Room>,
        items: Registry<Item>,
        characters: Registry<Character>,
        player: Player,
    ) -> GrueWorld {
        Self {
            rooms,
            items,
            characters,
            player,
            game,
            state: SessionState::Running,
            version: GRUE_VERSION.to_string(),
        }
    }

    pub fn rooms(&self) -> &Registry<Room> {
        &self.rooms
    }

    pub fn items(&self) -> &Registry<Item> {
        &self.items
    }

    pub fn characters(&self) -> &Registry<Character> {
        &self.characters
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn game(&self) -> &GameInfo {
        &self.game
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Process one line of player input and return the response text.
    pub fn process_command(&mut self, input: &str) -> String {
        crate::repl::process_command(self, input)
    }

    /// Plain-text view of the room the player is standing in.
    pub fn render_location_view(&self) -> String {
        crate::repl::render_location_view(self)
    }

    /// Plain-text view of the player's inventory.
    pub fn render_inventory_view(&self) -> String {
        crate::repl::render_inventory_view(self)
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| anyhow!("player's room ({}) not found in world", self.player.location))
    }

    /// Every container currently listing `item_id`. A healthy world returns at most one.
    pub fn holders_of(&self, item_id: &str) -> Vec<Location> {
        let mut holders: Vec<Location> = self
            .rooms
            .iter()
            .filter(|room| room.contains_item(item_id))
            .map(|room| Location::Room(room.id.clone()))
            .collect();
        if self.player.contains_item(item_id) {
            holders.push(Location::Inventory);
        }
        holders
    }

    /// Bump the move counter. Called once per dispatched command.
    pub(crate) fn count_move(&mut self) {
        self.player.stats.moves = self.player.stats.moves.saturating_add(1);
    }

    pub(crate) fn stop(&mut self) {
        self.state = SessionState::Stopped;
    }

    /// Move the player into `room_id`. Returns true if this was the room's first visit.
    /// # Errors
    /// - if the destination room does not exist
    pub(crate) fn relocate_player(&mut self, room_id: &str) -> Result<bool> {
        let room = self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| anyhow!("invalid move destination ({room_id})"))?;
        let first_visit = room.first_visit;
        room.first_visit = false;
        self.player.location = room_id.to_string();
        Ok(first_visit)
    }

    /// Transfer an item from the player's room into the inventory.
    /// # Errors
    /// - if the item is not in the player's room, or lookups fail
    pub(crate) fn move_item_to_inventory(&mut self, item_id: &str) -> Result<()> {
        let room_id = self.player.location.clone();
        let room = self
            .rooms
            .get_mut(&room_id)
            .with_context(|| format!("looking up room {room_id}"))?;
        if !room.contains_item(item_id) {
            bail!("item '{item_id}' is not in room '{room_id}'");
        }
        let item = self
            .items
            .get_mut(item_id)
            .with_context(|| format!("looking up item {item_id}"))?;
        room.remove_item(item_id);
        item.set_location_inventory();
        self.player.add_item(item_id.to_string());
        Ok(())
    }

    /// Transfer an item from the inventory into the player's room.
    /// # Errors
    /// - if the player does not hold the item, or lookups fail
    pub(crate) fn move_item_to_room(&mut self, item_id: &str) -> Result<()> {
        if !self.player.contains_item(item_id) {
            bail!("player is not holding item '{item_id}'");
        }
        let room_id = self.player.location.clone();
        let room = self
            .rooms
            .get_mut(&room_id)
            .with_context(|| format!("looking up room {room_id}"))?;
        let item = self
            .items
            .get_mut(item_id)
            .with_context(|| format!("looking up item {item_id}"))?;
        self.player.remove_item(item_id);
        item.set_location_room(room_id);
        room.add_item(item_id.to_string());
        Ok(())
    }

    pub(crate) fn character_mut(&mut self, character_id: &str) -> Option<&mut Character> {
        self.characters.get_mut(character_id)
    }
}
