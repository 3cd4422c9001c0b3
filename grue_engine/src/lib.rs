#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const GRUE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stable string identifier for rooms, items and characters.
pub use grue_data::Id;

// Core modules
pub mod character;
pub mod command;
pub mod data_paths;
pub mod entity_search;
pub mod helpers;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use character::Character;
pub use item::Item;
pub use loader::{PackRegistry, build_world};
pub use player::Player;
pub use repl::{process_command, run_session};
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::{GrueWorld, ItemHolder, Location, SessionState, WorldObject};
