//! REPL and command handling utilities.
//!
//! A session runs in a read-eval-print loop. This module dispatches parsed
//! commands to the handlers in its submodules, which manipulate the
//! [`GrueWorld`] and describe the outcome in a [`View`].
//!
//! [`process_command`] is the plain-text entry point: one line in, one
//! response string out. [`run_session`] drives the same dispatcher from the
//! console.

pub mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod npc;
pub mod system;

pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use npc::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::style::GameStyle;
use crate::{Character, GrueWorld, Id, Item, View, ViewItem, WorldObject};

use anyhow::{Context, Result};
use colored::Colorize;
use log::{error, info};
use variantly::Variantly;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Process one line of player input and return the response text.
///
/// Every call on a running session counts as a move, recognised or not.
/// A stopped session answers "The game is over." and changes nothing.
pub fn process_command(world: &mut GrueWorld, input: &str) -> String {
    let mut view = View::new();
    dispatch_command(world, &mut view, input);
    view.take_text()
}

/// Parse `input`, run the matching handler and collect its output in `view`.
///
/// Handler failures are logged and reported to the player as an error line.
pub fn dispatch_command(world: &mut GrueWorld, view: &mut View, input: &str) -> ReplControl {
    #[allow(clippy::enum_glob_use)]
    use Command::*;

    if !world.is_running() {
        view.push(ViewItem::EngineMessage("The game is over.".to_string()));
        return ReplControl::Quit;
    }
    world.count_move();

    let command = parse_command(input.trim());
    let outcome = match &command {
        Quit => Ok(quit_handler(world, view)),
        Look => look_handler(world, view).map(|()| ReplControl::Continue),
        Inventory => {
            inv_handler(world, view);
            Ok(ReplControl::Continue)
        },
        Help => help_handler(view).map(|()| ReplControl::Continue),
        MoveTo(direction) => move_to_handler(world, view, direction).map(|()| ReplControl::Continue),
        Take(thing) => take_handler(world, view, thing).map(|()| ReplControl::Continue),
        Drop(thing) => drop_handler(world, view, thing).map(|()| ReplControl::Continue),
        Examine(thing) => look_at_handler(world, view, thing).map(|()| ReplControl::Continue),
        TalkTo(name) => talk_to_handler(world, view, name).map(|()| ReplControl::Continue),
        Ask { character, topic } => ask_handler(world, view, character, topic).map(|()| ReplControl::Continue),
        Incomplete(question) => {
            view.push(ViewItem::EngineMessage((*question).to_string()));
            Ok(ReplControl::Continue)
        },
        Unknown => {
            view.push(ViewItem::Error(
                "I don't understand that command. Type 'help' for a list of commands.".to_string(),
            ));
            Ok(ReplControl::Continue)
        },
    };

    outcome.unwrap_or_else(|err| {
        error!("command {command:?} failed: {err:#}");
        view.push(ViewItem::Error(format!("Something went wrong: {err}")));
        ReplControl::Continue
    })
}

/// Plain-text view of the room the player is standing in.
pub fn render_location_view(world: &GrueWorld) -> String {
    let mut view = View::new();
    match push_location_view(world, &mut view) {
        Ok(()) => view.take_text(),
        Err(err) => {
            error!("rendering location view failed: {err:#}");
            format!("Something went wrong: {err}")
        },
    }
}

/// Plain-text view of the player's inventory.
pub fn render_inventory_view(world: &GrueWorld) -> String {
    let mut view = View::new();
    inv_handler(world, &mut view);
    view.take_text()
}

/// Run a console session until the player quits or input runs out.
///
/// Prints the title banner and intro once, then shows the current room before
/// every prompt, unless the last response already was the room view.
///
/// # Errors
/// - if the player's room cannot be resolved, or reading input fails
pub fn run_session(world: &mut GrueWorld, input: &mut InputManager) -> Result<()> {
    let mut view = View::new();
    print_banner(world);

    let mut show_location = true;
    while world.is_running() {
        if show_location {
            push_location_view(world, &mut view)?;
            view.flush();
        }
        let prompt = "\n> ".prompt_style().to_string();
        let line = match input.read_line(&prompt).context("reading player input")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                info!("input closed; leaving '{}'", world.game().id);
                break;
            },
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };
        if line.trim().is_empty() {
            show_location = false;
            continue;
        }

        dispatch_command(world, &mut view, &line);
        show_location = !view.shows_location();
        view.flush();
    }
    Ok(())
}

fn print_banner(world: &GrueWorld) {
    let game = world.game();
    println!("\n{}", game.title.bold());
    println!("{}", "=".repeat(game.title.chars().count()));
    println!("{}\n", game.intro.trim());
}

/// Encapsulates references to different types of `WorldObjects` to allow search across different types.
#[derive(Debug, Variantly, Clone, Copy)]
pub enum WorldEntity<'a> {
    Item(&'a Item),
    Character(&'a Character),
}
impl WorldEntity<'_> {
    /// Get the name of the entity
    pub fn name(&self) -> &str {
        match self {
            WorldEntity::Item(item) => item.name(),
            WorldEntity::Character(character) => character.name(),
        }
    }
    /// Get the id of the entity
    pub fn id(&self) -> &str {
        match self {
            WorldEntity::Item(item) => item.id(),
            WorldEntity::Character(character) => character.id(),
        }
    }
    pub fn description(&self) -> &str {
        match self {
            WorldEntity::Item(item) => item.description(),
            WorldEntity::Character(character) => character.description(),
        }
    }
}

/// Searches the listed items, then the listed characters, for the first whose
/// name contains `search_term`, ignoring case.
pub fn find_world_object<'a>(
    item_ids: impl IntoIterator<Item = &'a Id>,
    character_ids: impl IntoIterator<Item = &'a Id>,
    world: &'a GrueWorld,
    search_term: &str,
) -> Option<WorldEntity<'a>> {
    let lc_term = search_term.to_lowercase();
    let items = item_ids
        .into_iter()
        .filter_map(|id| world.items().get(id))
        .map(WorldEntity::Item);
    let characters = character_ids
        .into_iter()
        .filter_map(|id| world.characters().get(id))
        .map(WorldEntity::Character);
    items
        .chain(characters)
        .find(|entity| entity.name().to_lowercase().contains(&lc_term))
}
