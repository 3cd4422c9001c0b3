//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use crate::loader::help::builtin_help;
use crate::{GrueWorld, View, ViewItem, repl::ReplControl};

use anyhow::Result;
use log::info;

/// Quit the game. The session stays stopped for good.
pub fn quit_handler(world: &mut GrueWorld, view: &mut View) -> ReplControl {
    world.stop();
    info!(
        "player quit '{}' after {} moves",
        world.game().id,
        world.player().stats.moves
    );
    info!("ending inventory:");
    world
        .player()
        .inventory
        .iter()
        .filter_map(|id| world.items().get(id))
        .for_each(|item| info!("- {} ({})", item.name, item.id));

    view.push(ViewItem::EngineMessage("Thanks for playing!".to_string()));
    ReplControl::Quit
}

/// Show available commands.
///
/// # Errors
/// - if the built-in help data cannot be parsed
pub fn help_handler(view: &mut View) -> Result<()> {
    let help = builtin_help()?;
    view.push(ViewItem::Help {
        intro: help.intro,
        commands: help.commands,
        footer: help.footer,
    });
    Ok(())
}
