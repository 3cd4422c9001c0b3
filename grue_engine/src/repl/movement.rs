//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::command::canonical_direction;
use crate::{GrueWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Move the player through an exit of the current room.
///
/// The exit key is matched exactly first, then by its expanded shorthand (`n` -> `north`).
/// A successful move records a `TransitionMessage`; showing the new room is up to the caller.
pub fn move_to_handler(world: &mut GrueWorld, view: &mut View, input_dir: &str) -> Result<()> {
    let (direction, destination) = {
        let current_room = world.player_room_ref()?;
        let exit = current_room
            .exit(input_dir)
            .or_else(|| canonical_direction(input_dir).and_then(|dir| current_room.exit(dir)));
        match exit {
            Some(exit) => (exit.direction.clone(), exit.to.clone()),
            None => {
                view.push(ViewItem::ActionFailure(format!("You can't go {input_dir} from here.")));
                info!("player tried to go '{input_dir}' from '{}'", current_room.id);
                return Ok(());
            },
        }
    };

    let first_visit = world.relocate_player(&destination)?;
    let new_room = world.player_room_ref()?;
    info!(
        "player moved {direction} to {} ({}){}",
        new_room.name,
        new_room.id,
        if first_visit { ", first visit" } else { "" }
    );
    view.push(ViewItem::TransitionMessage(format!("You go {direction} to {}.", new_room.name)));
    Ok(())
}
