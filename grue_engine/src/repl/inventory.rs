//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use crate::entity_search::{SearchError, SearchScope, find_item_match};
use crate::{GrueWorld, View, ViewItem};

use anyhow::{Context, Result};
use log::info;

/// Removes an item from the current room and adds it to the inventory.
pub fn take_handler(world: &mut GrueWorld, view: &mut View, thing: &str) -> Result<()> {
    let room_id = world.player().location.clone();
    let item_id = match find_item_match(world, thing, &SearchScope::RoomItems(room_id)) {
        Ok(id) => id,
        Err(SearchError::NoMatchingName(_)) => {
            view.push(ViewItem::ActionFailure(format!("You don't see a {thing} here.")));
            return Ok(());
        },
        Err(err) => return Err(err).context("searching room for item to take"),
    };

    let item = world
        .items()
        .get(&item_id)
        .with_context(|| format!("looking up item {item_id}"))?;
    let item_name = item.name.clone();
    if item.is_fixture() {
        info!("player attempted to take fixed item {item_name} ({item_id})");
        view.push(ViewItem::ActionFailure(format!("You can't take the {item_name}.")));
        return Ok(());
    }
    if world.player().inventory_full() {
        info!("player inventory full; {item_name} ({item_id}) left in place");
        view.push(ViewItem::ActionFailure("You can't carry any more items.".to_string()));
        return Ok(());
    }

    world.move_item_to_inventory(&item_id)?;
    info!("player took the {item_name} ({item_id})");
    view.push(ViewItem::ActionSuccess(format!("You take the {item_name}.")));
    Ok(())
}

/// Drops an item from the inventory into the current room.
pub fn drop_handler(world: &mut GrueWorld, view: &mut View, thing: &str) -> Result<()> {
    let item_id = match find_item_match(world, thing, &SearchScope::Inventory) {
        Ok(id) => id,
        Err(SearchError::NoMatchingName(_)) => {
            view.push(ViewItem::ActionFailure(format!("You don't have a {thing}.")));
            return Ok(());
        },
        Err(err) => return Err(err).context("searching inventory for item to drop"),
    };

    world.move_item_to_room(&item_id)?;
    let item_name = world
        .items()
        .get(&item_id)
        .map(|item| item.name.clone())
        .with_context(|| format!("looking up item {item_id}"))?;
    info!("player dropped the {item_name} ({item_id}) in '{}'", world.player().location);
    view.push(ViewItem::ActionSuccess(format!("You drop the {item_name}.")));
    Ok(())
}

/// Show the contents of player inventory.
pub fn inv_handler(world: &GrueWorld, view: &mut View) {
    view.push(ViewItem::Inventory(inventory_names(world)));
}

/// Display names of carried items, in inventory order.
pub fn inventory_names(world: &GrueWorld) -> Vec<String> {
    world
        .player()
        .inventory
        .iter()
        .filter_map(|id| world.items().get(id))
        .map(|item| item.name.clone())
        .collect()
}
