#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Grue **
//! Launcher for Grue content packs

use grue_engine::data_paths::packs_dir;
use grue_engine::repl::input::{InputEvent, InputManager};
use grue_engine::style::GameStyle;
use grue_engine::{PackRegistry, run_session};

use anyhow::{Context, Result};
use colored::Colorize;
use log::{error, info};

/// What the player picked in the pack menu.
enum MenuChoice {
    Pack(usize),
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: discovering content packs...");
    let packs_dir = packs_dir();
    let registry = PackRegistry::discover(packs_dir.as_deref()).context("while building the pack registry")?;
    info!("{} content packs available", registry.len());

    let mut input = InputManager::new();
    loop {
        if registry.is_empty() {
            println!("No adventures are installed.");
            break;
        }
        let MenuChoice::Pack(index) = pack_menu(&registry, &mut input)? else {
            break;
        };
        let entry = &registry.entries()[index];
        info!("Starting pack '{}'", entry.id);
        match entry.load() {
            Ok(mut world) => {
                run_session(&mut world, &mut input)?;
                println!("\nGame over. Returning to main menu...");
            },
            Err(err) => {
                error!("failed to load pack '{}': {err:#}", entry.id);
                println!("{}", format!("Failed to load the selected game: {err:#}").error_style());
                println!("Please try another.");
            },
        }
    }
    println!("Thanks for playing! Goodbye.");
    Ok(())
}

/// Show the numbered pack menu and read choices until a valid one arrives.
fn pack_menu(registry: &PackRegistry, input: &mut InputManager) -> Result<MenuChoice> {
    println!("\n{}", "Grue - Text Adventure Engine".bold());
    println!("=========================");
    println!("Available Adventures:\n");
    for (number, entry) in registry.entries().iter().enumerate() {
        println!("{}. {}", number + 1, entry.title.room_style());
        println!("   {}\n", entry.description);
    }
    println!("0. Quit\n");

    loop {
        let line = match input
            .read_line("Select an adventure (number): ")
            .context("reading menu selection")?
        {
            InputEvent::Line(line) => line,
            InputEvent::Eof => return Ok(MenuChoice::Quit),
            InputEvent::Interrupted => continue,
        };
        match parse_selection(&line, registry.len()) {
            Ok(choice) => return Ok(choice),
            Err(msg) => println!("{msg}"),
        }
    }
}

/// Interpret a menu answer against `pack_count` numbered entries.
fn parse_selection(line: &str, pack_count: usize) -> Result<MenuChoice, &'static str> {
    let number: usize = line.trim().parse().map_err(|_| "Please enter a number.")?;
    match number {
        0 => Ok(MenuChoice::Quit),
        n if n <= pack_count => Ok(MenuChoice::Pack(n - 1)),
        _ => Err("Invalid selection. Please try again."),
    }
}
