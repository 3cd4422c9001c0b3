//! module `loader::help`
//!
//! The command reference shown by `help` ships inside the binary as TOML.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

const HELP_TOML: &str = include_str!("../../data/help.toml");

/// Represents a single command in the help system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Complete help data: a heading, the command list and a closing hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpData {
    pub intro: String,
    pub commands: Vec<HelpCommand>,
    #[serde(default)]
    pub footer: String,
}

/// Parses help data from TOML source.
/// # Errors
/// - on TOML parsing error
pub fn parse_help(src: &str) -> Result<HelpData> {
    let help: HelpData = toml::from_str(src).context("parsing help commands")?;
    info!("{} help commands loaded", help.commands.len());
    Ok(help)
}

/// The help data compiled into the engine.
/// # Errors
/// - if the embedded help TOML is malformed
pub fn builtin_help() -> Result<HelpData> {
    parse_help(HELP_TOML).context("while loading built-in help")
}
