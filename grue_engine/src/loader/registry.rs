//! module `loader::registry`
//!
//! Keeps track of the content packs a player can choose from. Two packs are
//! compiled into the binary; more can be dropped into a packs directory as
//! `*.toml` files. Only each pack's `[game]` header is read up front. The full
//! source is parsed again every time a session starts, so no world state is
//! ever shared between sessions.

use crate::GrueWorld;
use crate::loader::{build_world, load_pack_file, parse_pack};

use anyhow::{Context, Result, anyhow};
use grue_data::GameDef;
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const BUILTIN_PACKS: &[&str] = &[
    include_str!("../../packs/crystalia_manor.toml"),
    include_str!("../../packs/dark_dungeon.toml"),
];

/// Just enough of a pack to list it in the launcher menu.
#[derive(Debug, Deserialize)]
struct PackHeader {
    game: GameDef,
}

/// Where a pack's full source comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackSource {
    Builtin(&'static str),
    File(PathBuf),
}

/// A pack known to the registry.
#[derive(Debug, Clone)]
pub struct PackEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: PackSource,
}
impl PackEntry {
    /// Parse the pack from its source and build a brand new world from it.
    /// # Errors
    /// - if the source can't be read, parsed or validated
    pub fn load(&self) -> Result<GrueWorld> {
        let pack = match &self.source {
            PackSource::Builtin(src) => parse_pack(src, &self.id)?,
            PackSource::File(path) => load_pack_file(path)?,
        };
        build_world(pack).with_context(|| format!("while building world for pack '{}'", self.id))
    }
}

/// Registry / factory of content packs, in menu order.
#[derive(Debug, Clone, Default)]
pub struct PackRegistry {
    entries: Vec<PackEntry>,
}

impl PackRegistry {
    /// A registry holding only the packs compiled into the binary.
    /// # Errors
    /// - if an embedded pack header is malformed
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::default();
        for &src in BUILTIN_PACKS {
            let header: PackHeader = toml::from_str(src).context("reading header of built-in pack")?;
            registry.register(header.game, PackSource::Builtin(src));
        }
        info!("{} built-in packs registered", registry.len());
        Ok(registry)
    }

    /// Built-in packs followed by any packs found in `packs_dir`.
    /// # Errors
    /// - if an embedded pack header is malformed
    pub fn discover(packs_dir: Option<&Path>) -> Result<Self> {
        let mut registry = Self::builtin()?;
        if let Some(dir) = packs_dir {
            registry.scan_dir(dir);
        }
        Ok(registry)
    }

    /// Register every readable `*.toml` pack in `dir`, in file name order.
    /// Unreadable files and ids that are already taken are skipped with a warning.
    pub fn scan_dir(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("could not read packs directory '{}': {err}", dir.display());
                return;
            },
        };
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
            .collect();
        paths.sort();

        for path in paths {
            match read_header(&path) {
                Ok(game) => {
                    if self.find(&game.id).is_some() {
                        warn!("pack '{}' in '{}' duplicates a known pack id; skipped", game.id, path.display());
                        continue;
                    }
                    info!("pack '{}' found at '{}'", game.id, path.display());
                    self.register(game, PackSource::File(path));
                },
                Err(err) => warn!("skipping pack file '{}': {err:#}", path.display()),
            }
        }
    }

    fn register(&mut self, game: GameDef, source: PackSource) {
        self.entries.push(PackEntry {
            id: game.id,
            title: game.title,
            description: game.description,
            source,
        });
    }

    pub fn entries(&self) -> &[PackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&PackEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Build a fresh world for the pack with the given id.
    /// # Errors
    /// - if no pack has that id, or the pack fails to load
    pub fn load(&self, id: &str) -> Result<GrueWorld> {
        self.find(id).ok_or_else(|| anyhow!("no content pack with id '{id}'"))?.load()
    }
}

fn read_header(path: &Path) -> Result<GameDef> {
    let src = fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))?;
    let header: PackHeader = toml::from_str(&src).with_context(|| format!("parsing header of '{}'", path.display()))?;
    Ok(header.game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_packs_are_listed_in_order() {
        let registry = PackRegistry::builtin().unwrap();
        let ids: Vec<_> = registry.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["crystalia_manor", "dark_dungeon"]);
        assert_eq!(registry.entries()[0].title, "Crystalia Manor");
        assert_eq!(
            registry.entries()[1].description,
            "Escape from a dangerous underground prison"
        );
    }

    #[test]
    fn every_builtin_pack_builds() {
        let registry = PackRegistry::builtin().unwrap();
        for entry in registry.entries() {
            let world = entry.load().unwrap();
            assert_eq!(world.game().id, entry.id);
        }
        assert!(registry.load("haunted_lighthouse").is_err());
    }

    #[test]
    fn missing_dir_leaves_builtins_alone() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PackRegistry::discover(Some(&dir.path().join("nope"))).unwrap();
        assert_eq!(registry.len(), 2);
    }
}
