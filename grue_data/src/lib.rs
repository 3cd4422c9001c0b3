//! Shared data model for Grue content packs.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, unplaced_items, validate_pack};
