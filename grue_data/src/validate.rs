use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `PackDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    DuplicatePlacement { kind: &'static str, id: String, first: String, second: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::DuplicatePlacement { kind, id, first, second } => {
                write!(f, "{kind} '{id}' placed twice ({first} and {second})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and ownership invariants in a `PackDef`.
///
/// ```
/// use grue_data::{GameDef, PackDef, PlayerDef, RoomDef, validate_pack};
///
/// let pack = PackDef {
///     game: GameDef {
///         id: "demo".into(),
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         ..GameDef::default()
///     },
///     player: PlayerDef {
///         start_room: "start".into(),
///         ..PlayerDef::default()
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         exits: Vec::new(),
///         items: Vec::new(),
///         characters: Vec::new(),
///         first_visit: true,
///     }],
///     ..PackDef::default()
/// };
/// assert!(validate_pack(&pack).is_empty());
/// ```
pub fn validate_pack(pack: &PackDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();
    let mut characters = HashSet::new();

    track_ids("room", pack.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);
    track_ids("item", pack.items.iter().map(|i| i.id.as_str()), &mut items, &mut errors);
    track_ids(
        "character",
        pack.characters.iter().map(|c| c.id.as_str()),
        &mut characters,
        &mut errors,
    );

    if pack.game.id.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game id missing".to_string(),
        });
    }

    if pack.player.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "player start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &pack.player.start_room,
            &rooms,
            "player start room".to_string(),
            &mut errors,
        );
    }

    if pack.player.inventory.len() > pack.player.max_inventory {
        errors.push(ValidationError::InvalidValue {
            context: format!(
                "player starts with {} items but can only carry {}",
                pack.player.inventory.len(),
                pack.player.max_inventory
            ),
        });
    }

    // item id -> the container that first claimed it
    let mut item_owner: HashMap<&str, String> = HashMap::new();
    let mut character_owner: HashMap<&str, String> = HashMap::new();

    for item in &pack.player.inventory {
        check_ref("item", item, &items, "player inventory".to_string(), &mut errors);
        claim("item", item, "player inventory".to_string(), &mut item_owner, &mut errors);
    }

    for room in &pack.rooms {
        for exit in &room.exits {
            check_ref(
                "room",
                &exit.to,
                &rooms,
                format!("exit '{}' from room '{}'", exit.direction, room.id),
                &mut errors,
            );
        }
        let mut directions = HashSet::new();
        for exit in &room.exits {
            if !directions.insert(exit.direction.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has two '{}' exits", room.id, exit.direction),
                });
            }
        }
        for item in &room.items {
            let context = format!("room '{}'", room.id);
            check_ref("item", item, &items, context.clone(), &mut errors);
            claim("item", item, context, &mut item_owner, &mut errors);
        }
        for character in &room.characters {
            let context = format!("room '{}'", room.id);
            check_ref("character", character, &characters, context.clone(), &mut errors);
            claim("character", character, context, &mut character_owner, &mut errors);
        }
    }

    for character in &pack.characters {
        for item in &character.inventory {
            check_ref(
                "item",
                item,
                &items,
                format!("character '{}' inventory", character.id),
                &mut errors,
            );
        }
    }

    errors
}

/// Items defined in the pack that no room and no inventory holds. These never enter play.
pub fn unplaced_items(pack: &PackDef) -> Vec<&str> {
    let placed: HashSet<&str> = pack
        .rooms
        .iter()
        .flat_map(|room| room.items.iter())
        .chain(pack.player.inventory.iter())
        .map(String::as_str)
        .collect();
    pack.items
        .iter()
        .map(|item| item.id.as_str())
        .filter(|id| !placed.contains(id))
        .collect()
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

fn claim<'a>(
    kind: &'static str,
    id: &'a str,
    container: String,
    owners: &mut HashMap<&'a str, String>,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(first) = owners.get(id) {
        errors.push(ValidationError::DuplicatePlacement {
            kind,
            id: id.to_string(),
            first: first.clone(),
            second: container,
        });
    } else {
        owners.insert(id, container);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn room(id: &str) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            name: format!("Room {id}"),
            desc: "Test room".into(),
            exits: Vec::new(),
            items: Vec::new(),
            characters: Vec::new(),
            first_visit: true,
        }
    }

    fn item(id: &str) -> ItemDef {
        ItemDef {
            id: id.to_string(),
            name: format!("Item {id}"),
            desc: "Test item".into(),
            portable: true,
            visible: true,
            actions: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    fn base_pack() -> PackDef {
        PackDef {
            game: GameDef {
                id: "demo".into(),
                title: "Demo".into(),
                intro: "Intro".into(),
                ..GameDef::default()
            },
            player: PlayerDef {
                start_room: "start".into(),
                ..PlayerDef::default()
            },
            rooms: vec![room("start")],
            ..PackDef::default()
        }
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut pack = base_pack();
        pack.rooms = vec![room("start"), room("start")];

        let errors = validate_pack(&pack);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "room" && id == "start"))
        );
    }

    #[test]
    fn dangling_exits_are_reported() {
        let mut pack = base_pack();
        pack.rooms[0].exits.push(ExitDef {
            direction: "north".into(),
            to: "nowhere".into(),
        });

        let errors = validate_pack(&pack);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "room" && id == "nowhere")
        ));
    }

    #[test]
    fn missing_start_room_is_reported() {
        let mut pack = base_pack();
        pack.player.start_room = "attic".into();

        let errors = validate_pack(&pack);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "missing room 'attic' (player start room)");
    }

    #[test]
    fn item_held_in_two_places_is_reported() {
        let mut pack = base_pack();
        pack.items.push(item("coin"));
        pack.rooms[0].items.push("coin".into());
        pack.player.inventory.push("coin".into());

        let errors = validate_pack(&pack);
        assert!(errors.iter().any(|err| matches!(
            err,
            ValidationError::DuplicatePlacement { id, first, second, .. }
                if id == "coin" && first == "player inventory" && second == "room 'start'"
        )));
    }

    #[test]
    fn overfull_starting_inventory_is_reported() {
        let mut pack = base_pack();
        pack.items = vec![item("a"), item("b")];
        pack.player.inventory = vec!["a".into(), "b".into()];
        pack.player.max_inventory = 1;

        let errors = validate_pack(&pack);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn unplaced_items_are_listed() {
        let mut pack = base_pack();
        pack.items = vec![item("key"), item("door")];
        pack.rooms[0].items.push("key".into());

        assert_eq!(unplaced_items(&pack), vec!["door"]);
        assert!(validate_pack(&pack).is_empty());
    }
}
