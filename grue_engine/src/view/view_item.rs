//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which collects them and turns them
//! into response text at the end of the command. Variants carry different payloads,
//! depending on the type of information that needs to be displayed.

use variantly::Variantly;

use crate::helpers::article_list;
use crate::loader::help::HelpCommand;
use crate::style::Tone;

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    EngineMessage(String),
    Error(String),
    Help {
        intro: String,
        commands: Vec<HelpCommand>,
        footer: String,
    },
    /// Names of carried items, in inventory order.
    Inventory(Vec<String>),
    /// Result of examining an item or character.
    EntityDescription(String),
    NpcSpeech {
        speaker: String,
        quote: String,
    },
    RoomDescription {
        name: String,
        description: String,
    },
    RoomExits(Vec<String>),
    RoomItems(Vec<String>),
    RoomNpcs(Vec<String>),
    TransitionMessage(String),
}

impl ViewItem {
    /// Render this item as text. With `styled` set, the text is painted for the console.
    pub fn render(&self, styled: bool) -> String {
        let paint = |text: &str, tone: Tone| {
            if styled {
                tone.apply(text).to_string()
            } else {
                text.to_string()
            }
        };
        match self {
            ViewItem::ActionSuccess(msg) | ViewItem::EngineMessage(msg) => msg.clone(),
            ViewItem::ActionFailure(msg) => paint(msg, Tone::Denied),
            ViewItem::Error(msg) => paint(msg, Tone::Error),
            ViewItem::Help {
                intro,
                commands,
                footer,
            } => {
                let mut lines = vec![paint(intro, Tone::Subheading)];
                lines.extend(
                    commands
                        .iter()
                        .map(|cmd| format!("- {:<15}: {}", cmd.command, cmd.description)),
                );
                if !footer.is_empty() {
                    lines.push(footer.clone());
                }
                lines.join("\n")
            },
            ViewItem::Inventory(names) => {
                if names.is_empty() {
                    "You are not carrying anything.".to_string()
                } else {
                    format!("You are carrying {}.", paint(&article_list(names), Tone::Item))
                }
            },
            ViewItem::EntityDescription(text) => paint(text, Tone::Description),
            ViewItem::NpcSpeech { speaker, quote } => {
                format!("{}: {}", paint(speaker, Tone::Npc), paint(&format!("\"{quote}\""), Tone::Quote))
            },
            ViewItem::RoomDescription { name, description } => {
                let underline = "-".repeat(name.chars().count());
                format!(
                    "{}\n{underline}\n{}",
                    paint(name, Tone::Room),
                    paint(description, Tone::Description)
                )
            },
            ViewItem::RoomExits(directions) => {
                if directions.is_empty() {
                    "There are no obvious exits.".to_string()
                } else {
                    format!("Exits: {}", paint(&directions.join(", "), Tone::Exit))
                }
            },
            ViewItem::RoomItems(names) => {
                if names.is_empty() {
                    String::new()
                } else {
                    format!("You can see {} here.", paint(&article_list(names), Tone::Item))
                }
            },
            ViewItem::RoomNpcs(names) => names
                .iter()
                .map(|name| format!("There is {} here.", paint(name, Tone::Npc)))
                .collect::<Vec<_>>()
                .join("\n"),
            ViewItem::TransitionMessage(msg) => paint(msg, Tone::Transition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_description_is_underlined_to_name_length() {
        let item = ViewItem::RoomDescription {
            name: "Hallway".into(),
            description: "A long hall.".into(),
        };
        assert_eq!(item.render(false), "Hallway\n-------\nA long hall.");
    }

    #[test]
    fn exits_and_empty_lists() {
        assert_eq!(
            ViewItem::RoomExits(vec!["north".into(), "east".into()]).render(false),
            "Exits: north, east"
        );
        assert_eq!(ViewItem::RoomExits(Vec::new()).render(false), "There are no obvious exits.");
        assert_eq!(ViewItem::RoomItems(Vec::new()).render(false), "");
        assert_eq!(ViewItem::RoomNpcs(Vec::new()).render(false), "");
        assert_eq!(
            ViewItem::Inventory(Vec::new()).render(false),
            "You are not carrying anything."
        );
    }

    #[test]
    fn item_lists_use_article_joiner() {
        let names = vec!["Lamp".to_string(), "Old Key".to_string(), "Rope".to_string()];
        assert_eq!(
            ViewItem::RoomItems(names.clone()).render(false),
            "You can see a Lamp, an Old Key and a Rope here."
        );
        assert_eq!(
            ViewItem::Inventory(names).render(false),
            "You are carrying a Lamp, an Old Key and a Rope."
        );
    }

    #[test]
    fn speech_and_characters() {
        let speech = ViewItem::NpcSpeech {
            speaker: "Old Groundskeeper".into(),
            quote: "Evening.".into(),
        };
        assert_eq!(speech.render(false), "Old Groundskeeper: \"Evening.\"");
        assert_eq!(
            ViewItem::RoomNpcs(vec!["a Rat".into(), "Ghost".into()]).render(false),
            "There is a Rat here.\nThere is Ghost here."
        );
    }

    #[test]
    fn help_lists_commands_in_columns() {
        let help = ViewItem::Help {
            intro: "Available commands:".into(),
            commands: vec![HelpCommand {
                command: "look".into(),
                description: "Look around".into(),
            }],
            footer: String::new(),
        };
        assert_eq!(help.render(false), "Available commands:\n- look           : Look around");
    }
}
