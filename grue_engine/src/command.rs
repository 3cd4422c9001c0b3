//! Command module
//!
//! Describes possible commands used during gameplay and turns a line of input
//! into one of them. Parsing is keyword/prefix based: keywords are matched
//! case-insensitively, and the text after a prefix is handed to the handler
//! exactly as typed.

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Ask { character: String, topic: String },
    Drop(String),
    Examine(String),
    Help,
    /// A verb that needs an argument arrived without one; carries the question to ask back.
    Incomplete(&'static str),
    Inventory,
    Look,
    MoveTo(String),
    Quit,
    Take(String),
    TalkTo(String),
    Unknown,
}

/// Shorthand and full direction tokens, mapped to the canonical direction name.
const DIRECTIONS: &[(&str, &str)] = &[
    ("north", "north"),
    ("n", "north"),
    ("south", "south"),
    ("s", "south"),
    ("east", "east"),
    ("e", "east"),
    ("west", "west"),
    ("w", "west"),
    ("up", "up"),
    ("u", "up"),
    ("down", "down"),
    ("d", "down"),
];

/// Canonical direction for a bare direction token (`n` -> `north`), if it is one.
pub fn canonical_direction(token: &str) -> Option<&'static str> {
    DIRECTIONS
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(token))
        .map(|(_, canonical)| *canonical)
}

/// Parses an input line and returns the corresponding `Command`.
pub fn parse_command(input: &str) -> Command {
    let lower = input.to_lowercase();
    match lower.as_str() {
        "quit" | "exit" | "bye" => return Command::Quit,
        "look" | "l" => return Command::Look,
        "inventory" | "i" => return Command::Inventory,
        "help" | "h" | "?" => return Command::Help,
        "go" => return Command::Incomplete("Go where?"),
        "take" | "get" => return Command::Incomplete("Take what?"),
        "drop" => return Command::Incomplete("Drop what?"),
        "examine" | "look at" => return Command::Incomplete("Examine what?"),
        "talk" | "talk to" => return Command::Incomplete("Talk to whom?"),
        "ask" => return Command::Incomplete("Ask whom?"),
        _ => {},
    }

    if let Some(direction) = canonical_direction(&lower) {
        return Command::MoveTo(direction.to_string());
    }

    if let Some(direction) = strip_prefix_ci(input, "go ") {
        return with_argument(direction, "Go where?", Command::MoveTo);
    }
    if let Some(thing) = strip_prefix_ci(input, "take ").or_else(|| strip_prefix_ci(input, "get ")) {
        return with_argument(thing, "Take what?", Command::Take);
    }
    if let Some(thing) = strip_prefix_ci(input, "drop ") {
        return with_argument(thing, "Drop what?", Command::Drop);
    }
    if let Some(thing) = strip_prefix_ci(input, "examine ").or_else(|| strip_prefix_ci(input, "look at ")) {
        return with_argument(thing, "Examine what?", Command::Examine);
    }
    if let Some(name) = strip_prefix_ci(input, "talk to ") {
        return with_argument(name, "Talk to whom?", Command::TalkTo);
    }
    if let Some(rest) = strip_prefix_ci(input, "ask ") {
        return parse_ask(rest);
    }

    Command::Unknown
}

/// `ask <character> about <topic>`; a missing topic asks for the greeting.
fn parse_ask(rest: &str) -> Command {
    let lower = rest.to_ascii_lowercase();
    let (character, topic) = match lower.find(" about ") {
        Some(idx) => (&rest[..idx], &rest[idx + " about ".len()..]),
        None => (rest, crate::character::GREETING),
    };
    if character.trim().is_empty() {
        return Command::Incomplete("Ask whom?");
    }
    if topic.trim().is_empty() {
        return Command::Incomplete("Ask about what?");
    }
    Command::Ask {
        character: character.to_string(),
        topic: topic.to_string(),
    }
}

fn with_argument(arg: &str, question: &'static str, build: impl FnOnce(String) -> Command) -> Command {
    if arg.trim().is_empty() {
        Command::Incomplete(question)
    } else {
        build(arg.to_string())
    }
}

/// Case-insensitive `str::strip_prefix` for ASCII keywords.
fn strip_prefix_ci<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &input[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_keywords_parse() {
        for quit in ["quit", "exit", "bye", "QUIT"] {
            assert_eq!(parse_command(quit), Command::Quit);
        }
        assert_eq!(parse_command("l"), Command::Look);
        assert_eq!(parse_command("Look"), Command::Look);
        assert_eq!(parse_command("i"), Command::Inventory);
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("h"), Command::Help);
    }

    #[test]
    fn bare_directions_are_canonicalised() {
        assert_eq!(parse_command("n"), Command::MoveTo("north".into()));
        assert_eq!(parse_command("d"), Command::MoveTo("down".into()));
        assert_eq!(parse_command("West"), Command::MoveTo("west".into()));
        assert_eq!(parse_command("up"), Command::MoveTo("up".into()));
        assert!(canonical_direction("northeast").is_none());
    }

    #[test]
    fn prefix_arguments_pass_through_unmodified() {
        assert_eq!(parse_command("go North"), Command::MoveTo("North".into()));
        assert_eq!(parse_command("take Old Key"), Command::Take("Old Key".into()));
        assert_eq!(parse_command("get torch"), Command::Take("torch".into()));
        assert_eq!(parse_command("drop  chain"), Command::Drop(" chain".into()));
        assert_eq!(parse_command("examine Flower"), Command::Examine("Flower".into()));
        assert_eq!(parse_command("look at rat"), Command::Examine("rat".into()));
        assert_eq!(parse_command("talk to Ghost"), Command::TalkTo("Ghost".into()));
        assert_eq!(parse_command("TAKE lever"), Command::Take("lever".into()));
    }

    #[test]
    fn ask_splits_character_and_topic() {
        assert_eq!(
            parse_command("ask ghost about quest"),
            Command::Ask {
                character: "ghost".into(),
                topic: "quest".into()
            }
        );
        assert_eq!(
            parse_command("ask groundskeeper"),
            Command::Ask {
                character: "groundskeeper".into(),
                topic: "greeting".into()
            }
        );
        assert_eq!(parse_command("ask  about help"), Command::Incomplete("Ask whom?"));
    }

    #[test]
    fn missing_arguments_ask_back() {
        assert_eq!(parse_command("take"), Command::Incomplete("Take what?"));
        assert_eq!(parse_command("look at"), Command::Incomplete("Examine what?"));
        assert_eq!(parse_command("talk to"), Command::Incomplete("Talk to whom?"));
        assert_eq!(parse_command("go   "), Command::Incomplete("Go where?"));
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(parse_command("dance"), Command::Unknown);
        assert_eq!(parse_command(""), Command::Unknown);
        assert_eq!(parse_command("taken"), Command::Unknown);
        assert_eq!(parse_command("talk with ghost"), Command::Unknown);
    }
}
