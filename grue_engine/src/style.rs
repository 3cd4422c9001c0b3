//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.
//!
//! Engine responses are plain text; only the console view applies these.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn npc_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn transition_style(&self) -> ColoredString;
    fn quote_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn npc_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60).underline()
    }
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn exit_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn transition_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn quote_style(&self) -> ColoredString {
        self.truecolor(180, 220, 180)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(150, 150, 255)
    }
}

impl GameStyle for String {
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn npc_style(&self) -> ColoredString {
        self.as_str().npc_style()
    }
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_str().exit_style()
    }
    fn transition_style(&self) -> ColoredString {
        self.as_str().transition_style()
    }
    fn quote_style(&self) -> ColoredString {
        self.as_str().quote_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Which [`GameStyle`] a piece of view text gets when it is painted for the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Item,
    Npc,
    Room,
    Description,
    Exit,
    Transition,
    Quote,
    Error,
    Denied,
    Subheading,
}
impl Tone {
    pub fn apply(self, text: &str) -> ColoredString {
        match self {
            Tone::Item => text.item_style(),
            Tone::Npc => text.npc_style(),
            Tone::Room => text.room_style(),
            Tone::Description => text.description_style(),
            Tone::Exit => text.exit_style(),
            Tone::Transition => text.transition_style(),
            Tone::Quote => text.quote_style(),
            Tone::Error => text.error_style(),
            Tone::Denied => text.denied_style(),
            Tone::Subheading => text.subheading_style(),
        }
    }
}
