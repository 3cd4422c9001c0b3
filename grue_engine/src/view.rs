//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate the needed information
//! and messages, then turn them into a response at the end of the command.
//!
//! [`View::render`] produces the plain text the engine API returns. [`View::flush`] paints the
//! same entries for the console, wrapped to the terminal width.

pub mod view_item;

pub use view_item::ViewItem;

use textwrap::{fill, termwidth};

/// View aggregates information to be displayed for one command and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view sized to the current terminal.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if the frame holds a room transition, i.e. the player changed rooms.
    pub fn has_transition(&self) -> bool {
        self.items.iter().any(ViewItem::is_transition_message)
    }

    /// True if the frame already contains the location view.
    pub fn shows_location(&self) -> bool {
        self.items.iter().any(ViewItem::is_room_description)
    }

    /// Plain, unwrapped text of every entry in push order, one entry per line.
    pub fn render(&self) -> String {
        self.items
            .iter()
            .map(|item| item.render(false))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the frame as plain text and clear it for the next command.
    pub fn take_text(&mut self) -> String {
        let text = self.render();
        self.items.clear();
        text
    }

    /// Compose and display all message contents in the current frame, then clear it.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();
        for item in &self.items {
            let text = item.render(true);
            if text.is_empty() {
                continue;
            }
            for line in text.lines() {
                println!("{}", fill(line, self.width));
            }
        }
        self.items.clear();
    }
}
