//! Terminal input handling for the Grue console.
//!
//! Wraps rustyline configuration and completion tailored to the command
//! words, with a plain stdin fallback for pipes and redirected input.

use std::io::{self, IsTerminal, Write};

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Outcome of reading a line from the console.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

const COMMAND_WORDS: &[&str] = &[
    "ask", "bye", "down", "drop", "east", "examine", "exit", "get", "go", "help", "inventory", "look", "look at",
    "north", "quit", "south", "take", "talk to", "up", "west",
];

lazy_static! {
    static ref COMMAND_TERMS: Vec<String> = build_command_terms();
}

type ReplEditor = rustyline::Editor<GrueHelper, DefaultHistory>;

#[derive(Default)]
struct GrueHelper;

impl Helper for GrueHelper {}

impl Completer for GrueHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok((start, completions_for(&prefix)))
    }
}

impl Hinter for GrueHelper {
    type Hint = String;
}

impl Highlighter for GrueHelper {}

impl Validator for GrueHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn build_command_terms() -> Vec<String> {
    let mut terms: Vec<String> = COMMAND_WORDS.iter().map(|word| (*word).to_string()).collect();
    terms.sort_unstable();
    terms.dedup();
    terms
}

fn completions_for(prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let lower = prefix.to_lowercase();
    COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(&lower))
        .map(|term| Pair {
            display: term.clone(),
            replacement: term.clone(),
        })
        .collect()
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling back to
/// a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new() {
                Ok(editor) => {
                    info!("using rustyline-backed console input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    /// # Errors
    /// - if reading stdin fails in the plain backend
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(Box<RustylineInput>),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

/// Line editor with completion and in-memory history.
struct RustylineInput {
    editor: ReplEditor,
}

impl RustylineInput {
    fn new() -> io::Result<Box<Self>> {
        let mut editor = ReplEditor::new().map_err(map_io_err)?;
        editor.set_helper(Some(GrueHelper));
        Ok(Box::new(Self { editor }))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(err) = self.editor.add_history_entry(line.as_str())
                {
                    warn!("failed to append to history: {err}");
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert_eq!(result, InputEvent::Interrupted);
        assert_eq!(convert_readline_error(ReadlineError::Eof).unwrap(), InputEvent::Eof);
    }

    #[test]
    fn command_terms_include_expected_commands() {
        assert!(COMMAND_TERMS.iter().any(|term| term == "inventory"));
        assert!(COMMAND_TERMS.iter().any(|term| term == "talk to"));
    }

    #[test]
    fn completion_matches_prefix_case_insensitively() {
        let found: Vec<_> = completions_for("Ta").into_iter().map(|pair| pair.replacement).collect();
        assert_eq!(found, ["take", "talk to"]);
        assert!(completions_for("").is_empty());
    }

    #[test]
    fn prefix_starts_after_leading_whitespace() {
        assert_eq!(current_prefix("  ex", 4), (2, "ex".to_string()));
    }
}
