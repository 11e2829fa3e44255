// src/config/state.rs
//
// Everything the window shows, as plain data. The controller takes an
// AppState by value and hands back the next one; views only read it
// (plus the prompt's edit buffer, which the text field writes directly).

use crate::catalog::QueryKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Menu visible, no query running.
    Idle,
    /// A prompt is open for the parameter of `Prompt::query`.
    AwaitingParameter(Prompt),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub query: QueryKind,
    pub input: PromptInput,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptInput {
    /// Pick one entry from a list (authors, tags).
    Choice { options: Vec<String>, selected: Option<usize> },
    /// Free text that must parse as 1..=max.
    Count { text: String, max: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dialog {
    About,
    /// Tutorial text, shown verbatim.
    Tutorial(String),
    ConfirmQuit,
}

/// Visual role of a response line; the view maps these to colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Primary,
    Secondary,
    Highlight,
    Notice,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseLine {
    pub text: String,
    pub tone: Tone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Line(ResponseLine),
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
}

impl Block {
    pub fn line(text: impl Into<String>, tone: Tone) -> Self {
        Block::Line(ResponseLine { text: text.into(), tone })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleLine {
    pub text: String,
    pub level: Level,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub mode: Mode,
    /// Response panel contents.
    pub response: Vec<Block>,
    /// Bumped on every `show`, so the panel knows to scroll back up.
    pub response_rev: u64,
    /// Console panel contents, oldest first.
    pub console: Vec<ConsoleLine>,
    pub dialog: Option<Dialog>,
    /// Set once the user confirmed quitting; the window closes next frame.
    pub quit_confirmed: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: Mode::Idle,
            response: Vec::new(),
            response_rev: 0,
            console: Vec::new(),
            dialog: None,
            quit_confirmed: false,
        }
    }
}

impl AppState {
    #[inline]
    pub fn is_idle(&self) -> bool { matches!(self.mode, Mode::Idle) }

    /// Status line in the console panel (mirrored to the log file).
    pub fn info(&mut self, msg: impl Into<String>) {
        let text = msg.into();
        logf!("Console: {text}");
        self.console.push(ConsoleLine { text, level: Level::Info });
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        let text = msg.into();
        loge!("Console: {text}");
        self.console.push(ConsoleLine { text, level: Level::Error });
    }

    pub fn clear_console(&mut self) { self.console.clear(); }

    /// Replace the response panel.
    pub fn show(&mut self, blocks: Vec<Block>) {
        self.response = blocks;
        self.response_rev = self.response_rev.wrapping_add(1);
    }

    pub fn last_console(&self) -> Option<&str> {
        self.console.last().map(|l| l.text.as_str())
    }
}
