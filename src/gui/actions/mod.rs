// src/gui/actions/mod.rs
//
// Folder module facade. The controller: every user intent is an `Action`,
// and `handle` turns (state, action) into the next state, asking the model
// for data on the way. No egui in here.

mod dialogs;
mod prompt;
mod run;

use crate::{catalog::{Model, QueryKind}, config::state::AppState};

pub use dialogs::TUTORIAL_MISSING;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Greeting, database probe, quote of the day.
    Startup,
    /// A Queries menu entry.
    Select(QueryKind),
    /// Confirm the open prompt.
    Submit,
    CancelPrompt,
    ClearConsole,
    /// Tutorial text as read from disk; `None` if it could not be read.
    ShowTutorial(Option<String>),
    ShowAbout,
    /// Window close or Home > Quit; asks first.
    RequestQuit,
    /// Answer to the quit question.
    ConfirmQuit(bool),
    CloseDialog,
}

pub fn handle<M: Model + ?Sized>(mut state: AppState, model: &M, action: Action) -> AppState {
    logd!("Action: {action:?}");
    match action {
        Action::Startup => run::startup(&mut state, model),
        Action::Select(kind) => prompt::select(&mut state, model, kind),
        Action::Submit => prompt::submit(&mut state, model),
        Action::CancelPrompt => prompt::cancel(&mut state),
        Action::ClearConsole => state.clear_console(),
        Action::ShowTutorial(text) => dialogs::tutorial(&mut state, text),
        Action::ShowAbout => dialogs::about(&mut state),
        Action::RequestQuit => dialogs::request_quit(&mut state),
        Action::ConfirmQuit(yes) => dialogs::confirm_quit(&mut state, yes),
        Action::CloseDialog => state.dialog = None,
    }
    state
}
