// src/gui/actions/dialogs.rs
use crate::config::state::{AppState, Dialog};

pub const TUTORIAL_MISSING: &str = "TUTORIAL.TXT file not found.";

pub(super) fn about(state: &mut AppState) {
    state.dialog = Some(Dialog::About);
}

pub(super) fn tutorial(state: &mut AppState, text: Option<String>) {
    let text = text.unwrap_or_else(|| {
        state.error(TUTORIAL_MISSING);
        s!(TUTORIAL_MISSING)
    });
    state.dialog = Some(Dialog::Tutorial(text));
}

pub(super) fn request_quit(state: &mut AppState) {
    state.dialog = Some(Dialog::ConfirmQuit);
}

pub(super) fn confirm_quit(state: &mut AppState, yes: bool) {
    state.dialog = None;
    if yes {
        logf!("Quit confirmed");
        state.quit_confirmed = true;
    }
}
