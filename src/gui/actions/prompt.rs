// src/gui/actions/prompt.rs
//
// Idle -> AwaitingParameter -> Idle. Only one prompt at a time; menu picks
// while a prompt is open are ignored.

use crate::{
    catalog::{Model, ParamKind, Query, QueryKind},
    config::state::{AppState, Mode, Prompt, PromptInput},
};

use super::run;

const NOTHING_SELECTED: &str = "Nothing was selected.";

pub(super) fn select<M: Model + ?Sized>(state: &mut AppState, model: &M, kind: QueryKind) {
    if !state.is_idle() {
        logd!("Select {kind:?} ignored: a prompt is open");
        return;
    }

    let input = match kind.param() {
        ParamKind::None => {
            if let Some(q) = kind.without_param() {
                run::query(state, model, q);
            }
            return;
        }
        ParamKind::Author | ParamKind::Tag => {
            let what = if kind.param() == ParamKind::Author { "authors" } else { "tags" };
            state.info(format!("Fetching the names of all the {what}..."));
            let names = if kind.param() == ParamKind::Author { model.author_names() } else { model.tag_names() };
            match names {
                Ok(options) if options.is_empty() => {
                    state.info(format!("There are no {what} to choose from."));
                    return;
                }
                Ok(options) => PromptInput::Choice { options, selected: None },
                Err(e) => {
                    state.error(e.to_string());
                    return;
                }
            }
        }
        ParamKind::Count => {
            state.info("Retrieving your number...");
            match model.total_quotes() {
                Ok(0) => {
                    state.info("There are no quotes to choose from.");
                    return;
                }
                Ok(max) => PromptInput::Count { text: String::new(), max },
                Err(e) => {
                    state.error(e.to_string());
                    return;
                }
            }
        }
    };

    state.info("Make your selection...");
    state.mode = Mode::AwaitingParameter(Prompt { query: kind, input });
}

/// Validate the prompt's input. `Err` carries the console message.
fn parse_count(text: &str, max: i64) -> Result<u32, String> {
    let t = text.trim();
    let n: i64 = t
        .parse()
        .map_err(|_| format!("'{t}' is not a whole number. Please enter a number between 1 and {max}."))?;
    if n < 1 || n > max {
        return Err(format!("{n} is out of range. Please enter a number between 1 and {max}."));
    }
    u32::try_from(n).map_err(|_| format!("{n} is too large."))
}

pub(super) fn submit<M: Model + ?Sized>(state: &mut AppState, model: &M) {
    let Mode::AwaitingParameter(prompt) = &state.mode else {
        logd!("Submit ignored: no prompt open");
        return;
    };
    let kind = prompt.query;

    let query = match &prompt.input {
        PromptInput::Choice { options, selected } => {
            match selected.and_then(|i| options.get(i)).cloned() {
                Some(name) => {
                    state.info(format!("Your selection = {name}"));
                    kind.with_name(name)
                }
                None => {
                    state.mode = Mode::Idle;
                    state.info(NOTHING_SELECTED);
                    return;
                }
            }
        }
        PromptInput::Count { text, max } => match parse_count(text, *max) {
            Ok(n) => {
                state.info(format!("You typed in number: {n}"));
                Some(Query::RandomN(n))
            }
            Err(msg) => {
                // Prompt stays open for another try.
                state.error(msg);
                return;
            }
        },
    };

    state.mode = Mode::Idle;
    if let Some(q) = query {
        run::query(state, model, q);
    }
}

pub(super) fn cancel(state: &mut AppState) {
    if state.is_idle() {
        return;
    }
    state.mode = Mode::Idle;
    state.info(NOTHING_SELECTED);
}
