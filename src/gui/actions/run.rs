// src/gui/actions/run.rs
use crate::{
    catalog::{Model, Query, QueryError, QueryOutcome, SurprisePick},
    config::state::AppState,
    gui::format,
};

/// Run one query and put the result in the response panel.
/// Errors go to the console; the panel keeps what it showed before, except
/// for an unknown author, which gets its own message.
pub(super) fn query<M: Model + ?Sized>(state: &mut AppState, model: &M, q: Query) {
    let kind = q.kind();
    state.info(format!("Fetching '{}'...", kind.id()));

    match model.run(&q) {
        Ok(outcome) => {
            if let QueryOutcome::Surprise { pick: Some(pick), .. } = &outcome {
                state.info(match pick {
                    SurprisePick::Author(a) => format!("Fetching surprise author: {a}..."),
                    SurprisePick::Tag(t) => format!("Fetching surprise tag: {t}..."),
                });
            }
            if outcome.is_empty() {
                state.info("No results.");
            } else {
                state.info(format!("Printed '{}'.", kind.id()));
            }
            state.show(format::outcome(&outcome));
        }
        Err(QueryError::AuthorNotFound(name)) => {
            let msg = format!("Author '{name}' was not found.");
            state.error(msg.as_str());
            state.show(format::error(&msg));
        }
        Err(e) => state.error(e.to_string()),
    }
}

/// Welcome text always; quote of the day only when the database answers.
pub(super) fn startup<M: Model + ?Sized>(state: &mut AppState, model: &M) {
    let mut blocks = format::welcome();

    match model.probe() {
        Ok(()) => {
            state.info("Welcome!\nAll systems are GO!");
            state.info("Fetching 'quote_of_the_day'...");
            match model.run(&Query::RandomOne) {
                Ok(QueryOutcome::Quotes(rows)) => {
                    if let Some(q) = rows.first() {
                        blocks.extend(format::quote_of_the_day(q));
                    }
                }
                Ok(other) => logw!("Quote of the day: unexpected outcome {other:?}"),
                Err(e) => state.error(e.to_string()),
            }
        }
        Err(e) => {
            state.info("Welcome!");
            state.error(e.to_string());
            state.error("Queries will fail until the database is available.");
        }
    }
    state.show(blocks);
}
