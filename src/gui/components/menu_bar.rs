// src/gui/components/menu_bar.rs
//
// Home / Queries / Help. Queries are disabled while a prompt is open.

use eframe::egui;

use crate::{catalog::QueryKind, gui::{actions::Action, app::App}};

fn hint_for(kind: QueryKind) -> &'static str {
    match kind {
        QueryKind::ByAuthor => "Choose an author and list all their quotes",
        QueryKind::RandomN => "Pick a number and get that many random quotes",
        QueryKind::RandomOne => "One random quote",
        QueryKind::TotalCount => "How many quotes are in the database",
        QueryKind::ByTag => "Choose a tag and list every quote carrying it",
        QueryKind::TopAuthors => "The five authors with the most quotes",
        QueryKind::CommentsForRandomQuote => "A random quote and all its comments",
        QueryKind::AuthorBio => "Choose an author and read their biography",
        QueryKind::AllQuotes => "Every quote in the database",
        QueryKind::Surprise => "Quotes by a random author or a random tag",
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::MenuBar::new().ui(ui, |ui| {
        ui.menu_button("Home", |ui| {
            if ui.button("Quit").clicked() {
                app.dispatch(Action::RequestQuit);
            }
        });

        let idle = app.state.is_idle();
        ui.add_enabled_ui(idle, |ui| {
            ui.menu_button("Queries", |ui| {
                for kind in QueryKind::ALL {
                    let resp = ui.button(kind.label());
                    if resp.hovered() {
                        app.hint = Some(hint_for(kind));
                    }
                    if resp.clicked() {
                        logf!("UI: Queries > {}", kind.label());
                        app.dispatch(Action::Select(kind));
                    }
                }
            });
        });

        ui.menu_button("Help", |ui| {
            if ui.button("Tutorial").clicked() {
                let text = app.read_tutorial();
                app.dispatch(Action::ShowTutorial(text));
            }
            if ui.button("About").clicked() {
                app.dispatch(Action::ShowAbout);
            }
        });
    });
}
