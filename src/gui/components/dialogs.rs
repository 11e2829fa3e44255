// src/gui/components/dialogs.rs
//
// About, tutorial and the quit question.

use eframe::egui::{self, Align2, RichText};

use crate::{
    config::state::Dialog,
    gui::{actions::Action, app::App},
};

const ABOUT: &str = "This is the Happy Quotes program,\n with quotes to brighten your day.";

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(dialog) = &app.state.dialog else { return };
    let mut action = None;

    match dialog {
        Dialog::About => {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(ABOUT);
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    if ui.button("OK").clicked() {
                        action = Some(Action::CloseDialog);
                    }
                });
        }
        Dialog::Tutorial(text) => {
            let mut open = true;
            egui::Window::new("TUTORIAL")
                .open(&mut open)
                .default_size([640.0, 480.0])
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.label(RichText::new(text.as_str()).monospace());
                    });
                });
            if !open {
                action = Some(Action::CloseDialog);
            }
        }
        Dialog::ConfirmQuit => {
            let modal = egui::Modal::new(egui::Id::new("confirm_quit")).show(ctx, |ui| {
                ui.heading("Quit?");
                ui.label("Do you really want to quit?");
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        action = Some(Action::ConfirmQuit(true));
                    }
                    if ui.button("No").clicked() {
                        action = Some(Action::ConfirmQuit(false));
                    }
                });
            });
            if action.is_none() && modal.should_close() {
                action = Some(Action::ConfirmQuit(false));
            }
        }
    }

    if let Some(a) = action {
        app.dispatch(a);
    }
}
