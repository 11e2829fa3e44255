// src/gui/components/console_panel.rs
use eframe::egui::{self, Color32, RichText};

use crate::{
    config::state::Level,
    gui::{actions::Action, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.strong("Console");
        let clear = ui.button("Clear");
        if clear.hovered() {
            app.hint = Some("Clear the console messages");
        }
        if clear.clicked() {
            app.dispatch(Action::ClearConsole);
        }
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("console_scroll")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in &app.state.console {
                let text = RichText::new(&line.text).monospace();
                match line.level {
                    Level::Info => ui.label(text),
                    Level::Error => ui.label(text.color(Color32::RED)),
                };
            }
        });
}
