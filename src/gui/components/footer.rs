// src/gui/components/footer.rs
use eframe::egui;

use crate::config::consts::APP_TITLE;

pub fn draw(ui: &mut egui::Ui, hint: Option<&'static str>) {
    ui.horizontal(|ui| match hint {
        Some(h) => {
            ui.label(h);
        }
        None => {
            ui.label(format!(
                "{APP_TITLE}, v{} | Rust | egui",
                env!("CARGO_PKG_VERSION")
            ));
        }
    });
}
