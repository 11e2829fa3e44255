// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use happy_quotes::{
    config::{consts::{APP_TITLE, WINDOW_H, WINDOW_W}, options::AppOptions},
    gui, log,
};

fn main() {
    log::init_default_file();
    let options = AppOptions::from_env();

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, options) {
        eprintln!("GUI failed: {e}");
        std::process::exit(1);
    }
}
