// src/gui/app.rs
use std::{error::Error, fs};

use eframe::egui::{self, ViewportCommand};

use crate::{
    catalog::Catalog,
    config::{consts::APP_TITLE, options::AppOptions, state::AppState},
    store::Database,
};

use super::{
    actions::{self, Action},
    components::{console_panel, dialogs, footer, menu_bar, prompt_dialog, response_panel},
};

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(|_cc| Ok(Box::new(App::new(options)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth, replaced wholesale by the controller
    pub state: AppState,
    pub model: Catalog,
    pub options: AppOptions,

    // queued by the views this frame, applied after drawing
    pending: Vec<Action>,

    // footer text while something is hovered
    pub hint: Option<&'static str>,

    // last response revision the panel drew
    pub shown_rev: u64,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        logf!("Init: database={}", options.db.path.display());
        Self {
            state: AppState::default(),
            model: Catalog::new(Database::new(&options.db.path)),
            options,
            pending: vec![Action::Startup],
            hint: None,
            shown_rev: 0,
        }
    }

    #[inline]
    pub fn dispatch(&mut self, action: Action) { self.pending.push(action); }

    /// Split borrow for views that edit the prompt buffer and queue actions.
    pub(super) fn state_and_queue(&mut self) -> (&mut AppState, &mut Vec<Action>) {
        (&mut self.state, &mut self.pending)
    }

    /// Read the tutorial from disk; the controller handles a missing file.
    pub fn read_tutorial(&self) -> Option<String> {
        let path = &self.options.gui.tutorial_path;
        match fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(e) => {
                logw!("Tutorial: {}: {e}", path.display());
                None
            }
        }
    }

    fn flush(&mut self) {
        for action in std::mem::take(&mut self.pending) {
            let state = std::mem::take(&mut self.state);
            self.state = actions::handle(state, &self.model, action);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Window close asks first, same as Home > Quit.
        if ctx.input(|i| i.viewport().close_requested()) && !self.state.quit_confirmed {
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            self.dispatch(Action::RequestQuit);
        }

        // Footer shows last frame's hover hint.
        let hint = self.hint.take();

        egui::TopBottomPanel::top("menu").show(ctx, |ui| menu_bar::draw(ui, self));
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| footer::draw(ui, hint));
        egui::TopBottomPanel::bottom("console")
            .resizable(true)
            .default_height(190.0)
            .show(ctx, |ui| console_panel::draw(ui, self));
        egui::CentralPanel::default().show(ctx, |ui| response_panel::draw(ui, self));

        prompt_dialog::draw(ctx, self);
        dialogs::draw(ctx, self);

        if !self.pending.is_empty() {
            self.flush();
            ctx.request_repaint();
        }

        if self.state.quit_confirmed {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}
