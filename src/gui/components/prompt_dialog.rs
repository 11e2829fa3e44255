// src/gui/components/prompt_dialog.rs
//
// Modal for the one parameter a query needs: a list to pick from, or a
// number to type. Escape or a click outside cancels.

use eframe::egui;

use crate::{
    catalog::ParamKind,
    config::state::{Mode, PromptInput},
    gui::{actions::Action, app::App},
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let (state, queue) = app.state_and_queue();
    let Mode::AwaitingParameter(prompt) = &mut state.mode else { return };

    let title = match prompt.query.param() {
        ParamKind::Author => "Choose an author",
        ParamKind::Tag => "Choose a tag",
        ParamKind::Count | ParamKind::None => "Enter a number",
    };

    let modal = egui::Modal::new(egui::Id::new("parameter_prompt")).show(ctx, |ui| {
        ui.set_width(360.0);
        ui.heading(title);
        ui.label(prompt.query.label());
        ui.separator();

        match &mut prompt.input {
            PromptInput::Choice { options, selected } => {
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for (i, name) in options.iter().enumerate() {
                        let resp = ui.selectable_label(*selected == Some(i), name.as_str());
                        if resp.clicked() {
                            *selected = Some(i);
                        }
                        if resp.double_clicked() {
                            *selected = Some(i);
                            queue.push(Action::Submit);
                        }
                    }
                });
            }
            PromptInput::Count { text, max } => {
                ui.label(format!("Enter a number between 1 and {max}:"));
                let edit = ui.text_edit_singleline(text);
                edit.request_focus();
                if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    queue.push(Action::Submit);
                }
            }
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Confirm").clicked() {
                queue.push(Action::Submit);
            }
            if ui.button("Cancel").clicked() {
                queue.push(Action::CancelPrompt);
            }
        });
    });

    if modal.should_close() && !queue.contains(&Action::Submit) {
        queue.push(Action::CancelPrompt);
    }
}
