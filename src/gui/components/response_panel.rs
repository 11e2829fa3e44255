// src/gui/components/response_panel.rs
//
// Read-only rendering of `state.response`: centered coloured lines, plus
// plain tables for tabular results.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::state::{Block, ResponseLine, Tone},
    gui::app::App,
};

const BLUE: Color32 = Color32::from_rgb(0x1f, 0x4f, 0xd1);
const GREEN: Color32 = Color32::from_rgb(0x1b, 0x8a, 0x3c);

fn styled(text: &str, tone: Tone) -> RichText {
    let rt = RichText::new(text).size(15.0);
    match tone {
        Tone::Heading => rt.strong(),
        Tone::Primary => rt.color(BLUE).strong(),
        Tone::Secondary | Tone::Highlight => rt.color(GREEN).strong(),
        Tone::Notice => rt.italics(),
        Tone::Error => rt.color(Color32::RED).strong(),
    }
}

fn line(ui: &mut egui::Ui, l: &ResponseLine) {
    // One label per text line keeps every line centered.
    for part in l.text.lines() {
        ui.label(styled(part, l.tone));
    }
    ui.add_space(4.0);
}

fn table(ui: &mut egui::Ui, idx: usize, headers: &[String], rows: &[Vec<String>]) {
    ui.push_id(("response_table", idx), |ui| {
        ui.set_max_width(520.0);
        let mut t = TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for (ci, _) in headers.iter().enumerate() {
            t = t.column(if ci == 1 { Column::remainder().at_least(160.0) } else { Column::auto().at_least(60.0) });
        }
        t.header(22.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for (ri, r) in rows.iter().enumerate() {
                let tone = if ri % 2 == 0 { Tone::Primary } else { Tone::Secondary };
                body.row(20.0, |mut row| {
                    for cell in r {
                        row.col(|ui| {
                            ui.label(styled(cell, tone));
                        });
                    }
                });
            }
        });
    });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.strong("Query response");
    ui.separator();

    let mut area = egui::ScrollArea::vertical()
        .id_salt("response_scroll")
        .auto_shrink([false, false]);
    if app.shown_rev != app.state.response_rev {
        // New result: start from the top.
        area = area.vertical_scroll_offset(0.0);
        app.shown_rev = app.state.response_rev;
    }

    area.show(ui, |ui| {
        ui.vertical_centered(|ui| {
            for (i, block) in app.state.response.iter().enumerate() {
                match block {
                    Block::Line(l) => line(ui, l),
                    Block::Table { headers, rows } => table(ui, i, headers, rows),
                }
            }
        });
    });
}
