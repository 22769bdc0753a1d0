// src/gui/components/spec_panel.rs
//
// Results region: the spec sheet (one striped grid per group) or the error.

use eframe::egui;

use crate::{
    gui::app::App,
    render::{ Fragment, SpecSheet },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(ctl) = app.controller.as_ref() else {
        return;
    };

    match ctl.surface().results.content() {
        Some(Fragment::Sheet(sheet)) => draw_sheet(ui, sheet),
        Some(Fragment::Error(msg)) => {
            let red = egui::Color32::from_rgb(220, 30, 30);
            ui.add_space(8.0);
            ui.colored_label(red, format!("❌ {msg}"));
        }
        Some(Fragment::Device { .. }) | None => {}
    }
}

fn draw_sheet(ui: &mut egui::Ui, sheet: &SpecSheet) {
    ui.heading(&sheet.heading);
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("spec_sheet_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for section in &sheet.sections {
                ui.add_space(6.0);
                ui.strong(format!("{} {}", section.icon(), section.title()));

                egui::Grid::new(section.title())
                    .num_columns(2)
                    .striped(true)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        for item in &section.items {
                            ui.label(egui::RichText::new(item.label).strong());
                            ui.add(egui::Label::new(item.value.as_str()).wrap());
                            ui.end_row();
                        }
                    });
            }

            ui.add_space(10.0);
            ui.small(sheet.source);
        });
}
