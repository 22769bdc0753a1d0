// src/gui/components/search_bar.rs
//
// Query field + Search/Copy/Export buttons + spinner and status line.
// Enter in the field searches, same as the button.

use eframe::egui::{ self, widgets::Spinner };
use log::debug;

use crate::gui::{ actions, app::App };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Device:");

        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query)
                .hint_text("e.g. Samsung S24 Ultra")
                .desired_width(320.0),
        );
        let enter = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let green = egui::Color32::from_rgb(40, 160, 80);
        let button_search = ui.add_enabled(
            app.controller.is_some(),
            egui::Button::new(egui::RichText::new("Search").color(egui::Color32::WHITE).strong())
                .fill(green),
        );

        if button_search.clicked() || enter {
            debug!("UI: search requested (enter={})", enter);
            actions::search(app, ui.ctx());
            if enter {
                field.request_focus();
            }
        }

        ui.separator();

        let can_save = !app.running() && actions::displayed(app).is_some();
        if ui.add_enabled(can_save, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui
            .add_enabled(can_save, egui::Button::new("Export"))
            .on_hover_text("Save as HTML page")
            .clicked()
        {
            actions::export(app);
        }

        if app.running() {
            ui.add(Spinner::new().size(16.0));
        }

        let status = match app.controller.as_ref() {
            Some(c) => c.surface().loading.status.clone(),
            None => s!("No usable endpoint, see .store/debug.log"),
        };
        ui.label(status);

        if let Some(last) = app.state.gui.last_search_label() {
            ui.weak(last);
        }
    });
    ui.add_space(4.0);
}
