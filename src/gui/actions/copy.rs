// src/gui/actions/copy.rs
use eframe::egui;
use log::{ debug, info };

use crate::{ gui::app::App, render::text };

/// Copy the displayed device as plain text.
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = {
        let Some((image, sheet)) = super::displayed(app) else {
            app.status("Nothing to copy");
            debug!("Copy: Clicked, but no device is displayed");
            return;
        };
        join!(text::fragment(image), "\n", &text::fragment(sheet))
    };

    info!("Copy: {} chars", txt.len());
    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
