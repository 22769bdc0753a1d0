// src/gui/components/device_panel.rs
//
// Image region: device title and picture. A picture that fails to load is
// swapped for the placeholder.

use eframe::egui::{ self, load::SizeHint };

use crate::{ gui::app::App, render::Fragment };

const IMAGE_MAX_W: f32 = 300.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(ctl) = app.controller.as_ref() else {
        return;
    };

    let Some(Fragment::Device { title, image_url, fallback_url }) = ctl.surface().image.content() else {
        ui.weak("No device");
        return;
    };

    ui.heading(title);
    ui.add_space(6.0);

    let uri = pick_uri(ui.ctx(), image_url, fallback_url);
    ui.add(
        egui::Image::new(uri)
            .max_width(IMAGE_MAX_W)
            .maintain_aspect_ratio(true),
    );
}

/// The device picture, unless it's empty or the loader already gave up on it.
fn pick_uri(ctx: &egui::Context, image_url: &str, fallback_url: &str) -> String {
    if image_url.trim().is_empty() {
        return s!(fallback_url);
    }
    match ctx.try_load_image(image_url, SizeHint::default()) {
        Ok(_) => s!(image_url),
        Err(_) => s!(fallback_url),
    }
}
