// src/gui/actions/export.rs
use log::{ error, info };

use crate::{
    config::{ consts::DEFAULT_OUT_DIR, options::OutputFormat },
    core::{ html, sanitize::sanitize_filename },
    file,
    gui::app::App,
    render::{ self, Fragment },
};

/// Save the displayed device as a standalone HTML page under `out/`.
pub fn export(app: &mut App) {
    let (title, page) = {
        let Some((image, sheet)) = super::displayed(app) else {
            app.status("Nothing to export");
            return;
        };
        let Fragment::Device { title, .. } = image else {
            return;
        };
        let doc = html::page(title, &render::html::fragment(image), &render::html::fragment(sheet));
        (title.clone(), doc)
    };

    let export = &mut app.state.options.export;
    export.format = OutputFormat::Html;
    export.set_path(&format!(
        "{}/{}.{}",
        DEFAULT_OUT_DIR,
        sanitize_filename(&title),
        OutputFormat::Html.ext()
    ));

    match file::write_export(export, &page) {
        Ok(Some(p)) => {
            info!("Export: {} → {}", title, p.display());
            app.status(format!("Saved {}", p.display()));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Export: failed: {}", e);
            app.status(format!("Export failed: {e}"));
        }
    }
}
