// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,search,poll_replies}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod search;  // src/gui/actions/search.rs

pub use copy::copy;
pub use export::export;
pub use search::{ poll_replies, search };

use crate::{ gui::app::App, render::Fragment };

/// What the two regions currently show, if a device is displayed.
#[inline]
pub(super) fn displayed(app: &App) -> Option<(&Fragment, &Fragment)> {
    let surface = app.controller.as_ref()?.surface();
    match (surface.image.content()?, surface.results.content()?) {
        (img @ Fragment::Device { .. }, sheet @ Fragment::Sheet(_)) => Some((img, sheet)),
        _ => None,
    }
}
