// src/gui/actions/search.rs
use std::thread;

use eframe::egui;
use log::debug;

use crate::gui::app::App;

/// Start a lookup for the text in the search field. The request runs on its own
/// thread; the reply comes back through `app.reply_rx`.
pub fn search(app: &mut App, ctx: &egui::Context) {
    let Some(ctl) = app.controller.as_mut() else {
        return;
    };

    let query = app.state.gui.query.clone();

    // → Empty input is rendered as an error right here, nothing is sent ←
    let ticket = match ctl.begin(&query) {
        Ok(t) => t,
        Err(e) => {
            debug!("Search: rejected before sending ({})", e.kind());
            return;
        }
    };

    app.state.gui.last_query = Some(s!(ticket.query()));

    let tx = app.reply_tx.clone();
    let ctx = ctx.clone();
    thread::spawn(move || {
        let reply = ticket.execute();
        // Receiver only goes away with the window.
        let _ = tx.send(reply);
        ctx.request_repaint();
    });
}

/// Hand finished replies to the controller; superseded ones are dropped there.
pub fn poll_replies(app: &mut App) {
    let Some(ctl) = app.controller.as_mut() else {
        return;
    };
    while let Ok(reply) = app.reply_rx.try_recv() {
        let seq = reply.seq();
        if ctl.finish(reply).is_none() {
            debug!("Search: reply #{} ignored, newer search pending", seq);
        }
    }
}
