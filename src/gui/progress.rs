// src/gui/progress.rs
use std::time::Instant;

use crate::progress::LoadingIndicator;

/// Spinner flag + status line for the top bar.
pub struct GuiProgress {
    pub running: bool,
    pub status: String,
    started: Option<Instant>,
}

impl Default for GuiProgress {
    fn default() -> Self {
        Self { running: false, status: s!("Idle"), started: None }
    }
}

impl GuiProgress {
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }
}

impl LoadingIndicator for GuiProgress {
    fn show(&mut self) {
        self.running = true;
        self.started = Some(Instant::now());
        self.set_status("Searching…");
    }
    fn hide(&mut self) {
        self.running = false;
        match self.started.take() {
            Some(t) => self.set_status(format!("Done ({} ms)", t.elapsed().as_millis())),
            None => self.set_status("Done"),
        }
    }
}
