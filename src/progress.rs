// src/progress.rs
/// Loading indicator owned by the host (spinner, status line, ...).
/// The controller calls `show` when a request goes out and `hide` once when
/// the latest request comes back. An empty query never shows it; it only hides
/// an indicator left on by the search it supersedes.
pub trait LoadingIndicator {
    fn show(&mut self) {}
    fn hide(&mut self) {}
}

/// A no-op indicator.
pub struct NullIndicator;
impl LoadingIndicator for NullIndicator {}

/// Plain flag, for hosts that poll (GUI frame loop, tests).
#[derive(Clone, Debug, Default)]
pub struct FlagIndicator {
    pub visible: bool,
    pub shown: usize,
    pub hidden: usize,
}

impl LoadingIndicator for FlagIndicator {
    fn show(&mut self) {
        self.visible = true;
        self.shown += 1;
    }
    fn hide(&mut self) {
        self.visible = false;
        self.hidden += 1;
    }
}
