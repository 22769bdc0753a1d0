// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Contents of the search field
    pub query: String,

    /// Last query actually sent (shown next to the status line)
    pub last_query: Option<String>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1000,
            window_h: 720,
            query: s!(),
            last_query: None,
        }
    }
}

impl GuiState {
    /// Status-line note for the last query sent, if any.
    pub fn last_search_label(&self) -> Option<String> {
        self.last_query.as_deref().map(|q| format!("Last search: {q}"))
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_search_label_follows_last_query() {
        let mut gui = GuiState::default();
        assert_eq!(gui.last_search_label(), None);

        gui.last_query = Some(s!("Samsung S24 Ultra"));
        assert_eq!(gui.last_search_label().as_deref(), Some("Last search: Samsung S24 Ultra"));
    }
}
