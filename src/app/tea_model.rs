use crate::app::{
    error::Result,
    styles::Palette,
    ui_components::{ContentFrame, Header, Sidebar},
    views::{View, ViewId, ViewRegistry},
};
use std::rc::Rc;

pub const INITIAL_WIDTH: u16 = 80;
pub const INITIAL_HEIGHT: u16 = 24;

/// Fixed chrome sizes. Everything else is derived from the terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub header_height: u16,
    pub sidebar_width: u16,
    pub status_height: u16,
    pub rounded_borders: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 3,
            sidebar_width: 20,
            status_height: 1,
            rounded_borders: true,
        }
    }
}

impl LayoutConfig {
    /// Rows taken by the header and the status bar together.
    pub fn chrome_height(&self) -> u16 {
        self.header_height.saturating_add(self.status_height)
    }

    /// Size of the region right of the sidebar, clamped at zero.
    pub fn content_size(&self, terminal_width: u16, terminal_height: u16) -> (u16, u16) {
        (
            terminal_width.saturating_sub(self.sidebar_width),
            terminal_height.saturating_sub(self.chrome_height()),
        )
    }

    pub fn sidebar_height(&self, terminal_height: u16) -> u16 {
        terminal_height.saturating_sub(self.chrome_height())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub active_view: ViewId,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_view: ViewId::Dashboard,
            terminal_width: INITIAL_WIDTH,
            terminal_height: INITIAL_HEIGHT,
            quitting: false,
        }
    }
}

#[derive(Debug)]
pub struct Model {
    pub config: LayoutConfig,
    pub state: AppState,
    pub palette: Rc<Palette>,
    // Chrome
    pub header: Header,
    pub sidebar: Sidebar,
    pub content: ContentFrame,
    // Fixed at startup, only the selector in `state` moves
    pub views: ViewRegistry,
}

impl Model {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        let palette = Rc::new(Palette::new(&config));

        Model {
            config,
            state: AppState::default(),
            header: Header::new(Rc::clone(&palette), &config),
            sidebar: Sidebar::new(Rc::clone(&palette), &config),
            content: ContentFrame::new(Rc::clone(&palette), &config),
            views: ViewRegistry::new(&palette, &config),
            palette,
        }
    }

    pub fn active_view(&self) -> Result<&dyn View> {
        self.views.get(self.state.active_view)
    }

    pub fn active_view_mut(&mut self) -> Result<&mut dyn View> {
        self.views.get_mut(self.state.active_view)
    }

    /// Content size the frame is rendered at, recomputed from the terminal size.
    pub fn content_dimensions(&self) -> (u16, u16) {
        self.config
            .content_size(self.state.terminal_width, self.state.terminal_height)
    }

    pub fn is_quitting(&self) -> bool {
        self.state.quitting
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model() {
        let model = Model::new();

        assert_eq!(model.state.active_view, ViewId::Dashboard);
        assert_eq!(model.state.terminal_width, 80);
        assert_eq!(model.state.terminal_height, 24);
        assert!(!model.is_quitting());
        assert_eq!(model.views.len(), 4);
        for id in ViewId::ALL {
            assert!(model.views.get(id).is_ok(), "view {} missing", id);
        }
    }

    #[test]
    fn test_content_size_subtracts_chrome() {
        let config = LayoutConfig::default();
        assert_eq!(config.content_size(80, 24), (60, 20));
        assert_eq!(config.sidebar_height(24), 20);
        assert_eq!(config.chrome_height(), 4);
    }

    #[test]
    fn test_content_size_clamps_at_zero() {
        let config = LayoutConfig::default();
        assert_eq!(config.content_size(0, 0), (0, 0));
        assert_eq!(config.content_size(19, 3), (0, 0));
        assert_eq!(config.content_size(21, 5), (1, 1));
        assert_eq!(config.sidebar_height(2), 0);
    }

    #[test]
    fn test_palette_is_shared() {
        let model = Model::new();
        // model, header, sidebar, content frame and four views
        assert_eq!(Rc::strong_count(&model.palette), 8);
    }
}
