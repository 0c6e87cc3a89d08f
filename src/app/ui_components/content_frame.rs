use crate::app::{
    event_msg::{Cmd, CmdOrBatch, Msg},
    styles::Palette,
    tea_model::{LayoutConfig, INITIAL_HEIGHT, INITIAL_WIDTH},
    ui_components::{Block, Component, DynamicSize},
};
use ratatui::{layout::Rect, text::Text, widgets::Paragraph, Frame};
use std::rc::Rc;

/// Size of the region right of the sidebar, as last seen in a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSize {
    pub width: u16,
    pub height: u16,
}

impl ContentSize {
    pub fn resized(config: &LayoutConfig, terminal_width: u16, terminal_height: u16) -> Self {
        let (width, height) = config.content_size(terminal_width, terminal_height);
        Self { width, height }
    }

    pub fn initial(config: &LayoutConfig) -> Self {
        Self::resized(config, INITIAL_WIDTH, INITIAL_HEIGHT)
    }

    /// Applies a resize message, ignoring everything else.
    pub fn apply(&mut self, config: &LayoutConfig, msg: &Msg) {
        if let Msg::Resize(width, height) = msg {
            *self = Self::resized(config, *width, *height);
        }
    }
}

/// Bordered frame the active view's text is drawn inside.
///
/// The cached size only tracks resizes. Rendering always uses the size the
/// caller passes in, which the controller derives from the same layout
/// config, so the two agree after every resize.
#[derive(Debug, Clone)]
pub struct ContentFrame {
    palette: Rc<Palette>,
    config: LayoutConfig,
    size: ContentSize,
}

impl ContentFrame {
    pub fn new(palette: Rc<Palette>, config: &LayoutConfig) -> Self {
        Self {
            palette,
            config: *config,
            size: ContentSize::initial(config),
        }
    }

    pub fn render(
        &self,
        content: Text<'static>,
        width: u16,
        height: u16,
        frame: &mut Frame,
        area: Rect,
    ) {
        let area = Rect {
            width: area.width.min(width),
            height: area.height.min(height),
            ..area
        };
        let rule = &self.palette.content;

        let paragraph = Paragraph::new(content)
            .style(rule.style)
            .alignment(rule.alignment)
            .block(Block::from_rule(rule).into_inner());
        frame.render_widget(paragraph, area);
    }
}

impl Component for ContentFrame {
    fn update(&mut self, msg: &Msg) -> CmdOrBatch<Cmd> {
        self.size.apply(&self.config, msg);
        CmdOrBatch::none()
    }
}

impl DynamicSize for ContentFrame {
    fn get_height(&self) -> u16 {
        self.size.height
    }

    fn get_width(&self) -> u16 {
        self.size.width
    }
}
