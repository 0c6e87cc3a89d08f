use crate::app::{
    event_msg::{Cmd, CmdOrBatch, Msg},
    styles::Palette,
    tea_model::{LayoutConfig, INITIAL_WIDTH},
    ui_components::{Block, Component, DynamicSize},
};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::rc::Rc;

pub const APP_TITLE: &str = "Ratatui TUI";

/// Title bar across the top of the screen.
#[derive(Debug, Clone)]
pub struct Header {
    palette: Rc<Palette>,
    title: &'static str,
    width: u16,
    height: u16,
}

impl Header {
    pub fn new(palette: Rc<Palette>, config: &LayoutConfig) -> Self {
        Self {
            palette,
            title: APP_TITLE,
            width: INITIAL_WIDTH,
            height: config.header_height,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        };
        let rule = &self.palette.header;

        let paragraph = Paragraph::new(self.title)
            .style(rule.style)
            .alignment(rule.alignment)
            .block(Block::from_rule(rule).into_inner());
        frame.render_widget(paragraph, area);
    }
}

impl Component for Header {
    fn update(&mut self, msg: &Msg) -> CmdOrBatch<Cmd> {
        if let Msg::Resize(width, _) = msg {
            self.width = *width;
        }
        CmdOrBatch::none()
    }
}

impl DynamicSize for Header {
    fn get_height(&self) -> u16 {
        self.height
    }

    fn get_width(&self) -> u16 {
        self.width
    }
}
