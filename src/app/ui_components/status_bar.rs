use crate::app::{styles::Palette, ui_components::Block, views::ViewId};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
};

/// One-line footer naming the active view and the global keys.
#[derive(Debug, Clone, Copy)]
pub struct StatusBar<'a> {
    palette: &'a Palette,
    view: ViewId,
}

impl<'a> StatusBar<'a> {
    pub fn new(palette: &'a Palette, view: ViewId) -> Self {
        Self { palette, view }
    }

    pub fn status_text(&self) -> String {
        format!(
            "View: {} | Press 'q' to quit | 1-4 for navigation",
            self.view.display_name()
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rule = &self.palette.status_bar;

        Paragraph::new(self.status_text())
            .style(rule.style)
            .alignment(rule.alignment)
            .block(Block::from_rule(rule).into_inner())
            .render(area, buf);
    }
}
