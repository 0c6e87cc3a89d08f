use crate::app::styles::StyleRule;
use ratatui::widgets::{Block as RatatuiBlock, Borders};

/// A ratatui block dressed according to a palette rule.
pub struct Block {
    inner: RatatuiBlock<'static>,
}

impl Block {
    pub fn from_rule(rule: &StyleRule) -> Self {
        let mut block = RatatuiBlock::new()
            .style(rule.style)
            .padding(rule.padding);

        if let Some(border_type) = rule.border {
            block = block
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(rule.border_style);
        }

        Self { inner: block }
    }

    pub fn into_inner(self) -> RatatuiBlock<'static> {
        self.inner
    }
}
