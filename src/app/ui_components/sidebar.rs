use crate::app::{
    event_msg::{Cmd, CmdOrBatch, Msg},
    styles::Palette,
    tea_model::{LayoutConfig, INITIAL_HEIGHT},
    ui_components::{Block, Component, DynamicSize},
    views::ViewId,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};
use std::rc::Rc;

/// One navigation entry. `id` is the view the entry selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: ViewId,
    pub label: &'static str,
    pub key: &'static str,
}

pub const SIDEBAR_ITEMS: [SidebarItem; 4] = [
    SidebarItem {
        id: ViewId::Dashboard,
        label: "📊 Dashboard",
        key: "1",
    },
    SidebarItem {
        id: ViewId::Data,
        label: "📁 Data Browser",
        key: "2",
    },
    SidebarItem {
        id: ViewId::Settings,
        label: "⚙️ Settings",
        key: "3",
    },
    SidebarItem {
        id: ViewId::Help,
        label: "❓ Help",
        key: "4",
    },
];

const SHORTCUTS: [&str; 3] = ["q - Quit", "1-4 - Navigate", "Ctrl+C - Quit"];

#[derive(Debug, Clone)]
pub struct Sidebar {
    palette: Rc<Palette>,
    config: LayoutConfig,
    width: u16,
    height: u16,
    items: Vec<SidebarItem>,
}

impl Sidebar {
    pub fn new(palette: Rc<Palette>, config: &LayoutConfig) -> Self {
        Self {
            palette,
            config: *config,
            width: config.sidebar_width,
            height: config.sidebar_height(INITIAL_HEIGHT),
            items: SIDEBAR_ITEMS.to_vec(),
        }
    }

    pub fn item_style(&self, active: bool) -> Style {
        self.palette.button_style(active)
    }

    /// Width of an item row and of the separator rule.
    fn item_width(&self) -> usize {
        usize::from(self.width.saturating_sub(4))
    }

    pub fn menu_text(&self, current: ViewId) -> Text<'static> {
        let item_width = self.item_width();
        let mut lines = vec![
            Line::styled("Navigation", self.palette.subtitle),
            Line::default(),
        ];

        lines.extend(self.items.iter().map(|item| {
            let label = format!("{} {}", item.key, item.label);
            Line::from(Span::styled(
                format!("{:<width$}", label, width = item_width),
                self.item_style(item.id == current),
            ))
        }));

        lines.push(Line::default());
        lines.push(Line::raw("─".repeat(item_width)));
        lines.push(Line::default());
        lines.push(Line::styled("Shortcuts:", self.palette.muted_text));
        lines.extend(
            SHORTCUTS
                .iter()
                .map(|shortcut| Line::styled(*shortcut, self.palette.muted_text)),
        );

        Text::from(lines)
    }

    pub fn render(&self, current: ViewId, frame: &mut Frame, area: Rect) {
        let area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        };
        let rule = &self.palette.sidebar;

        let paragraph = Paragraph::new(self.menu_text(current))
            .style(rule.style)
            .block(Block::from_rule(rule).into_inner());
        frame.render_widget(paragraph, area);
    }
}

impl Component for Sidebar {
    fn update(&mut self, msg: &Msg) -> CmdOrBatch<Cmd> {
        if let Msg::Resize(_, height) = msg {
            self.height = self.config.sidebar_height(*height);
        }
        CmdOrBatch::none()
    }
}

impl DynamicSize for Sidebar {
    fn get_height(&self) -> u16 {
        self.height
    }

    fn get_width(&self) -> u16 {
        self.width
    }
}
