use crate::app::{
    event_msg::{Cmd, CmdOrBatch, Msg},
    styles::Palette,
    tea_model::LayoutConfig,
    ui_components::{Component, ContentSize, DynamicSize},
    views::{check_line, heading_line, key_line, section_line, View, ViewId},
};
use ratatui::text::{Line, Span, Text};
use std::rc::Rc;

const SHORTCUTS: [(&str, &str); 4] = [
    ("1-4", "Switch between views"),
    ("Tab", "Focus next element"),
    ("Enter", "Activate/Confirm"),
    ("Escape", "Cancel/Go back"),
];

const FEATURES: [&str; 5] = [
    "Responsive design",
    "Modern styling",
    "Keyboard navigation",
    "Multiple views",
    "Component-based architecture",
];

const TIPS: [&str; 3] = [
    "Resize your terminal window to see responsive design",
    "Use number keys for quick navigation",
    "Check the status bar for current view information",
];

#[derive(Debug, Clone)]
pub struct HelpView {
    palette: Rc<Palette>,
    config: LayoutConfig,
    size: ContentSize,
}

impl HelpView {
    pub fn new(palette: Rc<Palette>, config: &LayoutConfig) -> Self {
        Self {
            palette,
            config: *config,
            size: ContentSize::initial(config),
        }
    }

    /// One line per view, built from the view ids so it stays in sync with
    /// the sidebar.
    fn navigation_lines(&self) -> Vec<Line<'static>> {
        ViewId::ALL
            .into_iter()
            .map(|id| {
                let summary = match id {
                    ViewId::Dashboard => "Overview and quick actions",
                    ViewId::Data => "View and manage data",
                    ViewId::Settings => "Configure application",
                    ViewId::Help => "This documentation",
                };
                Line::from(vec![
                    Span::raw("• "),
                    Span::styled(id.key(), self.palette.muted_text),
                    Span::raw(format!(" - {}: {}", id.title(), summary)),
                ])
            })
            .collect()
    }
}

impl Component for HelpView {
    fn update(&mut self, msg: &Msg) -> CmdOrBatch<Cmd> {
        self.size.apply(&self.config, msg);
        CmdOrBatch::none()
    }
}

impl DynamicSize for HelpView {
    fn get_height(&self) -> u16 {
        self.size.height
    }

    fn get_width(&self) -> u16 {
        self.size.width
    }
}

impl View for HelpView {
    fn id(&self) -> ViewId {
        ViewId::Help
    }

    fn description(&self) -> &'static str {
        "Documentation and help"
    }

    fn heading(&self) -> &'static str {
        "❓ Help & Documentation"
    }

    fn render(&self) -> Text<'static> {
        let palette = &*self.palette;

        let mut lines = vec![
            heading_line(palette, self.heading()),
            Line::default(),
            section_line(palette, "About Ratatui TUI:"),
            Line::raw("This is a prototype Terminal User Interface built with Rust and Ratatui."),
            Line::raw("It demonstrates modern TUI patterns and best practices."),
            Line::default(),
            section_line(palette, "Navigation:"),
        ];
        lines.extend(self.navigation_lines());

        lines.push(Line::default());
        lines.push(section_line(palette, "Keyboard Shortcuts:"));
        lines.push(Line::from(vec![
            Span::raw("• "),
            Span::styled("q", palette.muted_text),
            Span::raw(" or "),
            Span::styled("Ctrl+C", palette.muted_text),
            Span::raw(" - Quit application"),
        ]));
        lines.extend(SHORTCUTS.map(|(key, action)| key_line(palette, key, action)));

        lines.push(Line::default());
        lines.push(section_line(palette, "Features:"));
        lines.extend(FEATURES.map(|feature| check_line(palette, true, feature)));

        lines.push(Line::default());
        lines.push(section_line(palette, "Tips:"));
        lines.extend(TIPS.map(|tip| Line::raw(format!("• {}", tip))));

        Text::from(lines)
    }
}
