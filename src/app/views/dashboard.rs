use crate::app::{
    event_msg::{Cmd, CmdOrBatch, Msg},
    styles::Palette,
    tea_model::LayoutConfig,
    ui_components::{Component, ContentSize, DynamicSize},
    views::{check_line, heading_line, section_line, value_line, View, ViewId},
};
use ratatui::text::{Line, Text};
use std::rc::Rc;

const FEATURES: [&str; 5] = [
    "Modern TUI interface",
    "Responsive design",
    "Keyboard navigation",
    "Multiple views",
    "Styled components",
];

#[derive(Debug, Clone)]
pub struct DashboardView {
    palette: Rc<Palette>,
    config: LayoutConfig,
    size: ContentSize,
}

impl DashboardView {
    pub fn new(palette: Rc<Palette>, config: &LayoutConfig) -> Self {
        Self {
            palette,
            config: *config,
            size: ContentSize::initial(config),
        }
    }
}

impl Component for DashboardView {
    fn update(&mut self, msg: &Msg) -> CmdOrBatch<Cmd> {
        self.size.apply(&self.config, msg);
        CmdOrBatch::none()
    }
}

impl DynamicSize for DashboardView {
    fn get_height(&self) -> u16 {
        self.size.height
    }

    fn get_width(&self) -> u16 {
        self.size.width
    }
}

impl View for DashboardView {
    fn id(&self) -> ViewId {
        ViewId::Dashboard
    }

    fn description(&self) -> &'static str {
        "Overview and quick actions"
    }

    fn heading(&self) -> &'static str {
        "📊 Dashboard"
    }

    fn render(&self) -> Text<'static> {
        let palette = &*self.palette;
        let stat = palette.text_with(palette.info);

        let mut lines = vec![
            heading_line(palette, self.heading()),
            Line::default(),
            Line::styled("Welcome to the Ratatui TUI Prototype!", palette.text),
            Line::default(),
            section_line(palette, "Features:"),
        ];
        lines.extend(FEATURES.map(|feature| check_line(palette, true, feature)));

        lines.push(Line::default());
        lines.push(section_line(palette, "Quick Stats:"));
        lines.push(value_line("Views", ViewId::ALL.len().to_string(), stat));
        lines.push(value_line("Components", "3", stat));
        lines.push(value_line("Themes", "2", stat));

        lines.push(Line::default());
        lines.push(section_line(palette, "Getting Started:"));
        lines.push(Line::raw(
            "Use the number keys (1-4) to navigate between views:",
        ));
        lines.extend(ViewId::ALL.into_iter().map(|id| {
            if id == self.id() {
                Line::raw(format!("{} - {} (current)", id.key(), id.title()))
            } else {
                Line::raw(format!("{} - {}", id.key(), id.title()))
            }
        }));
        lines.push(Line::default());
        lines.push(Line::raw("Press 'q' or Ctrl+C to quit."));

        Text::from(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> DashboardView {
        DashboardView::new(Rc::new(Palette::default()), &LayoutConfig::default())
    }

    #[test]
    fn test_lists_navigation_keys() {
        let rendered: Vec<String> = view()
            .render()
            .lines
            .iter()
            .map(|line| line.to_string())
            .collect();

        assert!(rendered.contains(&"1 - Dashboard (current)".to_string()));
        assert!(rendered.contains(&"2 - Data Browser".to_string()));
        assert!(rendered.contains(&"4 - Help".to_string()));
        assert!(rendered.contains(&"• Views: 4".to_string()));
    }

    #[test]
    fn test_feature_marks_use_success_style() {
        let view = view();
        let text = view.render();
        let marks = text
            .lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .filter(|span| span.content == "✓")
            .collect::<Vec<_>>();

        assert_eq!(marks.len(), FEATURES.len());
        assert!(marks
            .iter()
            .all(|span| span.style == view.palette.success_text));
    }

    #[test]
    fn test_init_and_keys_return_none() {
        let mut view = view();
        assert_eq!(view.init(), CmdOrBatch::none());
        assert_eq!(view.update(&Msg::key("enter")), CmdOrBatch::none());
        assert_eq!((view.get_width(), view.get_height()), (60, 20));
    }
}
