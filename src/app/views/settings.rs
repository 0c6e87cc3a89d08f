use crate::app::{
    event_msg::{Cmd, CmdOrBatch, Msg},
    styles::Palette,
    tea_model::LayoutConfig,
    ui_components::{Component, ContentSize, DynamicSize},
    views::{check_line, heading_line, key_line, section_line, View, ViewId},
};
use ratatui::text::{Line, Span, Text};
use std::rc::Rc;

const DISPLAY_SETTINGS: [(&str, bool); 4] = [
    ("Show borders", true),
    ("Show status bar", true),
    ("Show navigation", true),
    ("Compact mode", false),
];

const SHORTCUTS: [(&str, &str); 5] = [
    ("1-4", "Navigate views"),
    ("q", "Quit application"),
    ("Ctrl+C", "Force quit"),
    ("Tab", "Focus next element"),
    ("Enter", "Activate/Confirm"),
];

#[derive(Debug, Clone)]
pub struct SettingsView {
    palette: Rc<Palette>,
    config: LayoutConfig,
    size: ContentSize,
}

impl SettingsView {
    pub fn new(palette: Rc<Palette>, config: &LayoutConfig) -> Self {
        Self {
            palette,
            config: *config,
            size: ContentSize::initial(config),
        }
    }

    fn theme_lines(&self) -> [Line<'static>; 2] {
        let palette = &*self.palette;
        [
            Line::from(vec![
                Span::raw("• "),
                Span::styled("Light Theme", palette.button),
                Span::raw(" (current)"),
            ]),
            Line::from(vec![
                Span::raw("• "),
                Span::styled("Dark Theme", palette.button),
            ]),
        ]
    }

    fn setting_line(label: &'static str, value: Span<'static>) -> Line<'static> {
        Line::from(vec![Span::raw(format!("• {}: ", label)), value])
    }
}

impl Component for SettingsView {
    fn update(&mut self, msg: &Msg) -> CmdOrBatch<Cmd> {
        self.size.apply(&self.config, msg);
        CmdOrBatch::none()
    }
}

impl DynamicSize for SettingsView {
    fn get_height(&self) -> u16 {
        self.size.height
    }

    fn get_width(&self) -> u16 {
        self.size.width
    }
}

impl View for SettingsView {
    fn id(&self) -> ViewId {
        ViewId::Settings
    }

    fn description(&self) -> &'static str {
        "Application configuration"
    }

    fn heading(&self) -> &'static str {
        "⚙️ Settings"
    }

    fn render(&self) -> Text<'static> {
        let palette = &*self.palette;

        let mut lines = vec![
            heading_line(palette, self.heading()),
            Line::default(),
            section_line(palette, "Theme Settings:"),
        ];
        lines.extend(self.theme_lines());

        lines.push(Line::default());
        lines.push(section_line(palette, "Display Settings:"));
        lines.extend(
            DISPLAY_SETTINGS.map(|(label, enabled)| check_line(palette, enabled, label)),
        );

        lines.push(Line::default());
        lines.push(section_line(palette, "Application Settings:"));
        lines.extend([
            Self::setting_line("Auto-save", Span::styled("Enabled", palette.success_text)),
            Self::setting_line(
                "Notifications",
                Span::styled("Enabled", palette.success_text),
            ),
            Self::setting_line("Debug mode", Span::styled("Disabled", palette.text)),
            Self::setting_line(
                "Log level",
                Span::styled("Info", palette.text_with(palette.info)),
            ),
        ]);

        lines.push(Line::default());
        lines.push(section_line(palette, "Keyboard Shortcuts:"));
        lines.extend(SHORTCUTS.map(|(key, action)| key_line(palette, key, action)));

        Text::from(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(view: &SettingsView) -> Vec<String> {
        view.render()
            .lines
            .iter()
            .map(|line| line.to_string())
            .collect()
    }

    #[test]
    fn test_display_settings_marks() {
        let view = SettingsView::new(Rc::new(Palette::default()), &LayoutConfig::default());
        let lines = rendered(&view);

        assert!(lines.contains(&"• ✓ Show borders".to_string()));
        assert!(lines.contains(&"• ○ Compact mode".to_string()));
        assert!(lines.contains(&"• Log level: Info".to_string()));
        assert!(lines.contains(&"• Ctrl+C - Force quit".to_string()));
    }

    #[test]
    fn test_current_theme_marker() {
        let view = SettingsView::new(Rc::new(Palette::default()), &LayoutConfig::default());
        let lines = rendered(&view);
        assert!(lines.contains(&"• Light Theme (current)".to_string()));
        assert!(lines.contains(&"• Dark Theme".to_string()));
    }
}
