use crate::app::{
    event_msg::{Cmd, CmdOrBatch, Msg},
    styles::Palette,
    tea_model::LayoutConfig,
    ui_components::{Component, ContentSize, DynamicSize},
    views::{heading_line, section_line, value_line, View, ViewId},
};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span, Text},
};
use std::rc::Rc;

const SEPARATOR_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRow {
    pub id: &'static str,
    pub name: &'static str,
    pub status: &'static str,
    pub value: &'static str,
}

impl DataRow {
    const fn new(
        id: &'static str,
        name: &'static str,
        status: &'static str,
        value: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            status,
            value,
        }
    }
}

pub const SAMPLE_ROWS: [DataRow; 5] = [
    DataRow::new("001", "Project Alpha", "Active", "$1,234"),
    DataRow::new("002", "Project Beta", "Pending", "$5,678"),
    DataRow::new("003", "Project Gamma", "Completed", "$9,012"),
    DataRow::new("004", "Project Delta", "Active", "$3,456"),
    DataRow::new("005", "Project Epsilon", "Cancelled", "$0"),
];

/// Colour for a status cell. Matching is exact and case-sensitive; unknown
/// statuses fall back to success.
pub fn status_color(palette: &Palette, status: &str) -> Color {
    match status {
        "Pending" => palette.warning,
        "Cancelled" => palette.error,
        _ => palette.success,
    }
}

#[derive(Debug, Clone)]
pub struct DataView {
    palette: Rc<Palette>,
    config: LayoutConfig,
    size: ContentSize,
    rows: Vec<DataRow>,
}

impl DataView {
    pub fn new(palette: Rc<Palette>, config: &LayoutConfig) -> Self {
        Self {
            palette,
            config: *config,
            size: ContentSize::initial(config),
            rows: SAMPLE_ROWS.to_vec(),
        }
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    fn count(&self, status: &str) -> usize {
        self.rows.iter().filter(|row| row.status == status).count()
    }

    fn header_line(&self) -> Line<'static> {
        Line::styled(
            format!("{:<15} {:<20} {:<10} {:<8}", "ID", "Name", "Status", "Value"),
            self.palette.button,
        )
    }

    fn row_line(&self, row: &DataRow) -> Line<'static> {
        let status_style = self.palette.text_with(status_color(&self.palette, row.status));
        Line::from(vec![
            Span::raw(format!("{:<15} {:<20} ", row.id, row.name)),
            Span::styled(format!("{:<10}", row.status), status_style),
            Span::raw(format!(" {:<8}", row.value)),
        ])
    }

    fn summary_lines(&self) -> Vec<Line<'static>> {
        let palette = &*self.palette;
        let counts: [(&'static str, Style); 4] = [
            ("Active", palette.success_text),
            ("Pending", palette.warning_text),
            ("Completed", palette.success_text),
            ("Cancelled", palette.error_text),
        ];

        let mut lines = vec![value_line(
            "Total Records",
            self.rows.len().to_string(),
            palette.text_with(palette.info),
        )];
        lines.extend(
            counts
                .into_iter()
                .map(|(status, style)| value_line(status, self.count(status).to_string(), style)),
        );
        lines
    }
}

impl Component for DataView {
    fn update(&mut self, msg: &Msg) -> CmdOrBatch<Cmd> {
        self.size.apply(&self.config, msg);
        CmdOrBatch::none()
    }
}

impl DynamicSize for DataView {
    fn get_height(&self) -> u16 {
        self.size.height
    }

    fn get_width(&self) -> u16 {
        self.size.width
    }
}

impl View for DataView {
    fn id(&self) -> ViewId {
        ViewId::Data
    }

    fn description(&self) -> &'static str {
        "Browse and manage data"
    }

    fn heading(&self) -> &'static str {
        "📁 Data Browser"
    }

    fn render(&self) -> Text<'static> {
        let palette = &*self.palette;

        let mut lines = vec![
            heading_line(palette, self.heading()),
            Line::default(),
            section_line(palette, "Sample Data Table:"),
            Line::default(),
            self.header_line(),
            Line::raw("─".repeat(SEPARATOR_WIDTH)),
        ];
        lines.extend(self.rows.iter().map(|row| self.row_line(row)));

        lines.push(Line::default());
        lines.push(section_line(palette, "Data Summary:"));
        lines.extend(self.summary_lines());

        Text::from(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> DataView {
        DataView::new(Rc::new(Palette::default()), &LayoutConfig::default())
    }

    fn status_span<'a>(line: &'a Line<'static>) -> &'a Span<'static> {
        &line.spans[1]
    }

    #[test]
    fn test_status_colors() {
        let palette = Palette::default();
        assert_eq!(status_color(&palette, "Active"), palette.success);
        assert_eq!(status_color(&palette, "Completed"), palette.success);
        assert_eq!(status_color(&palette, "Pending"), palette.warning);
        assert_eq!(status_color(&palette, "Cancelled"), palette.error);
    }

    #[test]
    fn test_unknown_status_falls_back_to_success() {
        let palette = Palette::default();
        assert_eq!(status_color(&palette, "Archived"), palette.success);
        assert_eq!(status_color(&palette, "pending"), palette.success);
        assert_eq!(status_color(&palette, ""), palette.success);
    }

    #[test]
    fn test_renders_five_colored_rows() {
        let view = view();
        let text = view.render();
        let rows: Vec<&Line> = text
            .lines
            .iter()
            .filter(|line| line.to_string().starts_with("00"))
            .collect();
        assert_eq!(rows.len(), 5);

        let palette = &view.palette;
        for (line, row) in rows.iter().zip(view.rows()) {
            let span = status_span(line);
            assert_eq!(span.content.trim_end(), row.status);
            assert_eq!(span.style.fg, Some(status_color(palette, row.status)));
        }
        assert_eq!(status_span(rows[1]).style.fg, Some(palette.warning));
        assert_eq!(status_span(rows[4]).style.fg, Some(palette.error));
    }

    #[test]
    fn test_row_columns_are_aligned() {
        let view = view();
        let line = view.row_line(&SAMPLE_ROWS[0]).to_string();
        assert_eq!(line.len(), 15 + 1 + 20 + 1 + 10 + 1 + 8);
        assert_eq!(
            line,
            format!(
                "{:<15} {:<20} {:<10} {:<8}",
                "001", "Project Alpha", "Active", "$1,234"
            )
        );
    }

    #[test]
    fn test_summary_counts_follow_table() {
        let rendered: Vec<String> = view()
            .render()
            .lines
            .iter()
            .map(|line| line.to_string())
            .collect();

        for expected in [
            "• Total Records: 5",
            "• Active: 2",
            "• Pending: 1",
            "• Completed: 1",
            "• Cancelled: 1",
        ] {
            assert!(rendered.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_header_uses_button_style() {
        let view = view();
        let header = view.header_line();
        assert_eq!(header.style, view.palette.button);
        assert!(header.to_string().starts_with("ID "));
    }
}
