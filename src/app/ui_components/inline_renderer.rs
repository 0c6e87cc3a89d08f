//! Turns styled ratatui text into ANSI strings, for output printed to the
//! normal screen once the alternate screen has been left.

use owo_colors::{OwoColorize, Style as AnsiStyle};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

fn foreground(style: AnsiStyle, color: Color) -> AnsiStyle {
    match color {
        Color::Reset => style,
        Color::Black => style.black(),
        Color::Red => style.red(),
        Color::Green => style.green(),
        Color::Yellow => style.yellow(),
        Color::Blue => style.blue(),
        Color::Magenta => style.magenta(),
        Color::Cyan => style.cyan(),
        Color::Gray => style.bright_black(),
        Color::DarkGray => style.black(),
        Color::LightRed => style.bright_red(),
        Color::LightGreen => style.bright_green(),
        Color::LightYellow => style.bright_yellow(),
        Color::LightBlue => style.bright_blue(),
        Color::LightMagenta => style.bright_magenta(),
        Color::LightCyan => style.bright_cyan(),
        Color::White => style.white(),
        Color::Rgb(r, g, b) => style.truecolor(r, g, b),
        Color::Indexed(_) => style, // Fallback for indexed colors
    }
}

fn ansi_style(style: Style) -> AnsiStyle {
    let mut ansi = AnsiStyle::new();
    if let Some(fg) = style.fg {
        ansi = foreground(ansi, fg);
    }
    if let Some(Color::Rgb(r, g, b)) = style.bg {
        ansi = ansi.on_truecolor(r, g, b);
    }
    if style.add_modifier.contains(Modifier::BOLD) {
        ansi = ansi.bold();
    }
    if style.add_modifier.contains(Modifier::DIM) {
        ansi = ansi.dimmed();
    }
    if style.add_modifier.contains(Modifier::ITALIC) {
        ansi = ansi.italic();
    }
    if style.add_modifier.contains(Modifier::UNDERLINED) {
        ansi = ansi.underline();
    }
    ansi
}

fn render_span(span: &Span<'_>, base: Style) -> String {
    let style = base.patch(span.style);
    if style == Style::default() {
        return span.content.to_string();
    }
    span.content.style(ansi_style(style)).to_string()
}

fn render_line(line: &Line<'_>, base: Style) -> String {
    let base = base.patch(line.style);
    line.spans
        .iter()
        .map(|span| render_span(span, base))
        .collect::<String>()
}

/// Renders ratatui::Text to a colorized string suitable for println!
pub fn render_text_inline(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| render_line(line, text.style))
        .collect::<Vec<String>>()
        .join("\n")
}
