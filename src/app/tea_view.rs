use crate::app::{
    error::Result,
    styles::Palette,
    tea_model::Model,
    tracing_macros::trace_event,
    ui_components::{header::APP_TITLE, StatusBar},
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::Paragraph,
    Frame,
};

pub fn farewell_text(palette: &Palette) -> Text<'static> {
    Text::from(Line::styled(
        format!("Thanks for using {}! 👋", APP_TITLE),
        palette.quit_text,
    ))
}

/// Draws the whole screen from the model. Sizes come from the model's
/// terminal size, clipped to the frame, on every call.
pub fn view(model: &Model, frame: &mut Frame) -> Result<()> {
    if model.is_quitting() {
        frame.render_widget(Paragraph::new(farewell_text(&model.palette)), frame.area());
        return Ok(());
    }

    let state = &model.state;
    let config = &model.config;
    let area = Rect::new(0, 0, state.terminal_width, state.terminal_height)
        .intersection(frame.area());
    trace_event!("Rendering {} into {:?}", state.active_view, area);

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(config.header_height),
        Constraint::Min(0),
        Constraint::Length(config.status_height),
    ])
    .areas(area);
    let [sidebar_area, content_area] = Layout::horizontal([
        Constraint::Length(config.sidebar_width),
        Constraint::Min(0),
    ])
    .areas(body_area);

    let view = model.active_view()?;
    let (content_width, content_height) = model.content_dimensions();

    model.header.render(frame, header_area);
    model.sidebar.render(state.active_view, frame, sidebar_area);
    model.content.render(
        view.render(),
        content_width,
        content_height,
        frame,
        content_area,
    );
    frame.render_widget(StatusBar::new(&model.palette, state.active_view), status_area);

    Ok(())
}
