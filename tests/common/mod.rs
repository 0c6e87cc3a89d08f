//! Common test utilities for rendering the dashboard off-screen

#![allow(dead_code)]

pub mod assertions;
pub use assertions::*;

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use tui_dashboard::app::{
    event_msg::Msg,
    tea_model::Model,
    tea_update::{init, press, update},
    tea_view::view,
};

/// A model that has seen the initial window-size message.
pub fn model_with_size(width: u16, height: u16) -> Model {
    let mut model = Model::new();
    init(&mut model).expect("init should succeed");
    update(&mut model, Msg::Resize(width, height)).expect("resize should succeed");
    model
}

/// Presses each key in order, failing the test on any error.
pub fn press_all(model: &mut Model, keys: &[&str]) {
    for key in keys {
        press(model, key).unwrap_or_else(|e| panic!("key {} failed: {:?}", key, e));
    }
}

/// Renders one frame into an in-memory terminal of the given size.
pub fn draw(model: &Model, width: u16, height: u16) -> Buffer {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("test backend should build");
    let mut result = Ok(());
    terminal
        .draw(|frame| result = view(model, frame))
        .expect("draw should succeed");
    result.expect("view should render");
    terminal.backend().buffer().clone()
}

/// Every row of the buffer as a string. Wide characters leave a filler
/// cell behind them, so compare words rather than exact spacing.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| region_text(buffer, Rect::new(0, y, buffer.area.width, 1)))
        .collect()
}

/// Text of a rectangular region, rows joined with newlines.
pub fn region_text(buffer: &Buffer, region: Rect) -> String {
    let region = region.intersection(buffer.area);
    (region.top()..region.bottom())
        .map(|y| {
            (region.left()..region.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
