//! Navigation tests: number keys switch views, quit keys end the session.

mod common;

use common::{
    assert_screen_contains, assert_screen_lacks, draw, model_with_size, press_all, region_text,
};
use ratatui::{layout::Rect, style::Modifier};
use tui_dashboard::app::{
    event_msg::{CmdOrBatch, Msg},
    tea_update::{press, update},
    views::ViewId,
};

/// Row of the first line inside the content frame at 80x24:
/// header (3) + border (1) + top padding (1).
const CONTENT_HEADING_ROW: u16 = 5;

fn content_heading(buffer: &ratatui::buffer::Buffer) -> String {
    region_text(buffer, Rect::new(20, CONTENT_HEADING_ROW, 60, 1))
}

#[test]
fn test_resize_then_switch_to_data() {
    let mut model = model_with_size(80, 24);
    press_all(&mut model, &["2"]);

    let buffer = draw(&model, 80, 24);
    assert_screen_contains!(buffer, "Data Browser");

    let heading = content_heading(&buffer);
    assert!(heading.contains("Data Browser"), "heading was {:?}", heading);
    assert!(!heading.contains("Dashboard"), "heading was {:?}", heading);
    assert_screen_contains!(buffer, "View: Data |");
}

#[test]
fn test_each_number_key_shows_its_view() {
    let expected = [
        ("1", ViewId::Dashboard, "Dashboard"),
        ("2", ViewId::Data, "Data Browser"),
        ("3", ViewId::Settings, "Settings"),
        ("4", ViewId::Help, "Help & Documentation"),
    ];

    let mut model = model_with_size(80, 24);
    for (key, id, heading) in expected {
        press_all(&mut model, &[key]);
        assert_eq!(model.state.active_view, id);

        let buffer = draw(&model, 80, 24);
        assert!(content_heading(&buffer).contains(heading));
        assert_screen_contains!(buffer, &format!("View: {} |", id.display_name()));
    }
}

#[test]
fn test_exactly_one_bold_sidebar_item() {
    // Sidebar rows: border, "Navigation", blank, then the four items
    let first_item_row = 3 + 1 + 2;

    for (index, id) in ViewId::ALL.into_iter().enumerate() {
        let mut model = model_with_size(80, 24);
        press_all(&mut model, &[id.key()]);
        let buffer = draw(&model, 80, 24);

        let bold_rows: Vec<u16> = (first_item_row..first_item_row + 4)
            .filter(|&y| buffer[(2, y)].modifier.contains(Modifier::BOLD))
            .collect();
        assert_eq!(bold_rows, vec![first_item_row + index as u16], "{}", id);
    }
}

#[test]
fn test_unknown_keys_do_not_navigate() {
    let mut model = model_with_size(80, 24);
    press_all(&mut model, &["3"]);
    let before = draw(&model, 80, 24);

    press_all(&mut model, &["x", "5", "tab", "enter", "esc", "up"]);
    assert_eq!(model.state.active_view, ViewId::Settings);
    assert_eq!(before, draw(&model, 80, 24));
}

#[test]
fn test_quit_shows_farewell_and_ignores_input() {
    for quit_key in ["q", "ctrl+c"] {
        let mut model = model_with_size(80, 24);
        press_all(&mut model, &["4"]);

        let cmd = press(&mut model, quit_key).unwrap();
        assert!(cmd.is_quit());

        let frozen = model.state.clone();
        assert_eq!(press(&mut model, "2").unwrap(), CmdOrBatch::none());
        assert_eq!(
            update(&mut model, Msg::Resize(10, 10)).unwrap(),
            CmdOrBatch::none()
        );
        assert_eq!(model.state, frozen);

        let buffer = draw(&model, 80, 24);
        assert_screen_contains!(buffer, "Thanks for using Ratatui TUI!");
        assert_screen_lacks!(buffer, "Navigation");
        assert_screen_lacks!(buffer, "View: ");
    }
}
