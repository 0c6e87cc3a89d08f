use crate::app::{
    error::Result,
    event_msg::{Key, Msg, Sub},
    tea_model::Model,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub fn subscriptions(model: &Model) -> Vec<Sub> {
    if model.state.quitting {
        vec![]
    } else {
        vec![Sub::KeyboardInput, Sub::TerminalResize]
    }
}

pub fn poll_subscriptions(model: &Model, timeout: Duration) -> Result<Option<Msg>> {
    let subs = subscriptions(model);

    if subs.contains(&Sub::KeyboardInput) || subs.contains(&Sub::TerminalResize) {
        if event::poll(timeout)? {
            return Ok(crossterm_to_msg(event::read()?));
        }
    }

    Ok(None)
}

pub fn crossterm_to_msg(event: Event) -> Option<Msg> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_name(&key).map(|name| Msg::KeyPressed(Key::new(name)))
        }
        Event::Resize(width, height) => Some(Msg::Resize(width, height)),
        _ => None,
    }
}

/// Names a key press the way the views match on it: characters as
/// themselves, named keys in lowercase, and `ctrl+`/`alt+` prefixes.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let base = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.to_ascii_lowercase().to_string()
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        _ => return None,
    };

    let mut name = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("alt+");
    }
    name.push_str(&base);
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_and_digit_keys() {
        assert_eq!(
            crossterm_to_msg(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Msg::key("q"))
        );
        assert_eq!(
            crossterm_to_msg(press(KeyCode::Char('3'), KeyModifiers::NONE)),
            Some(Msg::key("3"))
        );
    }

    #[test]
    fn test_ctrl_c_is_named() {
        assert_eq!(
            crossterm_to_msg(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::key("ctrl+c"))
        );
        assert_eq!(
            crossterm_to_msg(press(KeyCode::Char('C'), KeyModifiers::CONTROL)),
            Some(Msg::key("ctrl+c"))
        );
    }

    #[test]
    fn test_shifted_char_keeps_case() {
        assert_eq!(
            crossterm_to_msg(press(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(Msg::key("Q"))
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(
            crossterm_to_msg(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Msg::key("enter"))
        );
        assert_eq!(
            crossterm_to_msg(press(KeyCode::Left, KeyModifiers::ALT)),
            Some(Msg::key("alt+left"))
        );
        assert_eq!(
            crossterm_to_msg(press(KeyCode::F(5), KeyModifiers::NONE)),
            Some(Msg::key("f5"))
        );
    }

    #[test]
    fn test_release_events_are_dropped() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(crossterm_to_msg(Event::Key(release)), None);
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(
            crossterm_to_msg(Event::Resize(120, 40)),
            Some(Msg::Resize(120, 40))
        );
        assert_eq!(crossterm_to_msg(Event::FocusGained), None);
    }
}
