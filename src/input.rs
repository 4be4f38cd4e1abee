use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::Focus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Down,
    Up,
    Search,
    OpenInBrowser,
    ToggleFocus,
    Backspace,
    QueryChar(char),
    ClearQuery,
    None,
}

pub fn poll_action(focus: Focus) -> anyhow::Result<Action> {
    if !event::poll(Duration::from_millis(50))? {
        return Ok(Action::None);
    }

    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(map_key(focus, key)),
        _ => Ok(Action::None),
    }
}

pub fn map_key(focus: Focus, KeyEvent { code, modifiers, .. }: KeyEvent) -> Action {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (code, modifiers) {
        return Action::Quit;
    }

    match focus {
        Focus::Editing => match (code, modifiers) {
            (KeyCode::Enter, _) => Action::Search,
            (KeyCode::Esc, _) | (KeyCode::Tab, _) => Action::ToggleFocus,
            (KeyCode::Backspace, _) => Action::Backspace,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearQuery,
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => Action::QueryChar(c),
            _ => Action::None,
        },
        Focus::Browsing => match (code, modifiers) {
            (KeyCode::Char('q'), _) => Action::Quit,
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Action::Down,
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Action::Up,
            (KeyCode::Char('o'), _) | (KeyCode::Enter, _) => Action::OpenInBrowser,
            (KeyCode::Char('s'), _) => Action::Search,
            (KeyCode::Char('/'), _) | (KeyCode::Char('i'), _) | (KeyCode::Tab, _) => {
                Action::ToggleFocus
            }
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn editing_sends_letters_to_query() {
        assert_eq!(map_key(Focus::Editing, key(KeyCode::Char('q'))), Action::QueryChar('q'));
        assert_eq!(
            map_key(Focus::Editing, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Action::QueryChar('A')
        );
        assert_eq!(map_key(Focus::Editing, key(KeyCode::Enter)), Action::Search);
        assert_eq!(map_key(Focus::Editing, key(KeyCode::Esc)), Action::ToggleFocus);
        assert_eq!(
            map_key(Focus::Editing, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Action::ClearQuery
        );
    }

    #[test]
    fn browsing_keys() {
        assert_eq!(map_key(Focus::Browsing, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(map_key(Focus::Browsing, key(KeyCode::Char('j'))), Action::Down);
        assert_eq!(map_key(Focus::Browsing, key(KeyCode::Up)), Action::Up);
        assert_eq!(map_key(Focus::Browsing, key(KeyCode::Enter)), Action::OpenInBrowser);
        assert_eq!(map_key(Focus::Browsing, key(KeyCode::Char('/'))), Action::ToggleFocus);
        assert_eq!(map_key(Focus::Browsing, key(KeyCode::Char('s'))), Action::Search);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(Focus::Editing, ctrl_c), Action::Quit);
        assert_eq!(map_key(Focus::Browsing, ctrl_c), Action::Quit);
    }
}
