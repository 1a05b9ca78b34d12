use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

use super::*;

fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, modifiers))
}

#[test]
fn test_ctrl_shortcuts() {
    assert!(matches!(
        handle_crossterm(key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
        Some(Event::Quit)
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardCtrlC)
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardCtrlD)
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardCtrlR)
    ));
    assert!(handle_crossterm(key(KeyCode::Char('x'), KeyModifiers::CONTROL)).is_none());
}

#[test]
fn test_navigation_keys() {
    assert!(matches!(
        handle_crossterm(key(KeyCode::Tab, KeyModifiers::NONE)),
        Some(Event::KeyboardTab)
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
        Some(Event::KeyboardBackTab)
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Enter, KeyModifiers::NONE)),
        Some(Event::KeyboardEnter)
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::F(5), KeyModifiers::NONE)),
        Some(Event::KeyboardF5)
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Up, KeyModifiers::NONE)),
        Some(Event::UiScrollUp)
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Down, KeyModifiers::NONE)),
        Some(Event::UiScrollDown)
    ));
}

#[test]
fn test_plain_characters_are_forwarded() {
    match handle_crossterm(key(KeyCode::Char('a'), KeyModifiers::NONE)) {
        Some(Event::KeyboardCharInput(input)) => assert_eq!(input.key, Key::Char('a')),
        other => panic!("unexpected event: {:?}", other),
    }

    match handle_crossterm(key(KeyCode::Delete, KeyModifiers::NONE)) {
        Some(Event::KeyboardCharInput(input)) => assert_eq!(input.key, Key::Delete),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_ignores_key_release() {
    let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert!(handle_crossterm(CrosstermEvent::Key(release)).is_none());
}

#[test]
fn test_mouse_scroll() {
    let scroll = |kind| {
        CrosstermEvent::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    };
    assert!(matches!(
        handle_crossterm(scroll(MouseEventKind::ScrollUp)),
        Some(Event::UiScrollUp)
    ));
    assert!(matches!(
        handle_crossterm(scroll(MouseEventKind::ScrollDown)),
        Some(Event::UiScrollDown)
    ));
    assert!(handle_crossterm(CrosstermEvent::FocusGained).is_none());
}
