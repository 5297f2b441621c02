use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::nav::NavEvent;

/// Maps a terminal event to a navigation event. Key releases and repeats
/// are ignored.
pub(super) fn nav_event(ev: &Event) -> Option<NavEvent> {
    match ev {
        Event::Key(k) if k.kind == KeyEventKind::Press => key_event(k),
        Event::Resize(width, height) => Some(NavEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn key_event(key: &KeyEvent) -> Option<NavEvent> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(NavEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(NavEvent::Quit),

        KeyCode::Char('k') | KeyCode::Up => Some(NavEvent::Up),
        KeyCode::Char('j') | KeyCode::Down => Some(NavEvent::Down),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => Some(NavEvent::In),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => Some(NavEvent::Out),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn vim_and_arrow_keys_navigate() {
        let none = KeyModifiers::NONE;
        assert_eq!(nav_event(&press(KeyCode::Char('j'), none)), Some(NavEvent::Down));
        assert_eq!(nav_event(&press(KeyCode::Up, none)), Some(NavEvent::Up));
        assert_eq!(nav_event(&press(KeyCode::Char('l'), none)), Some(NavEvent::In));
        assert_eq!(nav_event(&press(KeyCode::Left, none)), Some(NavEvent::Out));
        assert_eq!(nav_event(&press(KeyCode::Char('x'), none)), None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            nav_event(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(NavEvent::Quit)
        );
        assert_eq!(
            nav_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(NavEvent::Quit)
        );
    }

    #[test]
    fn releases_are_ignored() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(nav_event(&ev), None);
    }

    #[test]
    fn resize_carries_size() {
        assert_eq!(
            nav_event(&Event::Resize(100, 30)),
            Some(NavEvent::Resize {
                width: 100,
                height: 30
            })
        );
    }
}
