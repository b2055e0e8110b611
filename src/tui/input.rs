// Key bindings
//
// Maps raw key events to page actions. The event loop only ever sees
// `Action`s; everything that changes state lives on `App`.

use crate::section::SectionId;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved per arrow/j/k press
pub const LINE_STEP: usize = 1;

/// Rows moved per mouse wheel notch
pub const WHEEL_STEP: usize = 3;

/// Something the user asked the page to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Smooth scroll to a section
    GoTo(SectionId),
    NextSection,
    PrevSection,
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,
    /// Smooth scroll back to the hero
    ScrollTop,
    /// Jump to the end of the page
    ScrollBottom,
    ToggleTheme,
    CopyEmail,
    OpenHelp,
    OpenLogs,
    CloseModal,
    Quit,
}

/// Map a key event to an action (press events only)
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('d') => Some(Action::PageDown),
            KeyCode::Char('u') => Some(Action::PageUp),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as usize) - ('1' as usize);
            Action::GoTo(SectionId::from_index(index)?)
        }
        KeyCode::Tab => Action::NextSection,
        KeyCode::BackTab => Action::PrevSection,
        // Hero CTAs: "Explore my work" / "Get in touch"
        KeyCode::Char('w') => Action::GoTo(SectionId::About),
        KeyCode::Char('i') => Action::GoTo(SectionId::Contact),
        KeyCode::Char('g') | KeyCode::Home => Action::ScrollTop,
        KeyCode::Char('G') | KeyCode::End => Action::ScrollBottom,
        KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp(LINE_STEP),
        KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown(LINE_STEP),
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Char('c') => Action::CopyEmail,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('l') => Action::OpenLogs,
        KeyCode::Esc => Action::CloseModal,
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_pick_sections() {
        assert_eq!(
            map_key(press(KeyCode::Char('1'))),
            Some(Action::GoTo(SectionId::Home))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('6'))),
            Some(Action::GoTo(SectionId::Contact))
        );
        assert_eq!(map_key(press(KeyCode::Char('7'))), None);
    }

    #[test]
    fn cta_shortcuts() {
        assert_eq!(
            map_key(press(KeyCode::Char('w'))),
            Some(Action::GoTo(SectionId::About))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('i'))),
            Some(Action::GoTo(SectionId::Contact))
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
        // Plain 'c' copies
        assert_eq!(map_key(press(KeyCode::Char('c'))), Some(Action::CopyEmail));
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
