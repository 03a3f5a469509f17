use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    content::Section,
    ui::{message::AppMessage, state::InputMode},
};

const PAGE_STEP: u16 = 10;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, mode: InputMode) -> Option<AppMessage> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppMessage::Quit);
        }

        match mode {
            InputMode::Browse => Self::browse(key),
            InputMode::Menu => Self::menu(key),
            InputMode::Edit => Self::edit(key),
        }
    }

    fn browse(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('m'), _) => Some(AppMessage::ToggleMute),
            (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('-'), _) => Some(AppMessage::VolumeDown),
            (KeyCode::Char('l'), _) => Some(AppMessage::ToggleLanguage),
            (KeyCode::Char('t'), _) => Some(AppMessage::ToggleTheme),
            (KeyCode::Char('g'), _) => Some(AppMessage::ToggleMenu),
            (KeyCode::Char('i'), _) => Some(AppMessage::EditForm),
            (KeyCode::Char('c'), _) => Some(AppMessage::NavigateTo(Section::Contact)),
            (KeyCode::Char('p'), _) => Some(AppMessage::NavigateTo(Section::Projects)),
            (KeyCode::Char(c @ '1'..='6'), _) => {
                let index = c as usize - '1' as usize;
                Section::from_index(index).map(AppMessage::NavigateTo)
            }
            (KeyCode::Tab, _) => Some(AppMessage::NextSection),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousSection),
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Some(AppMessage::ScrollDown(1)),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Some(AppMessage::ScrollUp(1)),
            (KeyCode::PageDown, _) => Some(AppMessage::ScrollDown(PAGE_STEP)),
            (KeyCode::PageUp, _) => Some(AppMessage::ScrollUp(PAGE_STEP)),
            (KeyCode::Home, _) => Some(AppMessage::NavigateTo(Section::Home)),
            (KeyCode::End, _) => Some(AppMessage::NavigateTo(Section::Contact)),
            _ => None,
        }
    }

    fn menu(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('q') => Some(AppMessage::CloseMenu),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(AppMessage::MenuPrevious),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(AppMessage::MenuNext),
            KeyCode::Enter => Some(AppMessage::MenuSelect),
            KeyCode::Char(c @ '1'..='6') => {
                Section::from_index(c as usize - '1' as usize).map(AppMessage::NavigateTo)
            }
            _ => None,
        }
    }

    fn edit(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(AppMessage::StopEditing),
            (KeyCode::Enter, KeyModifiers::ALT) => Some(AppMessage::InsertText("\n".into())),
            (KeyCode::Enter, _) => Some(AppMessage::Submit),
            (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => Some(AppMessage::Submit),
            (KeyCode::Tab, _) | (KeyCode::Down, _) => Some(AppMessage::NextField),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => Some(AppMessage::PreviousField),
            (KeyCode::Backspace, _) => Some(AppMessage::DeleteChar),
            (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Some(AppMessage::InsertChar(c))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        for mode in [InputMode::Browse, InputMode::Menu, InputMode::Edit] {
            assert_eq!(
                InputHandler::handle_key(with(KeyCode::Char('c'), KeyModifiers::CONTROL), mode),
                Some(AppMessage::Quit)
            );
        }
    }

    #[test]
    fn digits_jump_to_sections() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('5')), InputMode::Browse),
            Some(AppMessage::NavigateTo(Section::Projects))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('1')), InputMode::Menu),
            Some(AppMessage::NavigateTo(Section::Home))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('7')), InputMode::Browse),
            None
        );
    }

    #[test]
    fn browse_keys() {
        let cases = [
            (KeyCode::Char(' '), AppMessage::TogglePlayPause),
            (KeyCode::Char('m'), AppMessage::ToggleMute),
            (KeyCode::Char('+'), AppMessage::VolumeUp),
            (KeyCode::Char('-'), AppMessage::VolumeDown),
            (KeyCode::Char('l'), AppMessage::ToggleLanguage),
            (KeyCode::Char('t'), AppMessage::ToggleTheme),
            (KeyCode::Char('g'), AppMessage::ToggleMenu),
            (KeyCode::Char('i'), AppMessage::EditForm),
            (KeyCode::PageDown, AppMessage::ScrollDown(PAGE_STEP)),
        ];
        for (code, expected) in cases {
            assert_eq!(
                InputHandler::handle_key(key(code), InputMode::Browse),
                Some(expected)
            );
        }
    }

    #[test]
    fn editing_captures_letters() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('q')), InputMode::Edit),
            Some(AppMessage::InsertChar('q'))
        );
        assert_eq!(
            InputHandler::handle_key(
                with(KeyCode::Char('A'), KeyModifiers::SHIFT),
                InputMode::Edit
            ),
            Some(AppMessage::InsertChar('A'))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Enter), InputMode::Edit),
            Some(AppMessage::Submit)
        );
        assert_eq!(
            InputHandler::handle_key(with(KeyCode::Enter, KeyModifiers::ALT), InputMode::Edit),
            Some(AppMessage::InsertText("\n".into()))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), InputMode::Edit),
            Some(AppMessage::StopEditing)
        );
    }

    #[test]
    fn menu_keys_move_cursor() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Down), InputMode::Menu),
            Some(AppMessage::MenuNext)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Enter), InputMode::Menu),
            Some(AppMessage::MenuSelect)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Esc), InputMode::Menu),
            Some(AppMessage::CloseMenu)
        );
    }
}
