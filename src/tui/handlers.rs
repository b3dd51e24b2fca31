use crate::todo::models::Filter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        match key_event.code {
            KeyCode::Char('q') => NormalModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                NormalModeAction::Quit
            }
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveSelectionDown,
            KeyCode::Home | KeyCode::Char('g') => NormalModeAction::MoveSelectionFirst,
            KeyCode::End | KeyCode::Char('G') => NormalModeAction::MoveSelectionLast,
            KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char(' ') => {
                NormalModeAction::ToggleSelected
            }
            KeyCode::Char('a') => NormalModeAction::StartAdding,
            KeyCode::Char('e') => NormalModeAction::BeginEdit,
            KeyCode::Char('d') | KeyCode::Delete => NormalModeAction::RemoveSelected,
            KeyCode::Char('1') => NormalModeAction::SetFilter(Filter::All),
            KeyCode::Char('2') => NormalModeAction::SetFilter(Filter::Active),
            KeyCode::Char('3') => NormalModeAction::SetFilter(Filter::Completed),
            KeyCode::Tab => NormalModeAction::NextFilter,
            KeyCode::BackTab => NormalModeAction::PreviousFilter,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    /// Shared by the new-task input and the edit draft.
    pub fn handle_input_mode_key(key_event: KeyEvent) -> InputModeAction {
        match key_event.code {
            KeyCode::Esc => InputModeAction::Cancel,
            KeyCode::Enter => InputModeAction::Confirm,
            KeyCode::Backspace => InputModeAction::Backspace,
            KeyCode::Delete => InputModeAction::Delete,
            KeyCode::Left => InputModeAction::MoveCursorLeft,
            KeyCode::Right => InputModeAction::MoveCursorRight,
            KeyCode::Home => InputModeAction::MoveCursorHome,
            KeyCode::End => InputModeAction::MoveCursorEnd,
            KeyCode::Char('w') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputModeAction::DeleteWordBackward
            }
            KeyCode::Char(c) => InputModeAction::InsertChar(c),
            _ => InputModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    MoveSelectionFirst,
    MoveSelectionLast,
    ToggleSelected,
    StartAdding,
    BeginEdit,
    RemoveSelected,
    SetFilter(Filter),
    NextFilter,
    PreviousFilter,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum InputModeAction {
    None,
    Cancel,
    Confirm,
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    DeleteWordBackward,
    InsertChar(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_normal_mode_basic_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleSelected);

        let key_event = KeyEvent::from(KeyCode::Char('a'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::StartAdding);

        let key_event = KeyEvent::from(KeyCode::Char('e'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::BeginEdit);

        let key_event = KeyEvent::from(KeyCode::Char('d'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::RemoveSelected);
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionUp);

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionDown);

        let key_event = KeyEvent::from(KeyCode::Char('G'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionLast);
    }

    #[test]
    fn test_normal_mode_filter_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('2'));
        assert_eq!(
            KeyHandler::handle_normal_mode_key(key_event),
            NormalModeAction::SetFilter(Filter::Active)
        );

        let key_event = KeyEvent::from(KeyCode::Tab);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::NextFilter);

        let key_event = with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::PreviousFilter);
    }

    #[test]
    fn test_normal_mode_ctrl_keys() {
        let key_event = with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Char('c'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::None);
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);
    }

    #[test]
    fn test_input_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Cancel);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::Confirm);

        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_input_mode_key(key_event), InputModeAction::InsertChar('q'));

        let key_event = with_modifiers(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(
            KeyHandler::handle_input_mode_key(key_event),
            InputModeAction::DeleteWordBackward
        );
    }
}
