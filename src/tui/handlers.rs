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
            KeyCode::Enter => NormalModeAction::ToggleSelectedTodo,
            KeyCode::Char('t') => NormalModeAction::ToggleAll,
            KeyCode::Char('c') => NormalModeAction::ClearCompleted,
            KeyCode::Char('1') => NormalModeAction::FilterAll,
            KeyCode::Char('2') => NormalModeAction::FilterActive,
            KeyCode::Char('3') => NormalModeAction::FilterCompleted,
            KeyCode::Tab => NormalModeAction::CycleFilter,
            KeyCode::Esc | KeyCode::Char('x') => NormalModeAction::DismissError,
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

    /// The warning screen accepts nothing but an exit.
    pub fn handle_warning_mode_key(key_event: KeyEvent) -> WarningModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => WarningModeAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                WarningModeAction::Quit
            }
            _ => WarningModeAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NormalModeAction {
    None,
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    ToggleSelectedTodo,
    ToggleAll,
    ClearCompleted,
    FilterAll,
    FilterActive,
    FilterCompleted,
    CycleFilter,
    DismissError,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum WarningModeAction {
    None,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_basic_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleSelectedTodo);

        let key_event = KeyEvent::from(KeyCode::Char('t'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ToggleAll);

        let key_event = KeyEvent::from(KeyCode::Char('c'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::ClearCompleted);
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let key_event = KeyEvent::from(KeyCode::Up);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionUp);

        let key_event = KeyEvent::from(KeyCode::Char('j'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionDown);

        let key_event = KeyEvent::from(KeyCode::Char('k'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::MoveSelectionUp);
    }

    #[test]
    fn test_normal_mode_filter_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('1'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::FilterAll);

        let key_event = KeyEvent::from(KeyCode::Char('2'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::FilterActive);

        let key_event = KeyEvent::from(KeyCode::Char('3'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::FilterCompleted);

        let key_event = KeyEvent::from(KeyCode::Tab);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::CycleFilter);
    }

    #[test]
    fn test_normal_mode_ctrl_c_quits() {
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::Quit);
    }

    #[test]
    fn test_normal_mode_dismiss_error_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::DismissError);

        let key_event = KeyEvent::from(KeyCode::Char('x'));
        assert_eq!(KeyHandler::handle_normal_mode_key(key_event), NormalModeAction::DismissError);
    }

    #[test]
    fn test_help_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('?'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::ExitHelpMode);

        let key_event = KeyEvent::from(KeyCode::Char('z'));
        assert_eq!(KeyHandler::handle_help_mode_key(key_event), HelpModeAction::None);
    }

    #[test]
    fn test_warning_mode_keys() {
        let key_event = KeyEvent::from(KeyCode::Char('q'));
        assert_eq!(KeyHandler::handle_warning_mode_key(key_event), WarningModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Esc);
        assert_eq!(KeyHandler::handle_warning_mode_key(key_event), WarningModeAction::Quit);

        let key_event = KeyEvent::from(KeyCode::Enter);
        assert_eq!(KeyHandler::handle_warning_mode_key(key_event), WarningModeAction::None);
    }
}
