use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key means while the board is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    /// Restart after game over, or play again after a win
    Restart,
    ChangeLists,
    Quit,
    None,
}

/// What a key means while the word list picker is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Toggle,
    Confirm,
    Cancel,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if is_ctrl_c(&key) {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => KeyAction::Restart,
            KeyCode::Char('l') | KeyCode::Char('L') => KeyAction::ChangeLists,

            _ => KeyAction::None,
        }
    }

    pub fn handle_menu_key_event(&self, key: KeyEvent) -> MenuAction {
        if is_ctrl_c(&key) {
            return MenuAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => MenuAction::Up,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => MenuAction::Down,
            KeyCode::Char(' ') => MenuAction::Toggle,
            KeyCode::Enter => MenuAction::Confirm,
            KeyCode::Esc => MenuAction::Cancel,
            KeyCode::Char('q') | KeyCode::Char('Q') => MenuAction::Quit,
            _ => MenuAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            KeyAction::Steer(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::Steer(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::Steer(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::Steer(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::Steer(Direction::Left)
        );

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Steer(Direction::Up)
        );
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r'))),
            KeyAction::Restart
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('L'))),
            KeyAction::ChangeLists
        );
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('x'))),
            KeyAction::None
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Tab)), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
        assert_eq!(handler.handle_menu_key_event(ctrl_c), MenuAction::Quit);
    }

    #[test]
    fn test_menu_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_menu_key_event(press(KeyCode::Up)), MenuAction::Up);
        assert_eq!(
            handler.handle_menu_key_event(press(KeyCode::Down)),
            MenuAction::Down
        );
        assert_eq!(
            handler.handle_menu_key_event(press(KeyCode::Char(' '))),
            MenuAction::Toggle
        );
        assert_eq!(
            handler.handle_menu_key_event(press(KeyCode::Enter)),
            MenuAction::Confirm
        );
        // Esc backs out of the picker instead of quitting
        assert_eq!(
            handler.handle_menu_key_event(press(KeyCode::Esc)),
            MenuAction::Cancel
        );
    }
}
