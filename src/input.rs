//! Keyboard mapping for the terminal UI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::control::ControlAction;
use crate::game::Direction;
use crate::strategy::StrategyKind;

/// Translate a key event into a control action
pub fn map_key(key: KeyEvent) -> Option<ControlAction> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(ControlAction::Quit);
    }

    match key.code {
        // Movement - arrow keys and WASD
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(ControlAction::Steer(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(ControlAction::Steer(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(ControlAction::Steer(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(ControlAction::Steer(Direction::Right))
        }

        // Autopilots; pressing the active one returns to player control
        KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(ControlAction::ToggleStrategy(StrategyKind::FixedCycle))
        }
        KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(ControlAction::ToggleStrategy(StrategyKind::AdaptiveCycle))
        }
        KeyCode::Char('g') | KeyCode::Char('G') => {
            Some(ControlAction::ToggleStrategy(StrategyKind::Dummy))
        }

        // Controls
        KeyCode::Char('t') | KeyCode::Char('T') => Some(ControlAction::ToggleWrapAround),
        KeyCode::Char(' ') => Some(ControlAction::Restart),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(ControlAction::SpeedUp),
        KeyCode::Char('-') => Some(ControlAction::SpeedDown),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(ControlAction::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(ControlAction::Steer(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(ControlAction::Steer(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('D'))),
            Some(ControlAction::Steer(Direction::Right))
        );
    }

    #[test]
    fn test_strategy_keys() {
        assert_eq!(
            map_key(press(KeyCode::Char('h'))),
            Some(ControlAction::ToggleStrategy(StrategyKind::FixedCycle))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('j'))),
            Some(ControlAction::ToggleStrategy(StrategyKind::AdaptiveCycle))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('g'))),
            Some(ControlAction::ToggleStrategy(StrategyKind::Dummy))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(ControlAction::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(ControlAction::Quit)
        );
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert_eq!(map_key(press(KeyCode::Char('z'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }
}
