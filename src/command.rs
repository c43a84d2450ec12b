use macroquad::input::{get_last_key_pressed, KeyCode};

/// A keyboard action, decoupled from the physical key that produced it.
/// Every screen interprets the same small command set for itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
}

impl Command {
    /// Read at most one command from this frame's keyboard input
    pub(crate) fn read() -> Option<Command> {
        Command::from_key(get_last_key_pressed()?)
    }

    pub(crate) fn from_key(key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Up | KeyCode::W => Some(Command::Up),
            KeyCode::Down | KeyCode::S => Some(Command::Down),
            KeyCode::Left | KeyCode::A => Some(Command::Left),
            KeyCode::Right | KeyCode::D => Some(Command::Right),
            KeyCode::Enter | KeyCode::KpEnter => Some(Command::Enter),
            KeyCode::Escape => Some(Command::Esc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Some(Command::Up))]
    #[case(KeyCode::W, Some(Command::Up))]
    #[case(KeyCode::Down, Some(Command::Down))]
    #[case(KeyCode::S, Some(Command::Down))]
    #[case(KeyCode::Left, Some(Command::Left))]
    #[case(KeyCode::A, Some(Command::Left))]
    #[case(KeyCode::Right, Some(Command::Right))]
    #[case(KeyCode::D, Some(Command::Right))]
    #[case(KeyCode::Enter, Some(Command::Enter))]
    #[case(KeyCode::KpEnter, Some(Command::Enter))]
    #[case(KeyCode::Escape, Some(Command::Esc))]
    #[case(KeyCode::Space, None)]
    #[case(KeyCode::Q, None)]
    fn test_from_key(#[case] key: KeyCode, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key(key), cmd);
    }
}
