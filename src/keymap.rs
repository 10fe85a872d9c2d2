//! Keyboard bindings for the viewer.

use kiss3d::event::Key;

/// One-line summary of the bindings.
pub const HELP: &str = "Q E C Z W D X A turn faces 1-8, T Y G H B N I U K J , M turn vertices 9-20, \
     hold Left Shift to reverse, R resets";

/// Action bound to a key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Turn the move with this code.
    Turn(u8),
    /// Reset the puzzle.
    Reset,
}

/// Keys for move codes 1 through 20, in order.
const TURN_KEYS: [Key; 20] = [
    // faces
    Key::Q,
    Key::E,
    Key::C,
    Key::Z,
    Key::W,
    Key::D,
    Key::X,
    Key::A,
    // vertices: tip then layer for each axis
    Key::T,
    Key::Y,
    Key::G,
    Key::H,
    Key::B,
    Key::N,
    Key::I,
    Key::U,
    Key::K,
    Key::J,
    Key::Comma,
    Key::M,
];

/// Returns what pressing `key` does, if anything.
pub fn binding(key: Key) -> Option<Binding> {
    if key == Key::R {
        return Some(Binding::Reset);
    }
    TURN_KEYS
        .iter()
        .position(|&bound| bound == key)
        .map(|i| Binding::Turn(i as u8 + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_move_has_one_key() {
        let codes: Vec<u8> = TURN_KEYS
            .iter()
            .filter_map(|&key| match binding(key) {
                Some(Binding::Turn(code)) => Some(code),
                _ => None,
            })
            .collect();
        assert_eq!(codes, (1..=20).collect::<Vec<u8>>());
    }

    #[test]
    fn test_reset_and_unbound_keys() {
        assert_eq!(binding(Key::R), Some(Binding::Reset));
        assert_eq!(binding(Key::Q), Some(Binding::Turn(1)));
        assert_eq!(binding(Key::Comma), Some(Binding::Turn(19)));
        assert_eq!(binding(Key::LShift), None);
    }
}
