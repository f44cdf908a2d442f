//! Key mapping from terminal characters to per-seat buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Buttons, Seat, TickInput};

/// Character bindings for both seats.
///
/// A character may be bound for both seats at once; it then presses the
/// button for each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: [Vec<(char, Buttons)>; 2],
}

impl KeyMap {
    pub fn new(one: Vec<(char, Buttons)>, two: Vec<(char, Buttons)>) -> Self {
        Self {
            bindings: [one, two],
        }
    }

    /// Buttons `c` presses for `seat`.
    pub fn buttons_for(&self, seat: Seat, c: char) -> Buttons {
        self.bindings[seat.index()]
            .iter()
            .filter(|(key, _)| *key == c)
            .fold(Buttons::empty(), |acc, (_, b)| acc | *b)
    }

    /// Buttons `c` presses for both seats.
    pub fn decode_char(&self, c: char) -> TickInput {
        TickInput::new(
            self.buttons_for(Seat::One, c),
            self.buttons_for(Seat::Two, c),
        )
    }

    /// Map a terminal key event.
    ///
    /// Ctrl-C quits for everyone: raw mode swallows the signal, so it has to be
    /// handled as a key.
    pub fn decode_key(&self, key: KeyEvent) -> TickInput {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                TickInput::new(Buttons::QUIT, Buttons::QUIT)
            }
            KeyCode::Char(c) => self.decode_char(c),
            _ => TickInput::default(),
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(
            vec![
                ('`', Buttons::GHOST),
                ('j', Buttons::LEFT),
                ('k', Buttons::RIGHT),
                ('u', Buttons::ROTATE_LEFT),
                ('i', Buttons::ROTATE_RIGHT),
                ('h', Buttons::SOFT_DROP),
                ('n', Buttons::HARD_DROP),
                ('q', Buttons::QUIT),
            ],
            vec![
                ('`', Buttons::GHOST),
                ('d', Buttons::LEFT),
                ('f', Buttons::RIGHT),
                ('e', Buttons::ROTATE_LEFT),
                ('r', Buttons::ROTATE_RIGHT),
                ('g', Buttons::SOFT_DROP),
                ('v', Buttons::HARD_DROP),
                ('q', Buttons::QUIT),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_one_keys() {
        let keys = KeyMap::default();
        assert_eq!(keys.decode_char('j'), TickInput::new(Buttons::LEFT, Buttons::empty()));
        assert_eq!(keys.decode_char('k'), TickInput::new(Buttons::RIGHT, Buttons::empty()));
        assert_eq!(keys.decode_char('n'), TickInput::new(Buttons::HARD_DROP, Buttons::empty()));
    }

    #[test]
    fn test_player_two_keys() {
        let keys = KeyMap::default();
        assert_eq!(keys.decode_char('d'), TickInput::new(Buttons::empty(), Buttons::LEFT));
        assert_eq!(keys.decode_char('r'), TickInput::new(Buttons::empty(), Buttons::ROTATE_RIGHT));
        assert_eq!(keys.decode_char('g'), TickInput::new(Buttons::empty(), Buttons::SOFT_DROP));
    }

    #[test]
    fn test_shared_keys_press_for_both() {
        let keys = KeyMap::default();
        assert_eq!(keys.decode_char('q'), TickInput::new(Buttons::QUIT, Buttons::QUIT));
        assert_eq!(keys.decode_char('`'), TickInput::new(Buttons::GHOST, Buttons::GHOST));
    }

    #[test]
    fn test_unbound_and_uppercase_keys_are_ignored() {
        let keys = KeyMap::default();
        assert!(keys.decode_char('x').is_empty());
        assert!(keys.decode_char('J').is_empty());
        assert!(keys.decode_key(KeyEvent::from(KeyCode::Left)).is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_everyone() {
        let keys = KeyMap::default();
        let input = keys.decode_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(input, TickInput::new(Buttons::QUIT, Buttons::QUIT));
        // Plain 'c' is unbound.
        assert!(keys.decode_key(KeyEvent::from(KeyCode::Char('c'))).is_empty());
    }
}
