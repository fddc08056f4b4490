use std::fmt::{self, Display, Formatter};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents a key, as far as the preview cares about it.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Left,
    Right,
    Unknown,
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Key::Char(' ') => write!(f, "<Space>"),
            Key::Char(c) => write!(f, "<{}>", c),
            Key::Ctrl(' ') => write!(f, "<Ctrl+Space>"),
            Key::Ctrl(c) => write!(f, "<Ctrl+{}>", c),
            _ => write!(f, "<{:?}>", self),
        }
    }
}

// convert backend KeyEvent to this crate's Key
impl From<KeyEvent> for Key {
    fn from(key_event: KeyEvent) -> Self {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char(c), KeyModifiers::CONTROL) => Key::Ctrl(c),
            (KeyCode::Char(_), KeyModifiers::ALT) => Key::Unknown,
            (KeyCode::Char(c), _) => Key::Char(c),
            (KeyCode::Left, _) => Key::Left,
            (KeyCode::Right, _) => Key::Right,
            _ => Key::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_modified_chars() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Key::from(ctrl_c), Key::Ctrl('c'));

        let shifted = KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT);
        assert_eq!(Key::from(shifted), Key::Char('T'));

        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(Key::from(f1), Key::Unknown);

        let alt_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::ALT);
        assert_eq!(Key::from(alt_t), Key::Unknown);
    }

    #[test]
    fn displays_keys() {
        assert_eq!(Key::Char(' ').to_string(), "<Space>");
        assert_eq!(Key::Ctrl('c').to_string(), "<Ctrl+c>");
        assert_eq!(Key::Left.to_string(), "<Left>");
    }
}
