// app/actions.rs

//! Actions the user can trigger in the preview.

use enum_iterator::{all, Sequence};
use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::inputs::key::Key;

/// All possible user actions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Sequence)]
pub enum Action {
    NextAccent,
    PreviousAccent,
    Quit,
    ResetAccent,
    ToggleHelp,
    ToggleLogs,
    ToggleTheme,
}

impl Action {
    /// Return a slice with the key(s) associated to the action.
    pub fn keys(&self) -> &[Key] {
        match self {
            Action::NextAccent => &[Key::Right, Key::Char('n')],
            Action::PreviousAccent => &[Key::Left, Key::Char('p')],
            Action::Quit => &[Key::Ctrl('c'), Key::Char('q')],
            Action::ResetAccent => &[Key::Char('r')],
            Action::ToggleHelp => &[Key::Char('h')],
            Action::ToggleLogs => &[Key::Char('l')],
            Action::ToggleTheme => &[Key::Char('t'), Key::Char(' ')],
        }
    }
}

/// User friendly short description of the action
impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Action::NextAccent => "Next accent color",
            Action::PreviousAccent => "Previous accent color",
            Action::Quit => "Quit",
            Action::ResetAccent => "Default accent color",
            Action::ToggleHelp => "Toggle help",
            Action::ToggleLogs => "Toggle logs",
            Action::ToggleTheme => "Toggle light/dark",
        };
        write!(f, "{}", str)
    }
}

/// Vec of actions available to the user.
/// A key must map to at most one action.
#[derive(Default, Debug, Clone)]
pub struct Actions(Vec<Action>);

impl Actions {
    /// Given a key, find the corresponding action
    pub fn find(&self, key: Key) -> Option<Action> {
        all::<Action>()
            .filter(|action| self.0.contains(action))
            .find(|action| action.keys().contains(&key))
    }

    pub fn actions(&self) -> &[Action] {
        self.0.as_slice()
    }
}

impl From<Vec<Action>> for Actions {
    /// Builds the action set
    ///
    /// # Panics
    ///
    /// If two actions have same key
    fn from(actions: Vec<Action>) -> Self {
        let mut map: HashMap<Key, Vec<Action>> = HashMap::new();
        for action in actions.iter() {
            for key in action.keys().iter() {
                map.entry(*key).or_default().push(*action);
            }
        }
        let errors = map
            .iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(key, actions)| {
                let actions = actions
                    .iter()
                    .map(Action::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Conflict key {} with actions {}", key, actions)
            })
            .collect::<Vec<_>>();
        if !errors.is_empty() {
            panic!("{}", errors.join("; "))
        }

        Self(actions)
    }
}
