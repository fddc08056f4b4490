// app/mod.rs

//! Controller of the preview: maps user actions onto the theme store and
//! keeps a reactive copy of the theme for rendering.

pub mod actions;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use enum_iterator::{all, last, next, previous};
use log::*;

use crate::inputs::key::Key;
use crate::theme::{AccentPreset, ThemeError, ThemeState, ThemeStore};
use actions::{Action, Actions};

/// Return status indicating whether the app should exit or not.
#[derive(Debug, PartialEq, Eq)]
pub enum AppReturn {
    Exit,
    Continue,
}

/// What the UI draws. Updated by the store subscription only.
#[derive(Debug)]
pub struct AppState {
    pub actions: Actions,
    pub show_help: bool,
    pub show_logs: bool,
    theme: Rc<RefCell<ThemeState>>,
    changes: Rc<Cell<u32>>,
}

impl AppState {
    pub fn theme(&self) -> ThemeState {
        self.theme.borrow().clone()
    }

    /// Number of theme changes seen since the preview started
    pub fn changes(&self) -> u32 {
        self.changes.get()
    }
}

/// `App` owns the theme store and the UI state derived from it.
#[derive(Debug)]
pub struct App {
    store: ThemeStore,
    pub state: AppState,
}

impl App {
    /// Returns an app driving the given store.
    ///
    /// Fails if the store was not initialized beforehand.
    pub fn new(mut store: ThemeStore) -> Result<Self, ThemeError> {
        let theme = Rc::new(RefCell::new(store.get_state()?));
        let changes = Rc::new(Cell::new(0));

        let view = Rc::clone(&theme);
        let counter = Rc::clone(&changes);
        store.subscribe(move |state| {
            trace!("Preview received theme update: {:?}", state);
            *view.borrow_mut() = state.clone();
            counter.set(counter.get() + 1);
        });

        let state = AppState {
            actions: all::<Action>().collect::<Vec<_>>().into(),
            show_help: true,
            show_logs: false,
            theme,
            changes,
        };
        Ok(Self { store, state })
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Handle a user action
    pub fn do_action(&mut self, key: Key) -> AppReturn {
        let Some(action) = self.state.actions.find(key) else {
            debug!("No action associated with {}", key);
            return AppReturn::Continue;
        };
        debug!("Run action [{:?}]", action);
        let result = match action {
            Action::NextAccent => self.cycle_accent(true),
            Action::PreviousAccent => self.cycle_accent(false),
            Action::Quit => return AppReturn::Exit,
            Action::ResetAccent => self.set_preset(AccentPreset::default()),
            Action::ToggleHelp => {
                self.state.show_help = !self.state.show_help;
                Ok(())
            }
            Action::ToggleLogs => {
                self.state.show_logs = !self.state.show_logs;
                Ok(())
            }
            Action::ToggleTheme => self.store.toggle_theme().map(|theme| {
                info!("Switched to {} theme", theme);
            }),
        };
        if let Err(e) = result {
            error!("Could not run {}: {}", action, e);
        }
        AppReturn::Continue
    }

    /// Move to the next (or previous) preset. A custom accent color counts as
    /// being before the first preset.
    fn cycle_accent(&mut self, forward: bool) -> Result<(), ThemeError> {
        let preset = match AccentPreset::from_hsl(self.store.accent_color()?) {
            Some(current) if forward => next(&current).unwrap_or_default(),
            Some(current) => previous(&current)
                .or_else(last::<AccentPreset>)
                .unwrap_or_default(),
            None if forward => AccentPreset::default(),
            None => last::<AccentPreset>().unwrap_or_default(),
        };
        self.set_preset(preset)
    }

    fn set_preset(&mut self, preset: AccentPreset) -> Result<(), ThemeError> {
        info!("Accent color set to {} ({})", preset, preset.hsl());
        self.store.set_accent_color(preset.hsl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RootElement;
    use crate::storage::MemoryStorage;
    use crate::theme::ThemeMode;

    fn app() -> (App, RootElement) {
        let root = RootElement::new();
        let mut store = ThemeStore::new(MemoryStorage::new(), root.clone());
        store.initialize();
        (App::new(store).unwrap(), root)
    }

    #[test]
    fn uninitialized_store_is_rejected() {
        let store = ThemeStore::new(MemoryStorage::new(), RootElement::new());
        assert_eq!(App::new(store).unwrap_err(), ThemeError::NotInitialized);
    }

    #[test]
    fn toggle_key_updates_view_through_subscription() {
        let (mut app, root) = app();
        assert_eq!(app.do_action(Key::Char('t')), AppReturn::Continue);

        assert_eq!(app.state.theme().theme, ThemeMode::Dark);
        assert_eq!(app.state.changes(), 1);
        assert!(root.has_class("dark"));
    }

    #[test]
    fn accent_cycles_through_presets() {
        let (mut app, _) = app();
        app.do_action(Key::Right);
        assert_eq!(app.state.theme().accent_color, AccentPreset::Blue.hsl());

        app.do_action(Key::Left);
        app.do_action(Key::Left);
        assert_eq!(app.state.theme().accent_color, AccentPreset::Zinc.hsl());

        app.do_action(Key::Char('r'));
        assert_eq!(app.state.theme().accent_color, AccentPreset::Rose.hsl());
        assert_eq!(app.state.changes(), 4);
    }

    #[test]
    fn custom_accent_cycles_to_first_preset() {
        let root = RootElement::new();
        let mut store = ThemeStore::new(MemoryStorage::new(), root);
        store.initialize();
        store.set_accent_color("1 2% 3%").unwrap();
        let mut app = App::new(store).unwrap();

        app.do_action(Key::Char('n'));
        assert_eq!(app.store().accent_color().unwrap(), AccentPreset::Rose.hsl());
    }

    #[test]
    fn quit_and_unknown_keys() {
        let (mut app, _) = app();
        assert_eq!(app.do_action(Key::Char('z')), AppReturn::Continue);
        assert_eq!(app.do_action(Key::Char('q')), AppReturn::Exit);
        assert_eq!(app.state.changes(), 0);
    }
}
