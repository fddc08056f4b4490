//! The theme store: owns the theme state and keeps storage, document and
//! subscribers in sync with it.

use super::loader::{apply_accent_color, apply_state, apply_theme_mode, load_state};
use super::models::{ThemeMode, ThemeState, ACCENT_COLOR_KEY, THEME_KEY};
use crate::document::DocumentStyler;
use crate::storage::Storage;
use log::{debug, info, warn};
use std::fmt;

/// Error type for theme store misuse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The store was used before [`ThemeStore::initialize`] was called.
    #[error("theme state accessed before the theme store was initialized")]
    NotInitialized,
}

/// Handle returned by [`ThemeStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&ThemeState)>;

/// Owner of the theme state.
///
/// Construct one per application and pass it by reference to whatever needs
/// to read or change the theme. The store is uninitialized until
/// [`initialize`](ThemeStore::initialize) is called; any access before that
/// fails with [`ThemeError::NotInitialized`].
///
/// Every mutation writes the document, persists the new value and notifies
/// subscribers before returning. Storage and document failures are logged
/// and otherwise ignored, the in-memory state stays authoritative.
pub struct ThemeStore {
    storage: Box<dyn Storage>,
    document: Box<dyn DocumentStyler>,
    state: Option<ThemeState>,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_subscription: u64,
}

impl ThemeStore {
    /// Returns an uninitialized store using the given capabilities.
    ///
    /// # Arguments
    ///
    /// * `storage` - Where the theme and accent color are persisted
    /// * `document` - Where the dark class and accent style properties are applied
    pub fn new(storage: impl Storage + 'static, document: impl DocumentStyler + 'static) -> Self {
        Self::with_capabilities(Box::new(storage), Box::new(document))
    }

    /// Same as [`new`](ThemeStore::new), for capabilities chosen at runtime.
    pub fn with_capabilities(storage: Box<dyn Storage>, document: Box<dyn DocumentStyler>) -> Self {
        Self {
            storage,
            document,
            state: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Load the persisted state (or defaults) and apply it to the document.
    ///
    /// Calling it again returns the current state without reloading.
    pub fn initialize(&mut self) -> ThemeState {
        if let Some(state) = &self.state {
            debug!("Theme store already initialized");
            return state.clone();
        }
        let state = load_state(self.storage.as_ref());
        apply_state(self.document.as_mut(), &state);
        info!(
            "Theme store initialized: {} theme, accent {}",
            state.theme, state.accent_color
        );
        self.state = Some(state.clone());
        state
    }

    /// Current theme values.
    pub fn get_state(&self) -> Result<ThemeState, ThemeError> {
        self.state().cloned()
    }

    /// Borrowed view of the current theme values.
    pub fn state(&self) -> Result<&ThemeState, ThemeError> {
        self.state.as_ref().ok_or(ThemeError::NotInitialized)
    }

    pub fn theme(&self) -> Result<ThemeMode, ThemeError> {
        Ok(self.state()?.theme)
    }

    pub fn accent_color(&self) -> Result<&str, ThemeError> {
        Ok(self.state()?.accent_color.as_str())
    }

    /// Replace the accent color. Any string is accepted as is.
    pub fn set_accent_color(&mut self, color: &str) -> Result<(), ThemeError> {
        let state = self.state.as_mut().ok_or(ThemeError::NotInitialized)?;
        state.accent_color = color.to_string();

        apply_accent_color(self.document.as_mut(), color);
        self.persist(ACCENT_COLOR_KEY, color);
        debug!("Accent color set to {color}");
        self.notify();
        Ok(())
    }

    /// Switch between the light and dark theme. Returns the new mode.
    pub fn toggle_theme(&mut self) -> Result<ThemeMode, ThemeError> {
        let state = self.state.as_mut().ok_or(ThemeError::NotInitialized)?;
        let theme = state.theme.toggled();
        state.theme = theme;

        apply_theme_mode(self.document.as_mut(), theme);
        self.persist(THEME_KEY, theme.as_str());
        debug!("Theme toggled to {theme}");
        self.notify();
        Ok(theme)
    }

    /// Register a callback run after every state change, in subscription
    /// order.
    pub fn subscribe(&mut self, callback: impl FnMut(&ThemeState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            warn!("Could not persist '{key}', keeping it in memory only: {e}");
        }
    }

    fn notify(&mut self) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        for (_, callback) in self.subscribers.iter_mut() {
            callback(state);
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
