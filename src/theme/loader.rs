//! Reading theme values from storage and applying them to a document

use super::models::{
    ThemeMode, ThemeState, ACCENT_COLOR_KEY, ACCENT_STYLE_PROPERTIES, DARK_CLASS, THEME_KEY,
};
use crate::document::DocumentStyler;
use crate::storage::Storage;
use log::{debug, warn};

/// Load the persisted theme state, falling back to defaults for anything
/// absent, empty, unreadable or unknown. Never fails.
pub fn load_state(storage: &dyn Storage) -> ThemeState {
    let defaults = ThemeState::default();

    let theme = match read_key(storage, THEME_KEY) {
        Some(value) => value.parse::<ThemeMode>().unwrap_or_else(|e| {
            warn!("Ignoring persisted theme: {e}. Using {}.", defaults.theme);
            defaults.theme
        }),
        None => defaults.theme,
    };

    let accent_color = read_key(storage, ACCENT_COLOR_KEY).unwrap_or(defaults.accent_color);

    let state = ThemeState {
        theme,
        accent_color,
    };
    debug!("Loaded theme state: {:?}", state);
    state
}

/// Non-empty value stored under `key`. Storage errors count as absent.
fn read_key(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            warn!("Could not read '{key}' from storage: {e}");
            None
        }
    }
}

/// Set the accent color style properties on the document.
pub(crate) fn apply_accent_color(document: &mut dyn DocumentStyler, color: &str) {
    for property in ACCENT_STYLE_PROPERTIES {
        if let Err(e) = document.set_style_property(property, color) {
            warn!("Could not set {property} on the document: {e}");
        }
    }
}

/// Add or remove the dark class on the document.
pub(crate) fn apply_theme_mode(document: &mut dyn DocumentStyler, theme: ThemeMode) {
    if let Err(e) = document.toggle_class(DARK_CLASS, theme.is_dark()) {
        warn!("Could not toggle the '{DARK_CLASS}' class on the document: {e}");
    }
}

/// Apply the whole state to the document.
pub fn apply_state(document: &mut dyn DocumentStyler, state: &ThemeState) {
    apply_theme_mode(document, state.theme);
    apply_accent_color(document, &state.accent_color);
}
