//! Pre-paint bootstrap.
//!
//! Applies the persisted theme to the document before any store exists, so
//! the first frame is already drawn with the right class and accent color.

use crate::document::DocumentStyler;
use crate::storage::Storage;
use crate::theme::{apply_state, load_state, ThemeState};
use log::debug;

/// Apply the persisted theme (or defaults) to `document`.
/// Storage is only read.
pub fn apply_persisted(storage: &dyn Storage, document: &mut dyn DocumentStyler) -> ThemeState {
    let state = load_state(storage);
    apply_state(document, &state);
    debug!("Bootstrapped document with {} theme", state.theme);
    state
}
