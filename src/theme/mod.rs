//! Theme system for theme-store
//!
//! This module owns the light/dark mode and accent color, persists them
//! through a [`Storage`](crate::storage::Storage) and applies them through a
//! [`DocumentStyler`](crate::document::DocumentStyler).

pub mod loader;
pub mod models;
pub mod parser;
pub mod store;


pub use loader::{apply_state, load_state};
pub use models::{AccentPreset, ThemeMode, ThemeState, DEFAULT_ACCENT_COLOR};
pub use store::{SubscriptionId, ThemeError, ThemeStore};
